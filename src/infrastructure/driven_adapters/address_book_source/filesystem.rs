//! Filesystem Address Book Source
//!
//! Reads `<root>/<chain_id>/*Addresses.json` for each configured root, in
//! root order. File names within a directory are sorted so merge precedence
//! does not depend on directory enumeration order.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::domain::gateways::AddressBookSource;
use crate::domain::models::address_book::{is_address_book, AddressBookFile};
use crate::domain::models::chain::ChainId;
use crate::shared::errors::RepositoryError;

/// Filesystem implementation of AddressBookSource
pub struct FsAddressBookSource {
    roots: Vec<PathBuf>,
}

impl FsAddressBookSource {
    /// Create a new source; later roots take precedence over earlier ones
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn list_address_books(dir: &Path) -> Result<Vec<String>, RepositoryError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| RepositoryError::io(dir, e))? {
            let entry = entry.map_err(|e| RepositoryError::io(dir, e))?;
            // Non UTF-8 names can never end with the address book suffix.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if is_address_book(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_book(path: &Path) -> Result<serde_json::Value, RepositoryError> {
        let raw = fs::read(path).map_err(|e| RepositoryError::io(path, e))?;
        serde_json::from_slice(&raw).map_err(|source| RepositoryError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl AddressBookSource for FsAddressBookSource {
    fn load(&self, chain_id: ChainId) -> Result<Vec<AddressBookFile>, RepositoryError> {
        let mut books = Vec::new();

        for root in &self.roots {
            let dir = root.join(chain_id.to_string());
            match fs::metadata(&dir) {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => return Err(RepositoryError::io(&dir, io::Error::other("not a directory"))),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(chain_id = %chain_id, dir = %dir.display(), "No address book directory");
                    continue;
                }
                Err(e) => return Err(RepositoryError::io(&dir, e)),
            }

            for name in Self::list_address_books(&dir)? {
                let path = dir.join(&name);
                let contents = Self::read_book(&path)?;
                tracing::debug!(chain_id = %chain_id, file = %path.display(), "Loaded address book");
                books.push(AddressBookFile::new(name, contents));
            }
        }

        Ok(books)
    }
}
