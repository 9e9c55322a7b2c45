use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Location of the JSON-file stores.
///
/// Expected environment variables:
/// - DATA_DIR: directory holding the backing files (defaults to "data")
/// - PROPERTIES_FILE: properties file name (defaults to "properties.json")
/// - CONTACTS_FILE: contacts file name (defaults to "contacts.json")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub properties_file: String,
    pub contacts_file: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let properties_file =
            env::var("PROPERTIES_FILE").unwrap_or_else(|_| "properties.json".to_string());
        let contacts_file =
            env::var("CONTACTS_FILE").unwrap_or_else(|_| "contacts.json".to_string());
        StoreConfig {
            data_dir: PathBuf::from(data_dir),
            properties_file,
            contacts_file,
        }
    }

    /// Config rooted at an explicit directory, with the default file names.
    pub fn with_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        StoreConfig {
            data_dir: dir.as_ref().to_path_buf(),
            properties_file: "properties.json".to_string(),
            contacts_file: "contacts.json".to_string(),
        }
    }

    pub fn properties_path(&self) -> PathBuf {
        self.data_dir.join(&self.properties_file)
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.data_dir.join(&self.contacts_file)
    }
}
