use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{from_reader, from_value, Value};
use tracing::debug;

const CONFIG_FILE: &str = "config.json";

pub trait Vault {
    fn read_vault_values<T: DeserializeOwned>(&self, name: &str) -> Result<T, String>;
}

/// Values stored under their own key of the vault's config file.
pub trait VaultReadable: DeserializeOwned {
    const KEY: &'static str;

    fn from_vault<V: Vault>(vault: &V) -> Result<Self, String> {
        vault.read_vault_values(Self::KEY)
    }
}

pub struct VaultImpl {
    pub path: PathBuf,
}

impl Vault for VaultImpl {
    // A missing key reads as null, so optional values can be absent
    fn read_vault_values<T: DeserializeOwned>(&self, name: &str) -> Result<T, String> {
        let path = self.path.join(CONFIG_FILE);
        debug!(path = %path.display(), key = name, "Reading vault values");

        let file = File::open(&path)
            .map_err(|why| format!("Could not read vault file {}: {}", path.display(), why))?;
        let mut config: Value = from_reader(BufReader::new(file))
            .map_err(|why| format!("Could not parse vault file {}: {}", path.display(), why))?;

        let value = config.get_mut(name).map(Value::take).unwrap_or(Value::Null);
        from_value(value).map_err(|why| format!("Could not read {} from vault: {}", name, why))
    }
}
