use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt as _;
use url::Url;

use crate::database::{Database, DatabaseError};
use crate::error::{ApplicationError, ConfigLoadSnafu};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the RPC listener binds to.
    #[serde(rename = "host_address")]
    pub host: SocketAddr,

    /// Connection string for the document store, credentials included.
    #[serde(rename = "mongodb_uri")]
    pub mongodb_uri: Url,

    #[serde(rename = "log_dir", default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Config {
    pub fn from_env() -> Result<Config, ApplicationError> {
        envy::from_env::<Config>().context(ConfigLoadSnafu)
    }

    pub async fn database(&self) -> Result<Database, DatabaseError> {
        Database::connect(&self.mongodb_uri).await
    }
}
