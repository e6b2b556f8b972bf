use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader},
};
use thiserror::Error;
use tracing::debug;

use crate::image::{ImageSource, NodePoolView, OsType};

pub const CONFIG_KIND: &str = "Config";
pub const CONFIG_API_VERSION: &str = "poolimage.io/v1alpha1";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot load config file")]
    Load(#[from] io::Error),
    #[error("cannot parse config file")]
    Parse(#[from] serde_yaml::Error),
    #[error("unsupported config kind")]
    KindNotSupported,
    #[error("unsupported config api version")]
    VersionNotSupported,
    #[error("agent pool name must not be empty")]
    EmptyPoolName,
    #[error("agent pool name {0} is used more than once")]
    DuplicatePoolName(String),
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PoolImageConfig {
    /// The api version of the config file
    pub api_version: String,
    /// The kind of the config file
    pub kind: String,
    /// The agent pools to resolve images for
    #[serde(default)]
    pub agent_pools: Vec<NodePoolConfig>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolConfig {
    /// Pool name, embedded in every generated parameter and variable name
    pub name: String,
    /// Operating system of the pool's VMs
    #[serde(default)]
    pub os_type: OsType,
    /// Image source, the default marketplace image when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_yaml::with::singleton_map"
    )]
    pub image: Option<ImageSource>,
}

impl NodePoolConfig {
    pub fn requires_custom_image(&self) -> bool {
        self.image
            .as_ref()
            .is_some_and(ImageSource::requires_custom_image)
    }
}

impl NodePoolView for NodePoolConfig {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_windows(&self) -> bool {
        self.os_type == OsType::Windows
    }

    fn image_source(&self) -> Option<ImageSource> {
        self.image.clone()
    }
}

impl PoolImageConfig {
    /// Load a PoolImageConfig from a file.
    ///
    /// Arguments:
    ///
    /// * `path`: The path to the config file.
    ///
    /// Returns:
    ///
    /// A Result<PoolImageConfig>
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(ConfigError::Load)?;
        let reader = BufReader::new(file);
        let config: PoolImageConfig =
            serde_yaml::from_reader(reader).map_err(ConfigError::Parse)?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: PoolImageConfig =
            serde_yaml::from_str(content).map_err(ConfigError::Parse)?;

        config.validate()?;
        Ok(config)
    }

    pub fn pool(&self, name: &str) -> Option<&NodePoolConfig> {
        self.agent_pools.iter().find(|pool| pool.name == name)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.kind != CONFIG_KIND {
            return Err(ConfigError::KindNotSupported);
        }

        if self.api_version != CONFIG_API_VERSION {
            return Err(ConfigError::VersionNotSupported);
        }

        let mut seen = HashSet::new();
        for pool in &self.agent_pools {
            if pool.name.is_empty() {
                return Err(ConfigError::EmptyPoolName);
            }
            if !seen.insert(pool.name.as_str()) {
                return Err(ConfigError::DuplicatePoolName(pool.name.clone()));
            }
        }

        debug!("config validated with {} agent pools", self.agent_pools.len());
        Ok(())
    }
}
