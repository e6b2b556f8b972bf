pub mod arm;
pub mod config;
pub mod image;
pub mod render;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolImageError {
    #[error("agent pool {0} not found in config")]
    UnknownPool(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
