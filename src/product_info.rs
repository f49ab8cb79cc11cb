#[cfg(test)]
mod tests;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::metadata::{self, MetadataError};
use crate::models::game::AppId;
use crate::models::keyvalue::KeyValue;

#[derive(Error, Debug)]
pub enum ProductInfoError {
    #[error("Could not connect to steam: {0}")]
    Connection(String),
    #[error("Steam product info request failed: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, ProductInfoError>;

/// Client for steam's binary product info protocol
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductInfoHandling {
    async fn get_product_info(&self, id: AppId) -> Result<KeyValue>;
}

pub struct ProductInfoFetcher {
    client: Box<dyn ProductInfoHandling + Send + Sync>,
    strict: bool,
}

impl ProductInfoFetcher {
    pub fn new(client: Box<dyn ProductInfoHandling + Send + Sync>, strict: bool) -> ProductInfoFetcher {
        ProductInfoFetcher { client, strict }
    }

    /// A single request, no retries. Failures are logged and treated as missing product info
    /// unless running in strict mode.
    pub async fn fetch(&self, id: AppId, cancel: &CancellationToken) -> metadata::Result<Option<KeyValue>> {
        let res = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(MetadataError::Cancelled),
            res = self.client.get_product_info(id) => res,
        };

        match res {
            Ok(info) => Ok(Some(info)),
            Err(e) if self.strict => Err(e.into()),
            Err(e) => {
                error!(app_id = %id, error = %e, "Failed to get steam product info");
                Ok(None)
            }
        }
    }
}
