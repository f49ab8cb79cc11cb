pub mod assets;
pub mod compose;


use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cache::{self, StoreCacheHandling};
use crate::config::Config;
use crate::models::game::{AppId, GameMetadata};
use crate::probe::{ExistenceProbe, HttpProber};
use crate::product_info::{ProductInfoError, ProductInfoFetcher, ProductInfoHandling};
use crate::resources::{EnglishResources, Resources};
use crate::steam::{SteamStoreClient, StoreError, StoreOriginHandling};
use crate::store::StoreDetailsFetcher;

use assets::AssetResolver;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to fetch steam store details: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to fetch steam product info: {0}")]
    ProductInfo(#[from] ProductInfoError),
    #[error("Metadata request was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, MetadataError>;

/// Builds game metadata for steam apps from product info, store details and CDN images
pub struct MetadataProvider {
    config: Config,
    product_info: ProductInfoFetcher,
    store: StoreDetailsFetcher,
    assets: AssetResolver,
    resources: Box<dyn Resources + Send + Sync>,
}

impl MetadataProvider {
    pub fn new(
        config: Config,
        product_info: Box<dyn ProductInfoHandling + Send + Sync>,
        cache: Box<dyn StoreCacheHandling + Send + Sync>,
        origin: Box<dyn StoreOriginHandling + Send + Sync>,
        prober: Box<dyn ExistenceProbe + Send + Sync>,
        resources: Box<dyn Resources + Send + Sync>,
    ) -> MetadataProvider {
        MetadataProvider {
            product_info: ProductInfoFetcher::new(product_info, config.strict),
            store: StoreDetailsFetcher::new(cache, origin, config.retry.clone(), config.strict),
            assets: AssetResolver::new(&config.endpoints.cdn, prober),
            resources,
            config,
        }
    }

    /// Provider talking to the endpoints named in `config`, with English link labels
    pub fn from_config(config: Config, product_info: Box<dyn ProductInfoHandling + Send + Sync>) -> MetadataProvider {
        let cache = cache::from_endpoints(&config.endpoints);
        let origin = Box::new(SteamStoreClient::from_endpoints(&config.endpoints));
        let prober = Box::new(HttpProber::from_endpoints(&config.endpoints));

        MetadataProvider::new(config, product_info, cache, origin, prober, Box::new(EnglishResources))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch and combine everything known about `id`.
    ///
    /// Either source failing only leaves its fields empty, so this returns a record unless the
    /// request is cancelled or strict mode is on.
    ///
    /// Cancellation interrupts store API requests and retry backoff. Cache lookups and CDN image
    /// checks are short blocking calls and run to completion.
    pub async fn get_metadata(
        &self,
        id: AppId,
        existing_name: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<GameMetadata> {
        // Independent fetches; one failing doesn't cancel the other
        let (info, store) = tokio::join!(
            self.product_info.fetch(id, cancel),
            self.store.fetch(id, cancel),
        );
        let (info, store) = (info?, store?);

        if cancel.is_cancelled() {
            return Err(MetadataError::Cancelled);
        }

        debug!(
            app_id = %id,
            product_info = info.is_some(),
            store_details = store.is_some(),
            "Fetched steam metadata sources"
        );

        let assets = self.assets.resolve(id, info.as_ref(), store.as_ref(), &self.config);

        Ok(compose::compose(id, info.as_ref(), store.as_ref(), assets, existing_name, self.resources.as_ref()))
    }
}
