#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use ureq;

use crate::config::Endpoints;
use crate::models::game::AppId;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("An http error occurred contacting the store data cache: {0}")]
    Http(#[from] ureq::Error),
    #[error("An IO error occurred reading from the store data cache: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CacheError>;

/// Intermediary cache holding raw store details payloads
#[cfg_attr(test, automock)]
pub trait StoreCacheHandling {
    /// Cached payload for `id`; an empty string means nothing is cached
    fn get_store_data(&self, id: AppId) -> Result<String>;
    fn post_store_data(&self, id: AppId, raw: &str) -> Result<()>;
}

/// Client for a remote cache service exposing `/steam/store/{appid}`
pub struct ServicesCacheClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ServicesCacheClient {
    pub fn new(base_url: &str, agent: ureq::Agent) -> ServicesCacheClient {
        ServicesCacheClient { agent, base_url: base_url.trim_end_matches('/').to_string() }
    }

    fn url(&self, id: AppId) -> String {
        format!("{}/steam/store/{}", &self.base_url, id)
    }
}

impl StoreCacheHandling for ServicesCacheClient {
    fn get_store_data(&self, id: AppId) -> Result<String> {
        Ok(self.agent.get(&self.url(id)).call()?.into_string()?)
    }

    fn post_store_data(&self, id: AppId, raw: &str) -> Result<()> {
        self.agent
            .post(&self.url(id))
            .set("Content-Type", "application/json")
            .send_string(raw)?;

        Ok(())
    }
}

/// Used when no cache service is configured: every lookup misses and writes are dropped
pub struct NoCache;

impl StoreCacheHandling for NoCache {
    fn get_store_data(&self, _id: AppId) -> Result<String> {
        Ok(String::new())
    }

    fn post_store_data(&self, _id: AppId, _raw: &str) -> Result<()> {
        Ok(())
    }
}

pub fn from_endpoints(endpoints: &Endpoints) -> Box<dyn StoreCacheHandling + Send + Sync> {
    match &endpoints.cache_service {
        Some(url) => {
            let agent = ureq::AgentBuilder::new().timeout(endpoints.timeout()).build();
            Box::new(ServicesCacheClient::new(url, agent))
        }
        None => Box::new(NoCache),
    }
}
