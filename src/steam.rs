pub mod conv;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use ureq;

use crate::config::Endpoints;
use crate::models::game::AppId;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Steam store rate limit hit (429)")]
    RateLimited,
    #[error("An http error occurred fetching data from steam: {0}")]
    Http(#[from] ureq::Error),
    #[error("An IO error occurred fetching data from steam: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bad JSON in steam store data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Steam store request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Raw access to the live store details API
#[cfg_attr(test, automock)]
pub trait StoreOriginHandling {
    /// Returns the unparsed response body so it can be pushed to the cache verbatim
    fn get_raw_app_details(&self, id: AppId) -> Result<String>;
}

pub struct SteamStoreClient {
    agent: ureq::Agent,
    store_base_url: String,
}

impl SteamStoreClient {
    pub fn new(store_base_url: &str, agent: ureq::Agent) -> SteamStoreClient {
        SteamStoreClient {
            agent,
            store_base_url: store_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_endpoints(endpoints: &Endpoints) -> SteamStoreClient {
        let agent = ureq::AgentBuilder::new().timeout(endpoints.timeout()).build();
        SteamStoreClient::new(&endpoints.store_api, agent)
    }
}

impl StoreOriginHandling for SteamStoreClient {
    fn get_raw_app_details(&self, id: AppId) -> Result<String> {
        let appid: String = id.to_string();

        let req = {
            self.agent
                .get(&format!("{}/api/appdetails", &self.store_base_url))
                .query("appids", &appid)
                .query("l", "english")
        };

        match req.call() {
            Ok(res) => Ok(res.into_string()?),
            Err(ureq::Error::Status(429, _)) => Err(StoreError::RateLimited),
            Err(e) => Err(e.into()),
        }
    }
}
