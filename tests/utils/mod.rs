#![allow(dead_code)]

use std::fs;

use steam_metadata::config::{Config, Endpoints, Retry};

/// Convenience func to get a fixture from the standard path, as a string
pub fn fixture(s: &str) -> String {
    fs::read_to_string(format!("test/fixtures/{}", s)).unwrap()
}

/// Config pointing every endpoint at a single mock server, with a short backoff
pub fn mock_config(base_url: &str) -> Config {
    Config {
        endpoints: Endpoints {
            store_api: base_url.to_string(),
            cache_service: Some(format!("{}/cache", base_url)),
            cdn: format!("{}/cdn", base_url),
            timeout_secs: 5,
        },
        retry: Retry { max_attempts: 10, backoff_ms: 5 },
        ..Config::default()
    }
}
