#[cfg(test)]
mod tests;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid steam app id: {0}")]
pub struct InvalidAppId(pub String);

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AppId {
    pub app_id: u32,
}

impl From<u32> for AppId {
    fn from(app_id: u32) -> Self {
        AppId { app_id }
    }
}

impl TryFrom<&str> for AppId {
    type Error = InvalidAppId;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().parse::<u32>() {
            Ok(app_id) if app_id > 0 => Ok(AppId { app_id }),
            _ => Err(InvalidAppId(s.to_string())),
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.app_id)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: &str, url: &str) -> Link {
        Link { name: name.to_string(), url: url.to_string() }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum GameActionType {
    File,
    Url,
}

/// Resolved by the host at launch time
pub const INSTALL_DIR_VARIABLE: &str = "{InstallDir}";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GameAction {
    pub name: String,
    pub action_type: GameActionType,
    pub path: Option<String>,
    pub arguments: Option<String>,
    pub working_dir: Option<String>,
    pub is_handled_by_plugin: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ResolvedAssets {
    pub icon: Option<String>,
    pub cover_image: Option<String>,
    pub background_image: Option<String>,
}

// Unified record built from product info, store details and resolved images.
// List fields are None when the source had nothing to offer, as opposed to an empty list.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GameMetadata {
    pub name: Option<String>,
    pub links: Vec<Link>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub release_estimate: Option<DateTime<Utc>>,
    pub critic_score: Option<u32>,
    pub publishers: Option<Vec<String>>,
    pub developers: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub other_actions: Option<Vec<GameAction>>,
    pub assets: ResolvedAssets,
}
