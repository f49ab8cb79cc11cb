
use std::collections::HashMap;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Category {
    pub id: u32,
    pub description: String,
}

// Steam sends genre ids as strings, unlike category ids
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Genre {
    pub id: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Screenshot {
    pub id: u32,
    pub path_thumbnail: String,
    pub path_full: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetacriticScore {
    pub score: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ReleaseDate {
    pub coming_soon: bool,
    pub date: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StoreAppDetails {
    pub name: Option<String>,
    pub detailed_description: Option<String>,
    pub short_description: Option<String>,
    pub release_date: Option<ReleaseDate>,
    pub metacritic: Option<MetacriticScore>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StoreAppDetailsResponseEntry {
    pub success: bool,
    pub data: Option<StoreAppDetails>,
}

// Steam keys each entry by the requested app id
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StoreAppDetailsResponse {
    #[serde(flatten)]
    pub results: HashMap<String, StoreAppDetailsResponseEntry>,
}
