#[cfg(test)]
mod tests;

use tracing::debug;

use crate::config::{BackgroundSource, Config};
use crate::models::game::{AppId, ResolvedAssets};
use crate::models::keyvalue::KeyValue;
use crate::models::steam::StoreAppDetails;
use crate::probe::ExistenceProbe;

const VERTICAL_COVER: &str = "library_600x900_2x.jpg";
const HEADER_IMAGE: &str = "header.jpg";
const STORE_BACKGROUND: &str = "page_bg_generated_v6b.jpg";
const BANNER: &str = "library_hero.jpg";

// Tried in order for BackgroundSource::Image
const BACKGROUND_IMAGES: [&str; 2] = ["page.bg.jpg", "page_bg_generated.jpg"];

/// Derives icon, cover and background URLs, probing the CDN to choose between candidates
pub struct AssetResolver {
    cdn: String,
    prober: Box<dyn ExistenceProbe + Send + Sync>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

impl AssetResolver {
    pub fn new(cdn: &str, prober: Box<dyn ExistenceProbe + Send + Sync>) -> AssetResolver {
        AssetResolver { cdn: cdn.trim_end_matches('/').to_string(), prober }
    }

    fn app_asset(&self, id: AppId, file: &str) -> String {
        format!("{}/steam/apps/{}/{}", &self.cdn, id, file)
    }

    fn community_image(&self, id: AppId, hash: &str, ext: &str) -> String {
        format!("{}/steamcommunity/public/images/apps/{}/{}.{}", &self.cdn, id, hash, ext)
    }

    fn first_existing(&self, candidates: Vec<String>) -> Option<String> {
        candidates.into_iter().find(|url| {
            let exists = self.prober.probe(url);
            debug!(url = %url, exists, "Probed asset url");
            exists
        })
    }

    pub fn icon(&self, id: AppId, info: Option<&KeyValue>) -> Option<String> {
        let info = info?;

        if let Some(hash) = non_empty(info.str_at(&["common", "clienticon"])) {
            return Some(self.community_image(id, hash, "ico"));
        }

        non_empty(info.str_at(&["common", "icon"])).map(|hash| self.community_image(id, hash, "jpg"))
    }

    pub fn cover_image(&self, id: AppId, info: Option<&KeyValue>, vertical: bool) -> Option<String> {
        let mut candidates = vec![];
        if vertical {
            candidates.push(self.app_asset(id, VERTICAL_COVER));
        }
        candidates.push(self.app_asset(id, HEADER_IMAGE));

        self.first_existing(candidates).or_else(|| {
            // The logo is taken on trust, without probing
            non_empty(info?.str_at(&["common", "logo"])).map(|hash| self.community_image(id, hash, "jpg"))
        })
    }

    pub fn background_image(
        &self,
        id: AppId,
        store: Option<&StoreAppDetails>,
        source: BackgroundSource,
    ) -> Option<String> {
        match source {
            BackgroundSource::Image => {
                self.first_existing(BACKGROUND_IMAGES.iter().map(|f| self.app_asset(id, f)).collect())
            }
            BackgroundSource::StoreScreenshot => {
                store?.screenshots.first().map(|s| strip_query(&s.path_full).to_string())
            }
            BackgroundSource::StoreBackground => Some(self.app_asset(id, STORE_BACKGROUND)),
            BackgroundSource::Banner => Some(self.app_asset(id, BANNER)),
            BackgroundSource::None => None,
        }
    }

    pub fn resolve(
        &self,
        id: AppId,
        info: Option<&KeyValue>,
        store: Option<&StoreAppDetails>,
        config: &Config,
    ) -> ResolvedAssets {
        ResolvedAssets {
            icon: self.icon(id, info),
            cover_image: self.cover_image(id, info, config.download_vertical_covers),
            background_image: self.background_image(id, store, config.background_source),
        }
    }
}
