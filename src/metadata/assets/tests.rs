use super::*;

use crate::models::steam::Screenshot;
use crate::probe::MockExistenceProbe;

const APP: AppId = AppId { app_id: 420 };
const CDN: &str = "https://cdn.test";

fn resolver_with(existing: &'static [&'static str]) -> AssetResolver {
    let mut prober = MockExistenceProbe::new();
    prober.expect_probe().returning(move |url| existing.iter().any(|suffix| url.ends_with(suffix)));
    AssetResolver::new(CDN, Box::new(prober))
}

fn resolver_never_probing() -> AssetResolver {
    let mut prober = MockExistenceProbe::new();
    prober.expect_probe().never();
    AssetResolver::new(CDN, Box::new(prober))
}

fn common(fields: &[(&str, &str)]) -> KeyValue {
    let leaves = fields.iter().map(|(k, v)| KeyValue::leaf(k, v)).collect();
    KeyValue::section("appinfo", vec![KeyValue::section("common", leaves)])
}

fn screenshots(paths: &[&str]) -> StoreAppDetails {
    StoreAppDetails {
        screenshots: paths
            .iter()
            .enumerate()
            .map(|(i, p)| Screenshot { id: i as u32, path_thumbnail: p.to_string(), path_full: p.to_string() })
            .collect(),
        ..Default::default()
    }
}

#[test]
fn icon_prefers_client_icon() {
    let info = common(&[("clienticon", "abc"), ("icon", "def")]);

    assert_eq!(
        resolver_never_probing().icon(APP, Some(&info)),
        Some("https://cdn.test/steamcommunity/public/images/apps/420/abc.ico".to_string())
    );
}

#[test]
fn icon_falls_back_to_jpg_icon() {
    let info = common(&[("clienticon", ""), ("icon", "def")]);

    assert_eq!(
        resolver_never_probing().icon(APP, Some(&info)),
        Some("https://cdn.test/steamcommunity/public/images/apps/420/def.jpg".to_string())
    );
}

#[test]
fn no_icon_without_product_info() {
    let resolver = resolver_never_probing();

    assert_eq!(resolver.icon(APP, None), None);
    assert_eq!(resolver.icon(APP, Some(&common(&[("name", "x")]))), None);
}

#[test]
fn vertical_cover_when_it_exists() {
    let resolver = resolver_with(&["library_600x900_2x.jpg", "header.jpg"]);

    assert_eq!(
        resolver.cover_image(APP, None, true),
        Some("https://cdn.test/steam/apps/420/library_600x900_2x.jpg".to_string())
    );
}

#[test]
fn header_when_vertical_cover_missing() {
    let resolver = resolver_with(&["header.jpg"]);

    assert_eq!(
        resolver.cover_image(APP, None, true),
        Some("https://cdn.test/steam/apps/420/header.jpg".to_string())
    );
}

#[test]
fn vertical_covers_disabled_only_probes_header() {
    let mut prober = MockExistenceProbe::new();
    prober
        .expect_probe()
        .withf(|url| url == "https://cdn.test/steam/apps/420/header.jpg")
        .times(1)
        .return_const(true);
    let resolver = AssetResolver::new(CDN, Box::new(prober));

    assert_eq!(
        resolver.cover_image(APP, None, false),
        Some("https://cdn.test/steam/apps/420/header.jpg".to_string())
    );
}

#[test]
fn logo_when_nothing_probes() {
    let resolver = resolver_with(&[]);
    let info = common(&[("logo", "cafe")]);

    assert_eq!(
        resolver.cover_image(APP, Some(&info), true),
        Some("https://cdn.test/steamcommunity/public/images/apps/420/cafe.jpg".to_string())
    );
    assert_eq!(resolver.cover_image(APP, None, true), None);
}

#[test]
fn background_image_first_existing_candidate() {
    let resolver = resolver_with(&["page_bg_generated.jpg"]);

    assert_eq!(
        resolver.background_image(APP, None, BackgroundSource::Image),
        Some("https://cdn.test/steam/apps/420/page_bg_generated.jpg".to_string())
    );
    assert_eq!(resolver_with(&[]).background_image(APP, None, BackgroundSource::Image), None);
}

#[test]
fn background_from_store_screenshot_strips_query() {
    let store = screenshots(&["http://x/img.jpg?t=123", "http://x/other.jpg"]);

    assert_eq!(
        resolver_never_probing().background_image(APP, Some(&store), BackgroundSource::StoreScreenshot),
        Some("http://x/img.jpg".to_string())
    );
}

#[test]
fn background_from_store_screenshot_needs_store_details() {
    let resolver = resolver_never_probing();

    assert_eq!(resolver.background_image(APP, None, BackgroundSource::StoreScreenshot), None);
    assert_eq!(resolver.background_image(APP, Some(&screenshots(&[])), BackgroundSource::StoreScreenshot), None);
}

#[test]
fn fixed_backgrounds_are_not_probed() {
    let resolver = resolver_never_probing();

    assert_eq!(
        resolver.background_image(APP, None, BackgroundSource::StoreBackground),
        Some("https://cdn.test/steam/apps/420/page_bg_generated_v6b.jpg".to_string())
    );
    assert_eq!(
        resolver.background_image(APP, None, BackgroundSource::Banner),
        Some("https://cdn.test/steam/apps/420/library_hero.jpg".to_string())
    );
    assert_eq!(resolver.background_image(APP, None, BackgroundSource::None), None);
}

#[test]
fn resolve_all_assets() {
    let resolver = resolver_with(&["header.jpg", "page.bg.jpg"]);
    let info = common(&[("clienticon", "abc")]);
    let config = Config { download_vertical_covers: false, ..Config::default() };

    let expected = ResolvedAssets {
        icon: Some("https://cdn.test/steamcommunity/public/images/apps/420/abc.ico".to_string()),
        cover_image: Some("https://cdn.test/steam/apps/420/header.jpg".to_string()),
        background_image: Some("https://cdn.test/steam/apps/420/page.bg.jpg".to_string()),
    };

    assert_eq!(resolver.resolve(APP, Some(&info), None, &config), expected);
}
