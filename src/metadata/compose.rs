
use crate::models::game::{
    AppId, GameAction, GameActionType, GameMetadata, Link, ResolvedAssets, INSTALL_DIR_VARIABLE,
};
use crate::models::keyvalue::KeyValue;
use crate::models::steam::StoreAppDetails;
use crate::resources::*;
use crate::steam::conv::parse_release_date;

pub const CDN_HOST: &str = "steamcdn-a.akamaihd.net";
const CDN_HOST_PLACEHOLDER: &str = "%CDN_HOST_MEDIA_SSL%";

// Store category ids with special meaning
pub const CATEGORY_ACHIEVEMENTS: u32 = 22;
pub const CATEGORY_WORKSHOP: u32 = 30;
// VR support is read from product info instead
pub const CATEGORY_VR: u32 = 31;

const VR: &str = "VR";
const VR_SEATED: &str = "VR Seated";
const VR_STANDING: &str = "VR Standing";
const VR_ROOM_SCALE: &str = "VR Room-Scale";
const VR_KEYBOARD_MOUSE: &str = "VR Keyboard / Mouse";
const VR_GAMEPAD: &str = "VR Gamepad";
const VR_MOTION_CONTROLLERS: &str = "VR Motion Controllers";

const MANUAL: &str = "Manual";
const WINDOWS: &str = "windows";

pub fn parse_description(description: &str) -> String {
    description.replace(CDN_HOST_PLACEHOLDER, CDN_HOST)
}

fn push_title_word(out: &mut String, word: &str) {
    // Acronyms stay as they are
    if word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase) {
        out.push_str(word);
        return;
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        for c in chars {
            out.extend(c.to_lowercase());
        }
    }
}

/// Capitalise the first letter of each word, e.g. "Full controller support" ->
/// "Full Controller Support". Any character other than a letter, digit or apostrophe
/// separates words.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word = String::new();

    for c in s.chars() {
        if c.is_alphanumeric() || c == '\'' {
            word.push(c);
        } else {
            push_title_word(&mut out, &word);
            word.clear();
            out.push(c);
        }
    }
    push_title_word(&mut out, &word);

    out
}

fn has_category(store: Option<&StoreAppDetails>, id: u32) -> bool {
    store.is_some_and(|s| s.categories.iter().any(|c| c.id == id))
}

fn links(id: AppId, store: Option<&StoreAppDetails>, resources: &dyn Resources) -> Vec<Link> {
    let mut links = vec![
        Link::new(&resources.get_string(LOC_COMMUNITY_HUB), &format!("https://steamcommunity.com/app/{}", id)),
        Link::new(
            &resources.get_string(LOC_DISCUSSIONS),
            &format!("https://steamcommunity.com/app/{}/discussions/", id),
        ),
        Link::new(&resources.get_string(LOC_NEWS), &format!("https://store.steampowered.com/news/?appids={}", id)),
        Link::new(&resources.get_string(LOC_STORE_PAGE), &format!("https://store.steampowered.com/app/{}", id)),
        Link::new("PCGamingWiki", &format!("https://pcgamingwiki.com/api/appid.php?appid={}", id)),
    ];

    if has_category(store, CATEGORY_ACHIEVEMENTS) {
        links.push(Link::new(
            &resources.get_string(LOC_ACHIEVEMENTS),
            &format!("https://steamcommunity.com/stats/{}/achievements", id),
        ));
    }

    if has_category(store, CATEGORY_WORKSHOP) {
        links.push(Link::new(
            &resources.get_string(LOC_WORKSHOP),
            &format!("https://steamcommunity.com/app/{}/workshop/", id),
        ));
    }

    links
}

fn apply_store_details(meta: &mut GameMetadata, store: &StoreAppDetails) {
    meta.description = store.detailed_description.as_deref().map(parse_description);
    meta.release_date = store.release_date.as_ref().map(|r| r.date.clone());
    meta.release_estimate = store.release_date.as_ref().and_then(|r| parse_release_date(&r.date));
    meta.critic_score = store.metacritic.as_ref().map(|m| m.score);

    if store.publishers.iter().any(|p| !p.is_empty()) {
        meta.publishers = Some(store.publishers.clone());
    }

    if store.developers.iter().any(|d| !d.is_empty()) {
        meta.developers = Some(store.developers.clone());
    }

    // Achievements and workshop categories stay features even though they also produce links
    if !store.categories.is_empty() {
        meta.features = Some(
            store
                .categories
                .iter()
                .filter(|c| c.id != CATEGORY_VR)
                .map(|c| title_case(&c.description))
                .collect(),
        );
    }

    if !store.genres.is_empty() {
        meta.genres = Some(store.genres.iter().map(|g| g.description.clone()).collect());
    }
}

fn runs_on_windows(task: &KeyValue) -> bool {
    match task.path(&["config", "oslist"]) {
        Some(os) => os.value() == Some(WINDOWS),
        None => true,
    }
}

/// Launch entries other than the primary one, plus the manual if there is one
pub fn game_actions(info: &KeyValue) -> Vec<GameAction> {
    let mut actions: Vec<GameAction> = info
        .children_at(&["config", "launch"])
        .iter()
        .skip(1)
        .filter(|task| runs_on_windows(task))
        // Tasks without a description aren't meant to be shown to users
        .filter_map(|task| {
            Some(GameAction {
                name: task.str_at(&["description"])?.to_string(),
                action_type: GameActionType::File,
                path: task.str_at(&["executable"]).map(str::to_string),
                arguments: Some(task.str_at(&["arguments"]).unwrap_or_default().to_string()),
                working_dir: Some(INSTALL_DIR_VARIABLE.to_string()),
                is_handled_by_plugin: false,
            })
        })
        .collect();

    if let Some(manual) = info.path(&["extended", "gamemanualurl"]) {
        actions.push(GameAction {
            name: MANUAL.to_string(),
            action_type: GameActionType::Url,
            path: manual.value().map(str::to_string),
            arguments: None,
            working_dir: None,
            is_handled_by_plugin: false,
        });
    }

    actions
}

/// Append VR features described by product info, returning whether any were found.
///
/// Room-scale is only added if not already present; the other VR features are appended as is.
pub fn add_vr_features(info: &KeyValue, features: &mut Vec<String>) -> bool {
    let mut vr_support = false;

    for area in info.children_at(&["common", "playareavr"]) {
        let enabled = area.value() == Some("1");
        if area.name == "seated" && enabled {
            features.push(VR_SEATED.to_string());
            vr_support = true;
        } else if area.name == "standing" && enabled {
            features.push(VR_STANDING.to_string());
            vr_support = true;
        }

        if area.name.contains("roomscale") {
            if !features.iter().any(|f| f == VR_ROOM_SCALE) {
                features.push(VR_ROOM_SCALE.to_string());
            }
            vr_support = true;
        }
    }

    for controller in info.children_at(&["common", "controllervr"]) {
        let enabled = controller.value() == Some("1");
        if controller.name == "kbm" && enabled {
            features.push(VR_KEYBOARD_MOUSE.to_string());
            vr_support = true;
        } else if controller.name == "xinput" && enabled {
            features.push(VR_GAMEPAD.to_string());
            vr_support = true;
        }

        if (controller.name == "oculus" || controller.name == "steamvr") && enabled {
            features.push(VR_MOTION_CONTROLLERS.to_string());
            vr_support = true;
        }
    }

    if vr_support {
        features.push(VR.to_string());
    }

    vr_support
}

fn apply_product_info(meta: &mut GameMetadata, info: &KeyValue) {
    meta.other_actions = Some(game_actions(info));

    // The feature list is created here if store details didn't provide one
    let had_features = meta.features.is_some();
    let mut features = meta.features.take().unwrap_or_default();
    if add_vr_features(info, &mut features) || had_features {
        meta.features = Some(features);
    }
}

/// Merge whatever was fetched into a single record. Missing sources leave their fields unset.
pub fn compose(
    id: AppId,
    info: Option<&KeyValue>,
    store: Option<&StoreAppDetails>,
    assets: ResolvedAssets,
    existing_name: Option<&str>,
    resources: &dyn Resources,
) -> GameMetadata {
    let mut meta = GameMetadata {
        name: info
            .and_then(|i| i.str_at(&["common", "name"]))
            .or(existing_name)
            .map(str::to_string),
        links: links(id, store, resources),
        assets,
        ..Default::default()
    };

    if let Some(store) = store {
        apply_store_details(&mut meta, store);
    }

    if let Some(info) = info {
        apply_product_info(&mut meta, info);
    }

    meta
}
