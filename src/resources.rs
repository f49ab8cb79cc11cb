/// Localized strings supplied by the host application
pub trait Resources {
    fn get_string(&self, key: &str) -> String;
}

pub const LOC_COMMUNITY_HUB: &str = "LOCSteamLinksCommunityHub";
pub const LOC_DISCUSSIONS: &str = "LOCSteamLinksDiscussions";
pub const LOC_NEWS: &str = "LOCCommonLinksNews";
pub const LOC_STORE_PAGE: &str = "LOCCommonLinksStorePage";
pub const LOC_ACHIEVEMENTS: &str = "LOCCommonLinksAchievements";
pub const LOC_WORKSHOP: &str = "LOCSteamLinksWorkshop";

/// Built-in English labels; unknown keys are echoed back
pub struct EnglishResources;

impl Resources for EnglishResources {
    fn get_string(&self, key: &str) -> String {
        match key {
            LOC_COMMUNITY_HUB => "Community Hub",
            LOC_DISCUSSIONS => "Discussions",
            LOC_NEWS => "News",
            LOC_STORE_PAGE => "Store Page",
            LOC_ACHIEVEMENTS => "Achievements",
            LOC_WORKSHOP => "Workshop",
            other => other,
        }
        .to_string()
    }
}
