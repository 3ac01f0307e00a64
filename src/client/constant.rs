pub const SITE_NAME: &str = "Game Catalog";

/// Reviews per page in the admin moderation tab.
pub const ADMIN_REVIEWS_PER_PAGE: u64 = 20;

pub const DEVELOPERS_PER_PAGE: usize = 20;

pub const ACHIEVEMENTS_PER_PAGE: usize = 25;

/// Recent reviews shown on the home page.
pub const HOME_RECENT_REVIEWS: u64 = 6;

/// Top games shown on the home page.
pub const HOME_TOP_GAMES: u64 = 4;

pub const HOME_REFRESH_INTERVAL_MS: u32 = 60_000;
