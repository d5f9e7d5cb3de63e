use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// sessionStorage
pub const PROMO_CLOSED_KEY: &str = "promoBannerClosed";
pub const POPUP_CLOSED_KEY: &str = "subscribePopupClosed";
// localStorage
pub const THEME_KEY: &str = "theme";

pub const WHATSAPP_NUMBER: &str = "59173476653";

pub const CATALOG_JSON: &str = include_str!("../content/catalog.json");
