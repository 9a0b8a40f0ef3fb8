// src/config/consts.rs

// Net config
pub const VENDOR_BASE_URL: &str = "https://streetfoodfinder.com/";
pub const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const USER_AGENT: &str = concat!("truck_finder/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Vendor defaults
pub const DEFAULT_VENDOR: &str = "thenakedempanada";
pub const DEFAULT_VENDOR_NAME: &str = "The Naked Empanada";
pub const DEFAULT_BOT_NAME: &str = "EmpanadaBot";

// Route from here unless overridden with --location
pub const DEFAULT_SOURCE: &str = "5200 Paramount Parkway";

// Vendor calendars are rendered at a fixed UTC-4, no DST
pub const UTC_OFFSET_HOURS: i32 = -4;

// Key files
pub const DEFAULT_KEYS_DIR: &str = "apikeys";
pub const ROUTING_KEY_FILE: &str = "maps";
pub const WEBHOOK_KEY_FILE: &str = "discord";

// Formatter windows
pub const DAILY_WINDOW_HOURS: i64 = 24;
pub const WEEKLY_WINDOW_DAYS: i64 = 7;
