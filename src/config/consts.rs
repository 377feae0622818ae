/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "humarizer.yaml";

/// Build output directory
pub const DEFAULT_OUT_DIR: &str = "dist";
/// Directory holding `logo/` and `fonts/`
pub const DEFAULT_ASSETS_DIR: &str = "assets";
/// Page sources read at build time; files missing here use the built-in copies
pub const DEFAULT_WEB_DIR: &str = "web";
pub const DEFAULT_LOGOS: &[&str] = &["humanizer-logo-light.svg", "humanizer-logo-dark.svg"];
pub const DEFAULT_FONTS: &[&str] = &[
    "CursorGothic-Regular.woff2",
    "CursorGothic-Bold.woff2",
    "BerkeleyMono-Regular.woff2",
];

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
/// Tried once when [`DEFAULT_PORT`] is taken
pub const DEFAULT_FALLBACK_PORT: u16 = 3001;

pub const DEFAULT_WATCH_ROOT: &str = ".";
/// Directory names never watched, in addition to the build output directory
pub const DEFAULT_WATCH_IGNORE: &[&str] = &["node_modules", ".git", "target"];

pub const DEFAULT_HISTORY_DIR: &str = ".humarizer";
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 800;
pub const DEFAULT_REVEAL_MIN_MS: u64 = 1;
pub const DEFAULT_REVEAL_MAX_MS: u64 = 7;
pub const DEFAULT_SETTLE_MS: u64 = 2000;
pub const DEFAULT_INTENSITY: f64 = 0.5;
