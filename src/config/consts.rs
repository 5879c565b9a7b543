// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://api.collegefootballdata.com";
pub const USER_AGENT: &str = "cfb_picker/0.3";

// Credential
pub const CREDENTIAL_FILE: &str = "config.json";
pub const API_KEY_ENV: &str = "CFBD_API_KEY";
pub const API_KEY_URL: &str = "https://collegefootballdata.com/";

// Games filter
pub const DEFAULT_DIVISION: &str = "fbs";

// Fallback period when the calendar is unusable
pub const FALLBACK_WEEK: u32 = 1;
pub const FALLBACK_SEASON_TYPE: &str = "regular";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "outputs";
pub const OUTPUT_PREFIX: &str = "matchup_data";
