use std::ops::Range;

pub const API_BASE_URL: &str = "https://testnet.humanity.org";
pub const CHECK_REWARD_PATH: &str = "/api/rewards/daily/check";
pub const CLAIM_REWARD_PATH: &str = "/api/rewards/daily/claim";

// HEADERS
pub const ACCEPT: &str = "application/json, text/plain, */*";
pub const ORIGIN: &str = "https://testnet.humanity.org";
pub const REFERER: &str = "https://testnet.humanity.org/dashboard";

// FILES
pub const CONFIG_FILE_PATH: &str = "data/config.toml";
pub const PRIVATE_KEYS_FILE_PATH: &str = "./private_keys.txt";
pub const TOKEN_FILE_PATH: &str = "./token.txt";
pub const LOGS_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "claimer.log";

// TIMINGS
pub const ACCOUNT_DELAY_MS: Range<u64> = 2000..3000;
pub const CYCLE_INTERVAL_SECS: u64 = 24 * 60 * 60;
