/// Path of the Facebox recognition endpoint, appended to `http://<endpoint>`.
pub const CHECK_PATH: &str = "/facebox/check";

/// Decimal places kept for confidences and response times.
pub const ROUNDING_DECIMALS: u32 = 2;

/// Prefix of the display name used when a camera has no configured name.
pub const DEFAULT_NAME_PREFIX: &str = "Facebox";

pub const STATE_NO_PROCESSING: &str = "No_processing_performed";
pub const STATE_NO_TAUGHT_FACES: &str = "No_taught_faces";
pub const STATE_REQUEST_FAILED: &str = "Request_failed";

pub const ATTR_TOTAL_FACES: &str = "total_faces";
pub const ATTR_RESPONSE_TIME: &str = "response_time";

pub const CONFIG_DIR_NAME: &str = "Facebox";
pub const CONFIG_FILE_NAME: &str = "config.json";
