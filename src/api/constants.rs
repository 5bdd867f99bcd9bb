pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8761";

pub const DEFAULT_CLIENT_PORT: u16 = 80;

/// label AppName
pub const KEY_LABEL_APP_NAME: &str = "AppName";

pub const UNKNOWN: &str = "unknown";

/// wire name of [`crate::api::model::Endpoint::instance_id`]
pub const WIRE_NAME_INSTANCE_ID: &str = "instanceId";

/// wire name of [`crate::api::model::Endpoint::endpoint`]
pub const WIRE_NAME_ENDPOINT: &str = "endpoint";
