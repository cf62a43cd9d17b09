/// Access key id of the exported credentials
pub const ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// Secret access key of the exported credentials
pub const SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Session token, only present for temporary credentials
pub const SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Expiry of the session token, recorded in RFC 3339
pub const SESSION_EXPIRES_AT: &str = "AWS_SESSION_EXPIRES_AT";

pub const ACCOUNT_ID: &str = "AWS_ACCOUNT_ID";

pub const DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

pub const REGION: &str = "AWS_REGION";

/// Every environment variable written or cleared by cred, in output order
pub const MANAGED_VARS: [&str; 7] = [
    ACCESS_KEY_ID,
    SECRET_ACCESS_KEY,
    SESSION_TOKEN,
    SESSION_EXPIRES_AT,
    ACCOUNT_ID,
    DEFAULT_REGION,
    REGION,
];

/// Default AWS region for STS operations when no region is configured
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// RFC 1123 layout with a numeric offset, used to print expiry times
pub const EXPIRY_DISPLAY_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";
