use aws_config::Region;
use aws_credential_types::Credentials;
use chrono::{DateTime, SecondsFormat, Utc};

pub mod credentials;
pub mod sts;

/// Credentials resolved for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
    pub account_id: Option<String>,
    pub region: Option<String>,
}

impl CredentialSet {
    pub fn from_sdk(credentials: &Credentials, region: Option<&Region>) -> Self {
        Self {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials
                .session_token()
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            expiration: credentials.expiry().map(DateTime::<Utc>::from),
            account_id: credentials
                .account_id()
                .map(|id| id.as_str())
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            region: region
                .map(Region::to_string)
                .filter(|region| !region.is_empty()),
        }
    }

    /// Expiration in the layout recorded in `AWS_SESSION_EXPIRES_AT`
    pub fn expiration_rfc3339(&self) -> Option<String> {
        self.expiration
            .map(|expiration| expiration.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

/// Result of the identity verification call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity {
    pub account: Option<String>,
    pub arn: Option<String>,
}

// Re-export commonly used entry points
pub use credentials::resolve_credentials;
pub use sts::get_caller_identity;
