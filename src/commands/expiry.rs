use std::env;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use clap::Args;
use thiserror::Error;
use tracing::debug;

use crate::constants::{ACCESS_KEY_ID, EXPIRY_DISPLAY_FORMAT, SESSION_EXPIRES_AT, SESSION_TOKEN};

/// Why the environment does not describe expiring credentials
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpiryError {
    #[error("AWS credentials are not set as environment variables")]
    NotSet,
    #[error("AWS credentials in environment variables are not temporary")]
    NotTemporary,
    #[error("AWS credentials expiration time has not been recorded in your environment")]
    NotRecorded,
    #[error("AWS credentials expiration time has not been properly recorded in your environment")]
    Malformed,
}

#[derive(Debug, Clone, Args)]
pub struct ExpiryCommand {}

impl ExpiryCommand {
    pub fn execute(self) -> Result<()> {
        let expires_at = session_expiry(|name| env::var(name).ok())?;
        println!("{}", format_expiry(&expires_at, &Local));
        Ok(())
    }
}

/// Read the recorded session expiry, checking preconditions in priority order.
///
/// Empty values count as unset.
pub fn session_expiry<F>(lookup: F) -> Result<DateTime<FixedOffset>, ExpiryError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

    if get(ACCESS_KEY_ID).is_none() {
        return Err(ExpiryError::NotSet);
    }
    if get(SESSION_TOKEN).is_none() {
        return Err(ExpiryError::NotTemporary);
    }
    let recorded = get(SESSION_EXPIRES_AT).ok_or(ExpiryError::NotRecorded)?;

    DateTime::parse_from_rfc3339(&recorded).map_err(|e| {
        debug!("Failed to parse {}={:?}: {}", SESSION_EXPIRES_AT, recorded, e);
        ExpiryError::Malformed
    })
}

pub fn format_expiry<Tz>(expires_at: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    expires_at
        .with_timezone(tz)
        .format(EXPIRY_DISPLAY_FORMAT)
        .to_string()
}
