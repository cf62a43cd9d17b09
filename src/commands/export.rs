use std::env;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    aws::{self, CallerIdentity, CredentialSet},
    constants::{
        ACCESS_KEY_ID, ACCOUNT_ID, DEFAULT_REGION, MANAGED_VARS, REGION, SECRET_ACCESS_KEY,
        SESSION_EXPIRES_AT, SESSION_TOKEN,
    },
    shell::ShellScript,
};

/// Root command: resolve, verify and print credentials as shell exports
#[derive(Debug, Clone, Default)]
pub struct ExportCommand {}

impl ExportCommand {
    pub async fn execute(self, profile: Option<&str>) -> Result<()> {
        info!(
            "Resolving credentials for profile: {}",
            profile.unwrap_or("(default chain)")
        );

        clear_managed_environment();

        let config = aws::credentials::load_config(profile).await;
        let credentials = aws::resolve_credentials(&config).await?;
        let identity = aws::get_caller_identity(&config, &credentials).await?;

        let credentials = CredentialSet::from_sdk(&credentials, config.region());
        print!("{}", export_script(&credentials, &identity)?.render()?);
        Ok(())
    }
}

/// Remove previously exported values so they never feed the provider chain
fn clear_managed_environment() {
    for name in MANAGED_VARS {
        debug!("Removing {} from the process environment", name);
        // SAFETY: the runtime is single threaded and no SDK client has been
        // created yet, so nothing else reads the environment concurrently.
        unsafe {
            env::remove_var(name);
        }
    }
}

/// Build the statements exporting `credentials` into the calling shell
pub fn export_script(credentials: &CredentialSet, identity: &CallerIdentity) -> Result<ShellScript> {
    let mut script = ShellScript::new();

    script
        .export(ACCESS_KEY_ID, &credentials.access_key_id)
        .export(SECRET_ACCESS_KEY, &credentials.secret_access_key);

    let account_id = credentials
        .account_id
        .as_deref()
        .or(identity.account.as_deref())
        .context("AWS STS returned no account id")?;
    script.export(ACCOUNT_ID, account_id);

    match &credentials.region {
        Some(region) => {
            script.export(DEFAULT_REGION, region).export(REGION, region);
        }
        None => {
            script.unset(DEFAULT_REGION).unset(REGION);
        }
    }

    match &credentials.session_token {
        Some(token) => {
            script.export(SESSION_TOKEN, token);
            match credentials.expiration_rfc3339() {
                Some(expiration) => script.export(SESSION_EXPIRES_AT, expiration),
                None => script.unset(SESSION_EXPIRES_AT),
            };
        }
        None => {
            script.unset(SESSION_TOKEN).unset(SESSION_EXPIRES_AT);
        }
    }

    Ok(script)
}
