use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::{Credentials, provider::ProvideCredentials};
use tracing::{debug, info};

/// Load the shared SDK configuration, scoped to `profile` when one is given
pub async fn load_config(profile: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(profile) = profile {
        debug!("Using profile: {}", profile);
        loader = loader.profile_name(profile);
    }

    let config = loader.load().await;

    match config.region() {
        Some(region) => info!("Using region: {}", region),
        None => info!("No region configured"),
    }

    config
}

/// Resolve credentials through the default provider chain.
///
/// The chain runs exactly once; callers reuse the returned credentials for
/// verification and export.
pub async fn resolve_credentials(config: &SdkConfig) -> Result<Credentials> {
    let provider = config
        .credentials_provider()
        .context("No AWS credentials provider is configured")?;

    let credentials = provider.provide_credentials().await?;

    info!("Resolved AWS credentials");
    Ok(credentials)
}
