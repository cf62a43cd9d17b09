use std::{error::Error, fmt::Debug};

use anyhow::{Result, anyhow};
use aws_config::{Region, SdkConfig};
use aws_credential_types::{Credentials, provider::SharedCredentialsProvider};
use aws_sdk_sts::{
    Client as StsClient,
    config::{Builder as StsConfigBuilder, Config as StsConfig},
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
};
use tracing::{debug, info};

use super::CallerIdentity;
use crate::constants::DEFAULT_AWS_REGION;

/// Verify `credentials` with STS GetCallerIdentity
pub async fn get_caller_identity(
    config: &SdkConfig,
    credentials: &Credentials,
) -> Result<CallerIdentity> {
    info!("Calling AWS STS GetCallerIdentity");

    let client = StsClient::from_conf(sts_config(config, credentials));

    let response = client
        .get_caller_identity()
        .send()
        .await
        .map_err(invalid_credentials)?;

    let identity = CallerIdentity {
        account: response.account().map(str::to_string),
        arn: response.arn().map(str::to_string),
    };

    debug!("Caller account: {:?}", identity.account);
    info!(
        "Credentials verified for: {}",
        identity.arn.as_deref().unwrap_or("unknown identity")
    );

    Ok(identity)
}

/// STS client configuration that signs with exactly the given credentials
fn sts_config(config: &SdkConfig, credentials: &Credentials) -> StsConfig {
    let mut builder = StsConfigBuilder::from(config)
        .credentials_provider(SharedCredentialsProvider::new(credentials.clone()));

    if config.region().is_none() {
        info!(
            "No region configured, using default {} for STS",
            DEFAULT_AWS_REGION
        );
        builder = builder.region(Region::new(DEFAULT_AWS_REGION));
    }

    builder.build()
}

/// Wrap a failed verification call, surfacing the service error code when STS returned one
pub fn invalid_credentials<E, R>(err: SdkError<E, R>) -> anyhow::Error
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    if let Some(service_err) = err.as_service_error() {
        if let Some(code) = service_err.code() {
            return anyhow!(
                "Invalid credentials: {}: {}",
                code,
                service_err.message().unwrap_or_default()
            );
        }
    }

    anyhow!("Invalid credentials: {}", DisplayErrorContext(&err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_credential_types::provider::{ProvideCredentials, future};
    use aws_sdk_sts::{error::ErrorMetadata, operation::get_caller_identity::GetCallerIdentityError};
    use aws_smithy_runtime_api::http::Response;
    use aws_smithy_types::body::SdkBody;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    /// Hands out a fresh access key on every resolution
    #[derive(Debug, Clone, Default)]
    struct CountingProvider {
        resolutions: Arc<AtomicUsize>,
    }

    impl ProvideCredentials for CountingProvider {
        fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
        where
            Self: 'a,
        {
            let n = self.resolutions.fetch_add(1, Ordering::SeqCst) + 1;
            future::ProvideCredentials::ready(Ok(Credentials::new(
                format!("ASIA{n}"),
                "secret",
                Some(format!("token{n}")),
                None,
                "counting",
            )))
        }
    }

    #[tokio::test]
    async fn test_sts_signs_with_resolved_credentials() {
        let provider = CountingProvider::default();
        let config = SdkConfig::builder()
            .credentials_provider(SharedCredentialsProvider::new(provider.clone()))
            .region(Region::new("eu-west-1"))
            .build();

        let credentials = crate::aws::resolve_credentials(&config).await.unwrap();
        let sts = sts_config(&config, &credentials);
        let signing = sts
            .credentials_provider()
            .unwrap()
            .provide_credentials()
            .await
            .unwrap();

        assert_eq!(credentials.access_key_id(), "ASIA1");
        assert_eq!(signing.access_key_id(), "ASIA1");
        assert_eq!(signing.session_token(), Some("token1"));
        assert_eq!(provider.resolutions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sts_config_keeps_configured_region() {
        let config = SdkConfig::builder()
            .region(Region::new("ap-northeast-1"))
            .build();
        let credentials = Credentials::new("AKIAEXAMPLE", "secret", None, None, "test");

        let sts = sts_config(&config, &credentials);

        assert_eq!(sts.region().map(Region::to_string).as_deref(), Some("ap-northeast-1"));
    }

    #[test]
    fn test_sts_config_falls_back_to_default_region() {
        let config = SdkConfig::builder().build();
        let credentials = Credentials::new("AKIAEXAMPLE", "secret", None, None, "test");

        let sts = sts_config(&config, &credentials);

        assert_eq!(sts.region().map(Region::to_string).as_deref(), Some(DEFAULT_AWS_REGION));
    }

    fn service_error(
        metadata: ErrorMetadata,
    ) -> SdkError<GetCallerIdentityError, Response<SdkBody>> {
        SdkError::service_error(
            GetCallerIdentityError::generic(metadata),
            Response::new(403.try_into().unwrap(), SdkBody::empty()),
        )
    }

    #[test]
    fn test_invalid_credentials_with_service_code() {
        let err = service_error(
            ErrorMetadata::builder()
                .code("InvalidClientTokenId")
                .message("The security token included in the request is invalid.")
                .build(),
        );

        assert_eq!(
            invalid_credentials(err).to_string(),
            "Invalid credentials: InvalidClientTokenId: The security token included in the request is invalid."
        );
    }

    #[test]
    fn test_invalid_credentials_with_code_only() {
        let err = service_error(ErrorMetadata::builder().code("ExpiredToken").build());

        assert_eq!(
            invalid_credentials(err).to_string(),
            "Invalid credentials: ExpiredToken: "
        );
    }

    #[test]
    fn test_invalid_credentials_without_service_code() {
        let err = service_error(ErrorMetadata::builder().build());

        let message = invalid_credentials(err).to_string();
        assert!(message.starts_with("Invalid credentials: "));
        assert!(!message.contains("Invalid credentials: : "));
    }

    #[test]
    fn test_invalid_credentials_for_transport_errors() {
        let err: SdkError<GetCallerIdentityError, Response<SdkBody>> =
            SdkError::timeout_error("connection timed out");

        let message = invalid_credentials(err).to_string();
        assert!(message.starts_with("Invalid credentials: "));
        assert!(message.contains("connection timed out"));
    }
}
