//! AWS Secrets Manager store.
//!
//! Credentials come from the step inputs when both the access key id and
//! the secret key are given, otherwise from the default provider chain
//! (`AWS_ACCESS_KEY_ID`, profiles, instance metadata, ...). Requests are
//! sent once; the SDK retry policy is disabled.

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::{Credentials, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, SdkError};
use aws_sdk_secretsmanager::Client;
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::config::AwsSettings;
use crate::core::types::{SecretDescriptor, SecretPage, SecretValue};
use crate::error::{Error, Result};

/// Provider name attached to credentials taken from step inputs.
const CREDENTIALS_PROVIDER: &str = "smenv-inputs";

/// AWS Secrets Manager client wrapper.
#[derive(Debug, Clone)]
pub struct AwsSecretsManager {
    client: Client,
}

impl AwsSecretsManager {
    /// Build a client from step settings and the default AWS config chain.
    pub async fn connect(settings: &AwsSettings) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(region) = &settings.region {
            debug!(region = %region, "using region from inputs");
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some((access_key_id, secret_access_key)) = settings.static_credentials() {
            debug!("using static credentials from inputs");
            loader = loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                CREDENTIALS_PROVIDER,
            ));
        }

        let config = loader.load().await;
        Self::from_client(Client::new(&config))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for AwsSecretsManager {
    fn name(&self) -> &'static str {
        "aws-secrets-manager"
    }

    async fn get_secret_value(&self, name: &str) -> Result<SecretValue> {
        trace!(secret = %name, "GetSecretValue");

        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                debug!(secret = %name, error = %DisplayErrorContext(&e), "GetSecretValue failed");
                if e
                    .as_service_error()
                    .is_some_and(|s| s.is_resource_not_found_exception())
                {
                    Error::NotFound(name.to_string())
                } else {
                    Error::store("GetSecretValue", describe(&e))
                }
            })?;

        // Exactly one of the two fields is populated.
        if let Some(text) = output.secret_string() {
            return Ok(SecretValue::Text(text.to_string()));
        }
        if let Some(blob) = output.secret_binary() {
            return Ok(SecretValue::Binary(blob.as_ref().to_vec()));
        }

        Err(Error::store(
            "GetSecretValue",
            format!("secret '{}' has neither a string nor a binary value", name),
        ))
    }

    async fn list_secrets_page(&self, next_token: Option<&str>) -> Result<SecretPage> {
        trace!(has_token = next_token.is_some(), "ListSecrets");

        let output = self
            .client
            .list_secrets()
            .set_next_token(next_token.map(str::to_string))
            .send()
            .await
            .map_err(|e| {
                debug!(error = %DisplayErrorContext(&e), "ListSecrets failed");
                Error::store("ListSecrets", describe(&e))
            })?;

        let secrets = output
            .secret_list()
            .iter()
            .filter_map(|entry| {
                entry.name().map(|name| SecretDescriptor {
                    name: name.to_string(),
                    deleted: entry.deleted_date().is_some(),
                })
            })
            .collect();

        Ok(SecretPage {
            secrets,
            next_token: output.next_token().map(str::to_string),
        })
    }
}

/// Short description of an SDK failure for the step log.
///
/// Service errors use their own message; transport failures list their
/// source chain.
fn describe<E, R>(err: &SdkError<E, R>) -> String
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if let Some(service) = err.as_service_error() {
        return service.to_string();
    }

    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
