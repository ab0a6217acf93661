/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS credentials and where they come from
//!
//! Clients never read credentials themselves. The configured provider travels in each request's
//! property bag, where a signing stage can load it.

use crate::os_shim_internal::Env;
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// An access key pair, an optional session token and an optional expiry
///
/// Clones share one allocation. `Debug` never prints the secret.
#[derive(Clone)]
pub struct Credentials(Arc<Keys>);

struct Keys {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    expires_after: Option<SystemTime>,
    provider_name: &'static str,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
        expires_after: Option<SystemTime>,
        provider_name: &'static str,
    ) -> Self {
        Credentials(Arc::new(Keys {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
            expires_after,
            provider_name,
        }))
    }

    /// Long-lived keys supplied in code
    pub fn from_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self::new(access_key_id, secret_access_key, session_token, None, "Static")
    }

    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.0.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.0.session_token.as_deref()
    }

    pub fn expiry(&self) -> Option<SystemTime> {
        self.0.expires_after
    }

    /// Which provider produced these credentials, e.g. `Static` or `Environment`
    pub fn provider_name(&self) -> &'static str {
        self.0.provider_name
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expires_after = self
            .expiry()
            .and_then(|expiry| expiry.duration_since(UNIX_EPOCH).ok())
            .map(|since_epoch| since_epoch.as_secs());
        f.debug_struct("Credentials")
            .field("provider_name", &self.provider_name())
            .field("access_key_id", &self.access_key_id())
            .field("secret_access_key", &"** redacted **")
            .field("expires_after", &expires_after)
            .finish()
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// The provider has nothing to offer, e.g. the environment variables are unset
    #[error("no credentials were loaded: {0}")]
    CredentialsNotLoaded(&'static str),
    #[error(transparent)]
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type CredentialsResult = Result<Credentials, CredentialsError>;

/// A source of credentials
///
/// [`Credentials`] are their own provider.
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> CredentialsResult;
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> CredentialsResult {
        Ok(self.clone())
    }
}

/// A type-erased provider, stored in client configuration and copied into the property bag
#[derive(Clone)]
pub struct SharedCredentialsProvider(Arc<dyn ProvideCredentials>);

impl SharedCredentialsProvider {
    pub fn new(provider: impl ProvideCredentials + 'static) -> Self {
        SharedCredentialsProvider(Arc::new(provider))
    }
}

impl fmt::Debug for SharedCredentialsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedCredentialsProvider")
    }
}

impl ProvideCredentials for SharedCredentialsProvider {
    fn provide_credentials(&self) -> CredentialsResult {
        self.0.provide_credentials()
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the optional `AWS_SESSION_TOKEN`
///
/// Empty values count as unset.
#[derive(Debug, Default)]
pub struct EnvironmentCredentials {
    env: Env,
}

impl EnvironmentCredentials {
    pub fn new() -> Self {
        Self::with_env(Env::real())
    }

    pub fn with_env(env: Env) -> Self {
        EnvironmentCredentials { env }
    }

    fn var(&self, name: &str) -> Option<String> {
        self.env.get(name).ok().filter(|value| !value.is_empty())
    }
}

impl ProvideCredentials for EnvironmentCredentials {
    fn provide_credentials(&self) -> CredentialsResult {
        let access_key_id = self
            .var("AWS_ACCESS_KEY_ID")
            .ok_or(CredentialsError::CredentialsNotLoaded("AWS_ACCESS_KEY_ID is not set"))?;
        let secret_access_key = self
            .var("AWS_SECRET_ACCESS_KEY")
            .ok_or(CredentialsError::CredentialsNotLoaded("AWS_SECRET_ACCESS_KEY is not set"))?;
        tracing::debug!(access_key_id = %access_key_id, "loaded credentials from the environment");
        Ok(Credentials::new(
            access_key_id,
            secret_access_key,
            self.var("AWS_SESSION_TOKEN"),
            None,
            "Environment",
        ))
    }
}

#[cfg(test)]
mod test {
    use crate::credentials::{
        Credentials, CredentialsError, EnvironmentCredentials, ProvideCredentials,
        SharedCredentialsProvider,
    };
    use crate::os_shim_internal::Env;

    #[test]
    fn debug_redacts_the_secret() {
        let creds = Credentials::from_keys("AKIDEXAMPLE", "wJalrXUtnFEMI", None);
        let debug = format!("{:?}", creds);
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("wJalrXUtnFEMI"));
    }

    #[test]
    fn shared_provider_delegates() {
        let provider = SharedCredentialsProvider::new(Credentials::from_keys(
            "AKIDEXAMPLE",
            "secret",
            Some("token".to_string()),
        ));
        let creds = provider.provide_credentials().expect("static credentials");
        assert_eq!(creds.access_key_id(), "AKIDEXAMPLE");
        assert_eq!(creds.session_token(), Some("token"));
        assert_eq!(creds.provider_name(), "Static");
    }

    #[test]
    fn environment_keys_and_token() {
        let provider = EnvironmentCredentials::with_env(Env::from_slice(&[
            ("AWS_ACCESS_KEY_ID", "AKIDENV"),
            ("AWS_SECRET_ACCESS_KEY", "envsecret"),
            ("AWS_SESSION_TOKEN", ""),
        ]));
        let creds = provider.provide_credentials().expect("keys are set");
        assert_eq!(creds.access_key_id(), "AKIDENV");
        assert_eq!(creds.secret_access_key(), "envsecret");
        assert_eq!(creds.session_token(), None);
        assert_eq!(creds.provider_name(), "Environment");
    }

    #[test]
    fn environment_without_a_secret_loads_nothing() {
        let provider =
            EnvironmentCredentials::with_env(Env::from_slice(&[("AWS_ACCESS_KEY_ID", "AKIDENV")]));
        assert!(matches!(
            provider.provide_credentials(),
            Err(CredentialsError::CredentialsNotLoaded(_))
        ));
    }
}
