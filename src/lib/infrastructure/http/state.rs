//! Application state module

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::mailing::service::MailingService;

/// The environment the process runs in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    /// Production deployment
    Production,

    /// Staging deployment
    Staging,

    /// Local development
    Development,

    /// Test runs
    Test,
}

/// The published API version
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Version 1
    V1,

    /// Version 2
    V2,

    /// Version 3
    V3,

    /// Version 4
    V4,

    /// Version 5
    V5,
}

/// Process-wide instance configuration
///
/// Loaded once at startup and injected into the components that need it;
/// read-only thereafter.
#[derive(Clone, Debug, Parser)]
pub struct InstanceConfig {
    /// The environment the process runs in
    #[clap(long, env = "APP_ENV")]
    pub environment: AppEnvironment,

    /// The published API version
    #[clap(long, env = "API_VERSION")]
    pub version: ApiVersion,

    /// Identifier of the repository this deployment was built from
    #[clap(long, env = "APP_REPOSITORY")]
    pub repository: String,

    /// Administrator contact address
    #[clap(long, env = "ADMIN_EMAIL")]
    pub admin_email: String,

    /// Administrator password
    #[clap(long, env = "ADMIN_PASSWORD")]
    pub admin_password: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<M: MailingService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// The instance configuration
    pub config: InstanceConfig,

    /// Email dispatch service
    pub mailing: Arc<M>,
}

impl<M> AppState<M>
where
    M: MailingService,
{
    /// Create a new application state
    pub fn new(config: InstanceConfig, mailing: M) -> Self {
        Self {
            start_time: Utc::now(),
            config,
            mailing: Arc::new(mailing),
        }
    }
}

impl<M> fmt::Debug for AppState<M>
where
    M: MailingService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("config", &self.config)
            .field("mailing", &"MailingService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::mailing::service::MockMailingService;

#[cfg(test)]
pub fn test_state(mailing: Option<MockMailingService>) -> AppState<MockMailingService> {
    let mailing = mailing
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockMailingService::new()));

    let config = InstanceConfig {
        environment: AppEnvironment::Test,
        version: ApiVersion::V1,
        repository: "example/mail-courier".to_string(),
        admin_email: "admin@example.com".to_string(),
        admin_password: "correcthorsebatterystaple".to_string(),
    };

    AppState {
        start_time: Utc::now(),
        config,
        mailing,
    }
}
