// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::BridgeError;
use libdd_intake_client::{HttpClient, RetryConfig};
use std::env;
use std::time::Duration;

pub const DEFAULT_SITE: &str = "us3.datadoghq.com";
pub const DEFAULT_ENV: &str = "production";
pub const DEFAULT_REPORTED_LANGUAGE: &str = "python";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 4;
const DEFAULT_RETRY_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    pub logs_url: String,
    pub traces_url: String,
    /// `env` of the tracer payload.
    pub env: String,
    /// Sent as `X-Datadog-Reported-Languages` with every trace payload.
    pub reported_language: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl BridgeConfig {
    /// Read the configuration from `DD_*` environment variables.
    pub fn from_env() -> Result<BridgeConfig, BridgeError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<BridgeConfig, BridgeError> {
        let site = lookup("DD_SITE").unwrap_or_else(|| DEFAULT_SITE.to_owned());
        let mut builder = BridgeConfig::builder().site(&site);
        if let Some(url) = lookup("DD_LOGS_INTAKE_URL") {
            builder = builder.logs_url(url);
        }
        if let Some(url) = lookup("DD_TRACE_INTAKE_URL") {
            builder = builder.traces_url(url);
        }
        if let Some(env) = lookup("DD_ENV") {
            builder = builder.env(env);
        }
        if let Some(language) = lookup("DD_REPORTED_LANGUAGE") {
            builder = builder.reported_language(language);
        }
        if let Some(secs) = parse_var(&lookup, "DD_INTAKE_TIMEOUT_SECS")? {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = parse_var(&lookup, "DD_INTAKE_MAX_RETRIES")? {
            builder = builder.max_retries(retries);
        }
        if let Some(ms) = parse_var(&lookup, "DD_INTAKE_RETRY_DELAY_MS")? {
            builder = builder.retry_delay(Duration::from_millis(ms));
        }
        Ok(builder.build())
    }

    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Retry policy for both intakes: the configured budget, applied to the
    /// transient statuses only.
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::transient()
            .max_retries(self.max_retries)
            .initial_delay(self.retry_delay)
    }

    /// Build the HTTP client shared by both intakes.
    pub fn build_client(&self) -> Result<HttpClient, BridgeError> {
        Ok(HttpClient::builder()
            .timeout(self.timeout)
            .retry(self.retry_config())
            .build()?)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, BridgeError> {
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| BridgeError::Config(format!("{name} has an invalid value: {raw:?}")))
        })
        .transpose()
}

#[derive(Debug, Clone)]
pub struct BridgeConfigBuilder {
    site: String,
    logs_url: Option<String>,
    traces_url: Option<String>,
    env: String,
    reported_language: String,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
}

impl Default for BridgeConfigBuilder {
    fn default() -> Self {
        BridgeConfigBuilder {
            site: DEFAULT_SITE.to_owned(),
            logs_url: None,
            traces_url: None,
            env: DEFAULT_ENV.to_owned(),
            reported_language: DEFAULT_REPORTED_LANGUAGE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl BridgeConfigBuilder {
    /// Datadog site the intake URLs are derived from, e.g. `datadoghq.eu`.
    pub fn site(mut self, site: &str) -> Self {
        self.site = site.trim().to_owned();
        self
    }

    pub fn logs_url(mut self, url: impl Into<String>) -> Self {
        self.logs_url = Some(url.into());
        self
    }

    pub fn traces_url(mut self, url: impl Into<String>) -> Self {
        self.traces_url = Some(url.into());
        self
    }

    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    pub fn reported_language(mut self, language: impl Into<String>) -> Self {
        self.reported_language = language.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn build(self) -> BridgeConfig {
        BridgeConfig {
            logs_url: self
                .logs_url
                .unwrap_or_else(|| format!("https://http-intake.logs.{}/api/v2/logs", self.site)),
            traces_url: self
                .traces_url
                .unwrap_or_else(|| format!("https://trace.agent.{}/api/v0.2/traces", self.site)),
            env: self.env,
            reported_language: self.reported_language,
            timeout: self.timeout,
            max_retries: self.max_retries,
            retry_delay: self.retry_delay,
        }
    }
}
