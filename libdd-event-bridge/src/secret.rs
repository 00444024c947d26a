// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Sources for the Datadog API key.

use crate::BridgeError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::{env, fs};

/// Name under which the uploader requests its API key.
pub const API_KEY_SECRET: &str = "api_key";

/// Retrieves a named secret. Implementations must not return an empty value.
pub trait SecretProvider {
    fn secret(&self, name: &str) -> Result<String, BridgeError>;
}

fn non_empty(name: &str, value: &str) -> Result<String, BridgeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BridgeError::Secret {
            name: name.to_owned(),
            reason: "secret is empty".to_owned(),
        });
    }
    Ok(value.to_owned())
}

/// Reads secrets from `DD_<NAME>` environment variables, so `api_key` comes
/// from `DD_API_KEY`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecretProvider;

impl SecretProvider for EnvSecretProvider {
    fn secret(&self, name: &str) -> Result<String, BridgeError> {
        let var = format!("DD_{}", name.to_ascii_uppercase());
        let value = env::var(&var).map_err(|e| BridgeError::Secret {
            name: name.to_owned(),
            reason: format!("{var}: {e}"),
        })?;
        non_empty(name, &value)
    }
}

/// Reads each secret from a file named after it inside `dir`. This is the
/// layout of mounted secret volumes.
#[derive(Debug, Clone)]
pub struct FileSecretProvider {
    dir: PathBuf,
}

impl FileSecretProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SecretProvider for FileSecretProvider {
    fn secret(&self, name: &str) -> Result<String, BridgeError> {
        let path = self.dir.join(name);
        let value = fs::read_to_string(&path).map_err(|e| BridgeError::Secret {
            name: name.to_owned(),
            reason: format!("{}: {e}", path.display()),
        })?;
        non_empty(name, &value)
    }
}

/// Fixed in-memory secrets.
#[derive(Debug, Default, Clone)]
pub struct StaticSecretProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

impl SecretProvider for StaticSecretProvider {
    fn secret(&self, name: &str) -> Result<String, BridgeError> {
        let value = self
            .secrets
            .get(name)
            .ok_or_else(|| BridgeError::Secret {
                name: name.to_owned(),
                reason: "not found".to_owned(),
            })?;
        non_empty(name, value)
    }
}
