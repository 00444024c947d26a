// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use anyhow::Context;
use clap::{command, Arg};
use libdd_event_bridge::{
    BatchUploader, BridgeConfig, BridgeError, DeliveryResult, EnvSecretProvider,
    FileSecretProvider, SecretProvider,
};
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// One input line.
#[derive(Deserialize)]
struct Row {
    record_type: String,
    payload: Value,
}

fn init_logging() -> anyhow::Result<()> {
    let log_level = env::var("DD_LOG_LEVEL")
        .map(|val| val.to_lowercase())
        .unwrap_or_else(|_| "info".to_owned());
    let env_filter = format!("h2=off,hyper=off,reqwest=off,rustls=off,{log_level}");

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(env_filter).context("could not parse DD_LOG_LEVEL")?,
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;
    Ok(())
}

fn print_results(results: &[DeliveryResult]) {
    for result in results {
        info!(kind = %result.kind, records = result.records, status = result.status, "Delivered");
        println!("{}", result.body);
    }
}

/// Print what was delivered, including the batches that went through before
/// a failure.
fn report(outcome: Result<Vec<DeliveryResult>, BridgeError>) -> Result<(), BridgeError> {
    match outcome {
        Ok(results) => {
            print_results(&results);
            Ok(())
        }
        Err(err) => {
            print_results(err.delivered());
            Err(err)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .about("Forwards newline-delimited event-table rows to Datadog")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("file of {\"record_type\", \"payload\"} rows, one per line (default: stdin)")
                .required(false),
        )
        .arg(
            Arg::new("secrets-dir")
                .long("secrets-dir")
                .help("directory holding an `api_key` file (default: DD_API_KEY)")
                .required(false),
        )
        .get_matches();

    init_logging()?;

    let config = BridgeConfig::from_env()?;
    debug!(?config, "Loaded configuration");
    let secrets: Box<dyn SecretProvider> = match matches.get_one::<String>("secrets-dir") {
        Some(dir) => Box::new(FileSecretProvider::new(dir)),
        None => Box::new(EnvSecretProvider),
    };
    let mut uploader = BatchUploader::new(config, secrets.as_ref())?;

    let reader: Box<dyn BufRead> = match matches.get_one::<String>("input") {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_number}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let row: Row = serde_json::from_str(&line)
            .with_context(|| format!("malformed row on line {line_number}"))?;
        report(uploader.process(&row.record_type, row.payload))
            .with_context(|| format!("failed to process line {line_number}"))?;
    }

    report(uploader.end_of_stream()).context("failed to flush at end of stream")?;
    Ok(())
}
