#![deny(warnings)]

mod api;
mod config;
mod error;
mod genesys;
mod logging;
mod network;
mod object_store;
mod rotation;
mod runtime;
mod secrets_store;
mod voicemail;

use crate::{
    config::{Config, RawConfig},
    runtime::HandlerKind,
};
use anyhow::anyhow;
use clap::{Arg, Command, crate_authors, crate_description, crate_version, value_parser};
use std::{env, path::PathBuf, str::FromStr};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let matches = Command::new("Voicemail bridge")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG")
                .env("VOICEMAIL_BRIDGE_CONFIG")
                .short('c')
                .long("config")
                .default_value("voicemail-bridge.toml")
                .help("Path to the application configuration file."),
        )
        .arg(
            Arg::new("HANDLER")
                .env("VOICEMAIL_BRIDGE_HANDLER")
                .value_parser(HandlerKind::NAMES)
                .required(true)
                .help("Defines the handler to serve invocations with."),
        )
        .arg(
            Arg::new("EVENT")
                .long("event")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the JSON event to handle once instead of starting the Lambda runtime."),
        )
        .get_matches();

    let raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    let handler = HandlerKind::from_str(
        matches
            .get_one::<String>("HANDLER")
            .ok_or_else(|| anyhow!("<HANDLER> argument is not provided."))?,
    )?;

    let config = Config::from(raw_config);
    info!(
        version = %config.version,
        handler = %handler,
        "Voicemail bridge configuration: {config:?}."
    );

    runtime::run(
        config,
        handler,
        matches.get_one::<PathBuf>("EVENT").map(PathBuf::as_path),
    )
}
