// ABOUTME: Tests for logging configuration and subscriber initialization
// ABOUTME: Format parsing, environment loading, verbose override and single init
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use macroplan::errors::ErrorCode;
use macroplan::logging::{init_from_env, LogFormat, LoggingConfig, SERVICE_NAME};
use serial_test::serial;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse_lossy("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse_lossy(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse_lossy("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse_lossy("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::parse_lossy("fancy"), LogFormat::Compact);
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, SERVICE_NAME);
}

#[test]
fn test_verbose_raises_level() {
    assert_eq!(LoggingConfig::default().verbose(true).level, "debug");
    assert_eq!(LoggingConfig::default().verbose(false).level, "warn");
}

#[test]
#[serial]
fn test_from_env() {
    env::set_var("RUST_LOG", "macroplan=info");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");

    assert_eq!(config.level, "macroplan=info");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
}

#[test]
#[serial]
fn test_subscriber_installs_once() {
    env::remove_var("LOG_FORMAT");

    init_from_env().unwrap();
    let error = LoggingConfig::default().init().unwrap_err();
    assert_eq!(error.code, ErrorCode::InternalError);
}
