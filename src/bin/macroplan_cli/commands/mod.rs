// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for macroplan-cli
// ABOUTME: Provides targets, athlete, catalog and plan file commands

pub mod athlete;
pub mod catalog;
pub mod plan;
pub mod targets;
