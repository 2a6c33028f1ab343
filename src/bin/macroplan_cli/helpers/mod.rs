// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for macroplan-cli
// ABOUTME: Provides JSON file access and display formatting utilities

pub mod display;
pub mod files;
