// ABOUTME: Output formatters for meal plans
// ABOUTME: Plain-text export and one-line macro summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Plain-text weekly plan export
pub mod plan_text;

pub use plan_text::{format_macros, render_plan_text, PlanTextExport};
