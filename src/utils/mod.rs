// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains numeric helpers shared by the calculator, aggregation and exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Half-up rounding helpers
pub mod rounding;
