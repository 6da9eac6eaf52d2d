// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrisnap-cli
// ABOUTME: Provides access to target calculation and food knowledge base commands

pub mod foods;
pub mod targets;
