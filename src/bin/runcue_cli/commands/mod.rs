// ABOUTME: Re-exports command modules for runcue-cli
// ABOUTME: Provides access to the compile and defaults commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

pub mod compile;
pub mod defaults;
