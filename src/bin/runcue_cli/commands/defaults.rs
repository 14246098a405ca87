// ABOUTME: Defaults command for runcue-cli
// ABOUTME: Prints every documented preference default as a template JSON file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use anyhow::Result;
use runcue::config::documented_defaults;

use crate::helpers::display::print_json;

/// Print the documented defaults as a JSON object
pub fn run(pretty: bool) -> Result<()> {
    print_json(&documented_defaults(), pretty)
}
