// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform guard. Every query checks this before spawning anything.

use tracing::debug;

use printerinfo_core::error::{PrinterInfoError, Result};

/// The only OS whose management shell we know how to query.
pub const SUPPORTED_OS: &str = "windows";

/// Fail with `UnsupportedPlatform` unless `os` is Windows.
///
/// `os` uses the `std::env::consts::OS` spelling.
pub fn ensure_supported_platform(os: &str) -> Result<()> {
    if os == SUPPORTED_OS {
        return Ok(());
    }
    debug!(os, "rejecting printer query on unsupported platform");
    Err(PrinterInfoError::UnsupportedPlatform(os.to_string()))
}

/// [`ensure_supported_platform`] applied to the running host.
pub fn ensure_host_supported() -> Result<()> {
    ensure_supported_platform(std::env::consts::OS)
}
