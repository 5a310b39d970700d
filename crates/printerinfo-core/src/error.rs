// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for printerinfo.

use thiserror::Error;

/// Top-level error type for all printer queries.
#[derive(Debug, Error)]
pub enum PrinterInfoError {
    /// Raised before any subprocess is spawned.
    #[error("unsupported platform: {0} (printer queries require windows)")]
    UnsupportedPlatform(String),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures of the management-shell subprocess.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}: {stderr}", exit_code_label(*.code))]
    Exit {
        program: String,
        /// `None` when the process was terminated by a signal.
        code: Option<i32>,
        /// Trimmed standard error of the failed run.
        stderr: String,
    },
}

fn exit_code_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code".into(),
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrinterInfoError>;
