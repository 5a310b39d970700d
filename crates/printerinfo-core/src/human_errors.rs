// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for command-line users.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::{PrinterInfoError, ProcessError};

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether running the same command again could succeed.
    pub retriable: bool,
}

/// Convert a `PrinterInfoError` into a `HumanError`.
pub fn humanize_error(err: &PrinterInfoError) -> HumanError {
    match err {
        PrinterInfoError::UnsupportedPlatform(os) => HumanError {
            message: "Printer information is only available on Windows.".into(),
            suggestion: format!("Run this on a Windows machine. (Detected platform: {os})"),
            retriable: false,
        },

        PrinterInfoError::Process(ProcessError::Spawn { program, source }) => {
            if source.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: format!("We couldn't find {program}."),
                    suggestion: "Make sure PowerShell is installed and on your PATH, or pass --shell with its full path.".into(),
                    retriable: false,
                }
            } else {
                HumanError {
                    message: format!("We couldn't start {program}."),
                    suggestion: format!("Check that you're allowed to run it. ({source})"),
                    retriable: true,
                }
            }
        }

        PrinterInfoError::Process(ProcessError::Exit { stderr, .. }) => {
            if stderr.contains("Access denied") || stderr.contains("0x80070005") {
                HumanError {
                    message: "Windows refused to list the printers.".into(),
                    suggestion: "Try again from an account that can query printer settings.".into(),
                    retriable: false,
                }
            } else {
                HumanError {
                    message: "The printer query failed.".into(),
                    suggestion: if stderr.is_empty() {
                        "Make sure the Print Spooler service is running, then try again.".into()
                    } else {
                        format!("Make sure the Print Spooler service is running, then try again. ({stderr})")
                    },
                    retriable: true,
                }
            }
        }

        PrinterInfoError::Serialization(detail) => HumanError {
            message: "We found the printers but couldn't format the result.".into(),
            suggestion: format!("Try again without --json. ({detail})"),
            retriable: false,
        },
    }
}
