// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Management-shell invocation.
//
// Both queries run one fixed `Get-CimInstance Win32_Printer` script through
// PowerShell and hand back its raw stdout. Nothing here interprets the text;
// that is the job of `parse`.

use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use printerinfo_core::config::QueryConfig;
use printerinfo_core::error::ProcessError;

/// CIM query shared by both scopes. Only the three properties we parse are
/// requested.
const PRINTER_QUERY: &str = "Get-CimInstance Win32_Printer -Property DeviceID,Name,PrinterPaperNames";

/// Stops PowerShell from shortening long arrays to `{A, B, C, D...}`.
const NO_ENUMERATION_LIMIT: &str = "$FormatEnumerationLimit = -1";

/// Which printers a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterScope {
    /// Every installed printer.
    All,
    /// Only the printer flagged as the default.
    Default,
}

impl PrinterScope {
    /// PowerShell script text for this scope.
    pub fn script(self) -> String {
        match self {
            Self::All => format!("{NO_ENUMERATION_LIMIT}; {PRINTER_QUERY}"),
            Self::Default => format!("{NO_ENUMERATION_LIMIT}; {PRINTER_QUERY} -Filter Default=true"),
        }
    }
}

/// Runs a script in the management shell and returns its standard output.
///
/// `PowerShell` is the real implementation; tests substitute an in-memory one.
pub trait ShellRunner {
    fn run(&self, script: &str) -> impl Future<Output = Result<String, ProcessError>> + Send;
}

/// Spawns `Powershell.exe` (or a configured replacement) once per call.
#[derive(Debug, Clone)]
pub struct PowerShell {
    program: String,
    no_profile: bool,
}

impl PowerShell {
    pub fn from_config(config: &QueryConfig) -> Self {
        Self {
            program: config.shell_program.clone(),
            no_profile: config.no_profile,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Command-line arguments passed before the script runs.
    fn args<'a>(&self, script: &'a str) -> Vec<&'a str> {
        let mut args = Vec::with_capacity(4);
        if self.no_profile {
            args.push("-NoProfile");
        }
        args.extend(["-NonInteractive", "-Command", script]);
        args
    }
}

impl Default for PowerShell {
    fn default() -> Self {
        Self::from_config(&QueryConfig::default())
    }
}

impl ShellRunner for PowerShell {
    async fn run(&self, script: &str) -> Result<String, ProcessError> {
        debug!(program = %self.program, script, "running management shell");

        let output = Command::new(&self.program)
            .args(self.args(script))
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ProcessError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                program = %self.program,
                code = ?output.status.code(),
                "management shell exited with failure"
            );
            return Err(ProcessError::Exit {
                program: self.program.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
