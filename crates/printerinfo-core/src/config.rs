// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shell invocation settings.

use serde::{Deserialize, Serialize};

/// Default management shell executable.
pub const DEFAULT_SHELL: &str = "Powershell.exe";

/// How the management shell is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Shell executable (e.g. "Powershell.exe" or "pwsh").
    pub shell_program: String,
    /// Pass `-NoProfile` so user profile scripts cannot alter the output.
    pub no_profile: bool,
}

impl QueryConfig {
    pub fn with_shell(mut self, program: impl Into<String>) -> Self {
        self.shell_program = program.into();
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            shell_program: DEFAULT_SHELL.into(),
            no_profile: true,
        }
    }
}
