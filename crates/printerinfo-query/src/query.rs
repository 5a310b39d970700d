// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The two public printer queries.
//
// Each call checks the platform, spawns exactly one shell process and parses
// whatever it printed. Nothing is cached between calls.

use tracing::{debug, info};

use printerinfo_core::config::QueryConfig;
use printerinfo_core::error::Result;
use printerinfo_core::types::Printer;

use crate::parse::{parse_default_printer, parse_printers};
use crate::platform::ensure_supported_platform;
use crate::shell::{PowerShell, PrinterScope, ShellRunner};

/// Printer queries bound to a shell runner.
pub struct PrinterQuery<R = PowerShell> {
    runner: R,
    host_os: &'static str,
}

impl PrinterQuery<PowerShell> {
    /// Queries through `Powershell.exe` with default settings.
    pub fn system() -> Self {
        Self::from_config(&QueryConfig::default())
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::with_runner(PowerShell::from_config(config))
    }
}

impl<R: ShellRunner> PrinterQuery<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            host_os: std::env::consts::OS,
        }
    }

    #[cfg(test)]
    fn on_host(mut self, os: &'static str) -> Self {
        self.host_os = os;
        self
    }

    /// All installed printers with a DeviceID and Name, in OS order.
    pub async fn printers(&self) -> Result<Vec<Printer>> {
        ensure_supported_platform(self.host_os)?;

        let stdout = self.runner.run(&PrinterScope::All.script()).await?;
        let printers = parse_printers(&stdout);

        info!(count = printers.len(), "listed installed printers");
        Ok(printers)
    }

    /// The default printer, or `None` when none is set or its record is
    /// incomplete.
    pub async fn default_printer(&self) -> Result<Option<Printer>> {
        ensure_supported_platform(self.host_os)?;

        let stdout = self.runner.run(&PrinterScope::Default.script()).await?;
        let printer = parse_default_printer(&stdout);

        match &printer {
            Some(p) => info!(device_id = %p.device_id, "found default printer"),
            None => debug!("no default printer"),
        }
        Ok(printer)
    }
}

/// List every installed printer.
pub async fn get_printers() -> Result<Vec<Printer>> {
    PrinterQuery::system().printers().await
}

/// Look up the default printer.
pub async fn get_default_printer() -> Result<Option<Printer>> {
    PrinterQuery::system().default_printer().await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use printerinfo_core::error::{PrinterInfoError, ProcessError};

    use super::*;

    /// Replays canned output and records the scripts it was asked to run.
    struct FakeShell {
        stdout: Option<&'static str>,
        scripts: Mutex<Vec<String>>,
    }

    impl FakeShell {
        fn printing(stdout: &'static str) -> Self {
            Self {
                stdout: Some(stdout),
                scripts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                stdout: None,
                scripts: Mutex::new(Vec::new()),
            }
        }

        fn scripts(&self) -> Vec<String> {
            self.scripts.lock().unwrap().clone()
        }
    }

    impl ShellRunner for FakeShell {
        async fn run(&self, script: &str) -> std::result::Result<String, ProcessError> {
            self.scripts.lock().unwrap().push(script.to_string());
            match self.stdout {
                Some(stdout) => Ok(stdout.to_string()),
                None => Err(ProcessError::Exit {
                    program: "Powershell.exe".into(),
                    code: Some(1),
                    stderr: "Get-CimInstance : The RPC server is unavailable.".into(),
                }),
            }
        }
    }

    const OUTPUT: &str = "\r\n\r\nDeviceID          : HP01\r\nName              : HP LaserJet\r\nPrinterPaperNames : {A4, Letter}\r\n\r\nDeviceID          : Canon_Pixma\r\nName              : Canon PIXMA\r\nPrinterPaperNames : {A4, A3}\r\n\r\n";

    fn windows(shell: FakeShell) -> PrinterQuery<FakeShell> {
        PrinterQuery::with_runner(shell).on_host("windows")
    }

    #[tokio::test]
    async fn lists_printers_in_order() {
        let query = windows(FakeShell::printing(OUTPUT));
        let printers = query.printers().await.unwrap();

        assert_eq!(printers.len(), 2);
        assert_eq!(printers[0].device_id, "HP01");
        assert_eq!(printers[1].name, "Canon PIXMA");
        assert_eq!(printers[1].paper_sizes, vec!["A4", "A3"]);

        let scripts = query.runner.scripts();
        assert_eq!(scripts, vec![PrinterScope::All.script()]);
    }

    #[tokio::test]
    async fn list_skips_invalid_blocks() {
        let query = windows(FakeShell::printing("Name : Ghost\n\nDeviceID : X1\nName : Real"));
        let printers = query.printers().await.unwrap();
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].device_id, "X1");
    }

    #[tokio::test]
    async fn empty_output_gives_empty_results() {
        let query = windows(FakeShell::printing(""));
        assert!(query.printers().await.unwrap().is_empty());
        assert_eq!(query.default_printer().await.unwrap(), None);
    }

    #[tokio::test]
    async fn default_printer_uses_filtered_query() {
        let query = windows(FakeShell::printing(
            "DeviceID : HP01\nName : HP LaserJet\nPrinterPaperNames : {A4, Letter}\n",
        ));
        let printer = query.default_printer().await.unwrap().unwrap();

        assert_eq!(printer.device_id, "HP01");
        assert_eq!(printer.paper_sizes, vec!["A4", "Letter"]);
        assert_eq!(query.runner.scripts(), vec![PrinterScope::Default.script()]);
    }

    #[tokio::test]
    async fn invalid_default_printer_is_none() {
        let query = windows(FakeShell::printing("DeviceID : HP01\n"));
        assert_eq!(query.default_printer().await.unwrap(), None);
    }

    #[tokio::test]
    async fn unsupported_platform_fails_before_spawning() {
        let query = PrinterQuery::with_runner(FakeShell::printing(OUTPUT)).on_host("linux");

        assert!(matches!(
            query.printers().await,
            Err(PrinterInfoError::UnsupportedPlatform(os)) if os == "linux"
        ));
        assert!(matches!(
            query.default_printer().await,
            Err(PrinterInfoError::UnsupportedPlatform(_))
        ));
        assert!(query.runner.scripts().is_empty());
    }

    #[tokio::test]
    async fn process_errors_pass_through() {
        let query = windows(FakeShell::failing());

        match query.printers().await {
            Err(PrinterInfoError::Process(ProcessError::Exit { code, stderr, .. })) => {
                assert_eq!(code, Some(1));
                assert!(stderr.contains("RPC server"));
            }
            other => panic!("expected process error, got {other:?}"),
        }
        assert!(matches!(
            query.default_printer().await,
            Err(PrinterInfoError::Process(_))
        ));
    }

    #[tokio::test]
    async fn repeated_calls_are_equal() {
        let query = windows(FakeShell::printing(OUTPUT));
        let first = query.printers().await.unwrap();
        let second = query.printers().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(query.runner.scripts().len(), 2);
    }

    #[cfg(not(target_os = "windows"))]
    #[tokio::test]
    async fn free_functions_reject_non_windows_hosts() {
        assert!(matches!(
            get_printers().await,
            Err(PrinterInfoError::UnsupportedPlatform(_))
        ));
        assert!(matches!(
            get_default_printer().await,
            Err(PrinterInfoError::UnsupportedPlatform(_))
        ));
    }
}
