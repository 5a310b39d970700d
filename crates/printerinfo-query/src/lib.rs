// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printerinfo query: asks the Windows management shell for installed printers
// and turns its `Label : value` output into `Printer` records.

pub mod parse;
pub mod platform;
pub mod query;
pub mod shell;

pub use parse::{parse_default_printer, parse_printers, split_blocks, validate_printer};
pub use platform::{ensure_host_supported, ensure_supported_platform};
pub use query::{PrinterQuery, get_default_printer, get_printers};
pub use shell::{PowerShell, PrinterScope, ShellRunner};
