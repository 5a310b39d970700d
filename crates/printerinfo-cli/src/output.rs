// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text and JSON rendering of query results.

use serde::Serialize;

use printerinfo_core::error::Result;
use printerinfo_core::types::{PaperSize, Printer};

/// Pretty-printed JSON. Empty results render as `[]` / `null`.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One paragraph per printer.
pub fn printers_text(printers: &[Printer]) -> String {
    if printers.is_empty() {
        return "No printers found.".into();
    }
    printers
        .iter()
        .map(printer_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn default_text(printer: Option<&Printer>) -> String {
    match printer {
        Some(p) => printer_text(p),
        None => "No default printer is set.".into(),
    }
}

fn printer_text(printer: &Printer) -> String {
    let paper = if printer.paper_sizes.is_empty() {
        "(none reported)".to_string()
    } else {
        printer
            .paper_sizes
            .iter()
            .map(|name| match PaperSize::from_name(name).map(|size| size.dimensions_mm()) {
                Some((w, h)) => format!("{name} ({w}x{h} mm)"),
                None => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{}\n  Device ID:   {}\n  Paper sizes: {}",
        printer.name, printer.device_id, paper
    )
}
