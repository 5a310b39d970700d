// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parsing of `Get-CimInstance Win32_Printer` list output.
//
// PowerShell prints one block per printer, blocks separated by blank lines,
// each line shaped `Label : value`. Long values wrap onto indented
// continuation lines. Blocks lacking a DeviceID or Name are dropped rather
// than reported; the drop is only visible at debug level.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use printerinfo_core::types::{Printer, PrinterValidation};

pub const DEVICE_ID_LABEL: &str = "DeviceID";
pub const NAME_LABEL: &str = "Name";
pub const PAPER_NAMES_LABEL: &str = "PrinterPaperNames";

/// One or more blank (or whitespace-only) lines.
static BLOCK_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("block separator regex is valid")
});

/// `Label : value`, label being a bare identifier at column 0. Indented
/// lines are always continuations.
static LABELED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_]*)\s*:(.*)$").expect("labeled line regex is valid")
});

/// Split multi-printer output into trimmed, non-empty blocks.
pub fn split_blocks(text: &str) -> Vec<&str> {
    BLOCK_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    DeviceId,
    Name,
    PaperNames,
}

impl Field {
    fn from_label(label: &str) -> Option<Self> {
        [
            (DEVICE_ID_LABEL, Self::DeviceId),
            (NAME_LABEL, Self::Name),
            (PAPER_NAMES_LABEL, Self::PaperNames),
        ]
        .into_iter()
        .find(|(name, _)| label.eq_ignore_ascii_case(name))
        .map(|(_, field)| field)
    }
}

/// Raw values collected from one block, before validation.
#[derive(Debug, Default)]
struct RawFields {
    device_id: Option<String>,
    name: Option<String>,
    paper_names: Option<String>,
}

impl RawFields {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::DeviceId => &mut self.device_id,
            Field::Name => &mut self.name,
            Field::PaperNames => &mut self.paper_names,
        }
    }

    fn collect(block: &str) -> Self {
        let mut fields = Self::default();
        // Field that indented continuation lines extend. `None` after an
        // unknown or repeated label so its wrap is not misattributed.
        let mut current: Option<Field> = None;

        for line in block.lines() {
            let line = line.trim_end_matches('\r');

            if let Some(caps) = LABELED_LINE.captures(line) {
                current = Field::from_label(&caps[1]).filter(|&field| {
                    let slot = fields.slot(field);
                    if slot.is_some() {
                        return false;
                    }
                    *slot = Some(caps[2].to_string());
                    true
                });
                continue;
            }

            let indented = line.starts_with([' ', '\t']);
            match current {
                Some(field) if indented => {
                    if let Some(value) = fields.slot(field) {
                        value.push_str(line.trim_start());
                    }
                }
                _ => current = None,
            }
        }

        fields
    }
}

/// Non-empty trimmed value, or `None`.
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a `{A4, Letter, Legal}` list into its entries, keeping order.
///
/// A trailing `...` (PowerShell's truncation marker) is not a paper size.
pub fn parse_paper_names(value: &str) -> Vec<String> {
    let value = value.trim();
    let value = value.strip_prefix('{').unwrap_or(value);
    let value = value.strip_suffix('}').unwrap_or(value);

    let mut names: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    if matches!(names.last().map(String::as_str), Some("..." | "\u{2026}")) {
        names.pop();
    }
    names
}

/// Validate one printer block.
///
/// The block is valid when both DeviceID and Name carry a non-empty value.
/// Unknown labels are ignored and the first occurrence of a label wins.
pub fn validate_printer(block: &str) -> PrinterValidation {
    let raw = RawFields::collect(block);
    let device_id = required(raw.device_id);
    let name = required(raw.name);

    match (device_id, name) {
        (Some(device_id), Some(name)) => PrinterValidation::accepted(Printer {
            device_id,
            name,
            paper_sizes: raw
                .paper_names
                .as_deref()
                .map(parse_paper_names)
                .unwrap_or_default(),
        }),
        (device_id, name) => {
            let mut missing = Vec::new();
            if device_id.is_none() {
                missing.push(DEVICE_ID_LABEL);
            }
            if name.is_none() {
                missing.push(NAME_LABEL);
            }
            PrinterValidation::rejected(missing)
        }
    }
}

/// Every valid printer in `text`, in output order.
pub fn parse_printers(text: &str) -> Vec<Printer> {
    split_blocks(text)
        .into_iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let validation = validate_printer(block);
            if !validation.valid {
                debug!(block = index, missing = ?validation.missing, "dropping printer block");
            }
            validation.into_printer()
        })
        .collect()
}

/// The printer described by default-printer output, if any.
///
/// Empty output means no default printer is configured. Only the first block
/// is considered.
pub fn parse_default_printer(text: &str) -> Option<Printer> {
    let block = split_blocks(text).into_iter().next()?;
    let validation = validate_printer(block);
    if !validation.valid {
        debug!(missing = ?validation.missing, "default printer block is incomplete");
    }
    validation.into_printer()
}
