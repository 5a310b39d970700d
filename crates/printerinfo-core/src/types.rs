// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for printer queries.

use serde::{Deserialize, Serialize};

/// An installed printer as reported by the operating system.
///
/// Records are built fresh on every query and never mutated afterwards.
/// `device_id` and `name` are always non-empty; `paper_sizes` keeps the order
/// the OS reported and may be empty. Only the parser builds these, so the
/// type is serialize-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Printer {
    pub device_id: String,
    pub name: String,
    pub paper_sizes: Vec<String>,
}

impl Printer {
    /// Paper sizes from `paper_sizes` that map to a standard [`PaperSize`].
    ///
    /// Driver-specific names (e.g. "Envelope #10", "User defined") are skipped.
    pub fn known_paper_sizes(&self) -> Vec<PaperSize> {
        self.paper_sizes
            .iter()
            .filter_map(|name| PaperSize::from_name(name))
            .collect()
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl PaperSize {
    /// Match a Windows paper name such as "A4" or "letter".
    ///
    /// Case and surrounding whitespace are ignored; "Ledger" is treated as
    /// Tabloid since drivers use both names for 11x17in.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a3" => Some(Self::A3),
            "a4" => Some(Self::A4),
            "a5" => Some(Self::A5),
            "letter" => Some(Self::Letter),
            "legal" => Some(Self::Legal),
            "tabloid" | "ledger" => Some(Self::Tabloid),
            _ => None,
        }
    }

    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A3 => (297, 420),
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Tabloid => (279, 432),
        }
    }
}

/// Outcome of validating one block of printer text.
///
/// `valid` is true exactly when `printer` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterValidation {
    pub valid: bool,
    pub printer: Option<Printer>,
    /// Required labels that were absent or empty.
    pub missing: Vec<&'static str>,
}

impl PrinterValidation {
    pub fn accepted(printer: Printer) -> Self {
        Self {
            valid: true,
            printer: Some(printer),
            missing: Vec::new(),
        }
    }

    pub fn rejected(missing: Vec<&'static str>) -> Self {
        Self {
            valid: false,
            printer: None,
            missing,
        }
    }

    pub fn into_printer(self) -> Option<Printer> {
        self.printer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printer(paper: &[&str]) -> Printer {
        Printer {
            device_id: "HP01".into(),
            name: "HP LaserJet".into(),
            paper_sizes: paper.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(printer(&["A4", "Letter"])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "deviceId": "HP01",
                "name": "HP LaserJet",
                "paperSizes": ["A4", "Letter"],
            })
        );
    }

    #[test]
    fn paper_size_names_are_case_insensitive() {
        assert_eq!(PaperSize::from_name(" letter "), Some(PaperSize::Letter));
        assert_eq!(PaperSize::from_name("A4"), Some(PaperSize::A4));
        assert_eq!(PaperSize::from_name("Ledger"), Some(PaperSize::Tabloid));
        assert_eq!(PaperSize::from_name("Envelope #10"), None);
    }

    #[test]
    fn known_paper_sizes_skip_driver_specific_names() {
        let p = printer(&["Letter", "Envelope #10", "A4"]);
        assert_eq!(p.known_paper_sizes(), vec![PaperSize::Letter, PaperSize::A4]);
        assert_eq!(PaperSize::A4.dimensions_mm(), (210, 297));
    }

    #[test]
    fn validation_validity_tracks_printer() {
        let ok = PrinterValidation::accepted(printer(&[]));
        assert!(ok.valid);
        assert!(ok.missing.is_empty());

        let bad = PrinterValidation::rejected(vec!["Name"]);
        assert!(!bad.valid);
        assert_eq!(bad.into_printer(), None);
    }
}
