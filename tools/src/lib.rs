//! Inspection and debugging tools for the passcode codec.
//!
//! This crate provides utilities for understanding encoded passwords:
//!
//! - Break a password into segments and per-symbol spellings
//! - Compare the stored checksum with the derived one
//! - Render any supported display format
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use record::{compute_checksum, Password, CHECKSUM_LEN, SCENE_LEN};
use serde::Serialize;

/// One symbol position of an inspected password.
#[derive(Debug, Serialize)]
pub struct SymbolReport {
    pub position: usize,
    pub segment: &'static str,
    pub character: char,
    pub value: u8,
    pub garbage: bool,
}

/// Structured breakdown of one password.
#[derive(Debug, Serialize)]
pub struct PasswordReport {
    pub text: String,
    pub value: u64,
    pub scene: u64,
    pub flags: u64,
    pub checksum_stored: u64,
    pub checksum_derived: u64,
    pub checksum_consistent: bool,
    pub symbols: Vec<SymbolReport>,
}

/// Which segment owns a string position.
fn segment_name(position: usize) -> &'static str {
    if position < SCENE_LEN {
        "scene"
    } else if position < SCENE_LEN + CHECKSUM_LEN {
        "checksum"
    } else {
        "flags"
    }
}

/// Builds the structured breakdown of a password.
#[must_use]
pub fn inspect_password(password: &Password) -> PasswordReport {
    let derived = compute_checksum(password);
    let symbols = password
        .symbols()
        .iter()
        .enumerate()
        .map(|(position, sym)| SymbolReport {
            position,
            segment: segment_name(position),
            character: sym.as_char(),
            value: sym.value(),
            garbage: sym.is_garbage(),
        })
        .collect();
    PasswordReport {
        text: password.to_string(),
        value: password.value(),
        scene: password.scene_value(),
        flags: password.flag_value(),
        checksum_stored: password.checksum_value(),
        checksum_derived: derived,
        checksum_consistent: password.checksum_value() == derived,
        symbols,
    }
}

/// Renders a report for terminal display.
#[must_use]
pub fn format_report_pretty(report: &PasswordReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("password: {}\n", report.text));
    out.push_str(&format!(
        "value: {} (0x{:09X})\n",
        report.value, report.value
    ));
    out.push_str(&format!(
        "scene: {} flags: 0x{:07X}\n",
        report.scene, report.flags
    ));
    let verdict = if report.checksum_consistent {
        "consistent"
    } else {
        "stale"
    };
    out.push_str(&format!(
        "checksum: stored {} derived {} ({verdict})\n",
        report.checksum_stored, report.checksum_derived
    ));
    out.push_str("symbols:\n");
    for sym in &report.symbols {
        let spelling = if sym.garbage { "garbage" } else { "canonical" };
        out.push_str(&format!(
            "  {} [{}] '{}' = {} ({spelling})\n",
            sym.position, sym.segment, sym.character, sym.value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_splits_segments() {
        let password: Password = "0IZSABCD".parse().unwrap();
        let report = inspect_password(&password);

        assert_eq!(report.text, "0IZSABCD");
        assert_eq!(report.symbols.len(), 8);
        assert_eq!(report.symbols[0].segment, "scene");
        assert_eq!(report.symbols[2].segment, "checksum");
        assert_eq!(report.symbols[3].segment, "flags");
        assert!(report.symbols[0].garbage);
        assert!(!report.symbols[1].garbage);
    }

    #[test]
    fn report_flags_stale_checksum() {
        let password: Password = "0OOOOOOO".parse().unwrap();
        let report = inspect_password(&password);
        assert_eq!(report.checksum_stored, 0);
        assert_eq!(report.checksum_derived, 1);
        assert!(!report.checksum_consistent);
    }

    #[test]
    fn pretty_output_names_the_verdict() {
        let password: Password = "0OOOOOOO".parse().unwrap();
        let pretty = format_report_pretty(&inspect_password(&password));
        assert!(pretty.contains("stale"));
        assert!(pretty.contains("password: 0OOOOOOO"));

        let mut corrected = password;
        corrected.correct();
        let pretty = format_report_pretty(&inspect_password(&corrected));
        assert!(pretty.contains("consistent"));
    }

    #[test]
    fn report_serializes_to_json() {
        let password = Password::zero();
        let json = serde_json::to_string(&inspect_password(&password)).unwrap();
        assert!(json.contains("\"checksum_consistent\":true"));
    }
}
