// crates/flagcolors-core/src/check.rs
use crate::error::{FlagColorsError, Result};
use crate::model::FlagDataset;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Codes listed under one color map key that no country record uses as its
/// flag code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingCodes {
    pub key: String,
    pub codes: Vec<String>,
}

impl FlagDataset {
    /// Every color map key whose list names an unknown flag code, in key order.
    pub fn dangling_codes(&self) -> Vec<DanglingCodes> {
        let known: HashSet<&str> = self
            .countries
            .iter()
            .filter_map(|c| c.flag_code())
            .collect();

        let found: Vec<DanglingCodes> = self
            .color_map
            .iter()
            .filter_map(|(key, codes)| {
                let invalid: Vec<String> = codes
                    .iter()
                    .filter(|c| !known.contains(c.as_str()))
                    .cloned()
                    .collect();
                (!invalid.is_empty()).then(|| DanglingCodes {
                    key: key.clone(),
                    codes: invalid,
                })
            })
            .collect();

        debug!(known = known.len(), offending_keys = found.len(), "checked color map codes");
        found
    }
}

pub fn write_check_report<W: Write>(out: &mut W, dangling: &[DanglingCodes]) -> Result<()> {
    if dangling.is_empty() {
        writeln!(out, "All color map codes match a country flag code.")
            .map_err(FlagColorsError::Io)?;
    }
    for d in dangling {
        writeln!(out, "{}: invalid codes {}", d.key, d.codes.join(", "))
            .map_err(FlagColorsError::Io)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> FlagDataset {
        FlagDataset::new(
            serde_json::from_value(json!({
                "red": ["us", "fr", "zz"],
                "white": ["us"],
                "green": ["qq", "yy"]
            }))
            .unwrap(),
            serde_json::from_value(json!([
                {"flagCode": "us"},
                {"flagCode": "fr"},
                {"name": "no flag code"}
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn reports_unknown_codes_per_key() {
        let found = dataset().dangling_codes();
        assert_eq!(
            found,
            vec![
                DanglingCodes {
                    key: "red".into(),
                    codes: vec!["zz".into()]
                },
                DanglingCodes {
                    key: "green".into(),
                    codes: vec!["qq".into(), "yy".into()]
                },
            ]
        );
    }

    #[test]
    fn report_lines() {
        let mut out = Vec::new();
        write_check_report(&mut out, &dataset().dangling_codes()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "red: invalid codes zz\ngreen: invalid codes qq, yy\n"
        );

        let mut out = Vec::new();
        write_check_report(&mut out, &[]).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("All color map codes"));
    }
}
