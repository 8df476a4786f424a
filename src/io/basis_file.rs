//! Reading bases from disk: `.json` arrays of rows, or plain text with one
//! row per line.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::error::LatticeError;
use crate::core::lattice::Basis;

/// Parse plain text: entries split on whitespace and commas, `#` comments,
/// blank lines skipped.
pub fn parse_basis_text(text: &str) -> Result<Basis, LatticeError> {
    let mut rows = Vec::new();
    for (ln, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| {
                    LatticeError::parse(&format!("line {}: '{}' is not a number", ln + 1, tok))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(row);
    }
    Basis::from_rows(rows)
}

pub fn parse_basis_json(text: &str) -> Result<Basis, LatticeError> {
    serde_json::from_str(text).map_err(|e| LatticeError::parse(&e.to_string()))
}

pub fn read_basis(path: &Path) -> Result<Basis> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Read basis {}", path.display()))?;
    let is_json = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let basis = if is_json { parse_basis_json(&text) } else { parse_basis_text(&text) };
    basis.with_context(|| format!("Parse basis {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_formats() {
        let b = parse_basis_text("# example\n1 2 3\n\n4, 5, 6\n7,8 , 9\n").unwrap();
        assert_eq!(b.nrows(), 3);
        assert_eq!(b[2], vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_text_errors() {
        assert_eq!(
            parse_basis_text("1 2\n3 x\n").unwrap_err(),
            LatticeError::Parse("line 2: 'x' is not a number".into())
        );
        assert_eq!(parse_basis_text("# nothing\n").unwrap_err(), LatticeError::EmptyBasis);
        assert!(matches!(parse_basis_text("1 2\n3\n"), Err(LatticeError::RaggedBasis { .. })));
        assert!(matches!(parse_basis_json("[[1, 2], oops]"), Err(LatticeError::Parse(_))));
    }

    #[test]
    fn test_read_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("b.json");
        std::fs::write(&json, "[[2, 0], [1, 3]]").unwrap();
        assert_eq!(read_basis(&json).unwrap()[1], vec![1.0, 3.0]);

        let txt = dir.path().join("b.txt");
        std::fs::write(&txt, "2 0\n1 3\n").unwrap();
        assert_eq!(read_basis(&txt).unwrap(), read_basis(&json).unwrap());
    }
}
