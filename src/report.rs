//! Pyramid report rendering.

use std::{collections::BTreeSet, io::Write};

use anyhow::Result;

/// Writes the ordered pyramid as an indented grade-by-grade listing:
/// the grade on its own line, each route indented beneath it.
pub fn print_pyramid<W: Write>(
    out: &mut W,
    pyramid: &[(String, BTreeSet<String>)],
) -> Result<()> {
    for (grade, routes) in pyramid {
        writeln!(out, "{grade}:")?;
        for route in routes {
            writeln!(out, "    {route}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_grades_in_given_order_with_indented_routes() {
        let pyramid = vec![
            (
                "5.9".to_string(),
                ["Zee Tree".to_string()].into_iter().collect(),
            ),
            (
                "5.10a".to_string(),
                ["Clip Up".to_string(), "The Nose".to_string()]
                    .into_iter()
                    .collect(),
            ),
        ];
        let mut out = Vec::new();
        print_pyramid(&mut out, &pyramid).expect("render pyramid");
        let text = String::from_utf8(out).expect("utf8 report");
        assert_eq!(
            text,
            "5.9:\n    Zee Tree\n5.10a:\n    Clip Up\n    The Nose\n"
        );
    }

    #[test]
    fn empty_pyramid_renders_nothing() {
        let mut out = Vec::new();
        print_pyramid(&mut out, &[]).expect("render empty pyramid");
        assert!(out.is_empty());
    }
}
