use std::io::Write;

use crate::domain::Bracket;
use crate::error::AppError;
use crate::output::format::Format;
use crate::output::matches::{write_match_row, write_match_table_footer, write_match_table_header};

/// Renders brackets in the requested format. The table view prints one
/// match table per bracket, separated by a rule.
pub fn render_brackets(
    w: &mut impl Write,
    brackets: &[Bracket],
    format: Format,
) -> Result<(), AppError> {
    match format {
        Format::Table => render_table(w, brackets),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, brackets)?;
            writeln!(w)?;
            Ok(())
        }
        Format::Yaml => {
            serde_yaml::to_writer(w, brackets)?;
            Ok(())
        }
    }
}

fn render_table(w: &mut impl Write, brackets: &[Bracket]) -> Result<(), AppError> {
    if brackets.is_empty() {
        writeln!(w, "No brackets found")?;
        return Ok(());
    }

    for (i, bracket) in brackets.iter().enumerate() {
        if i > 0 {
            writeln!(w, "\n{}", "=".repeat(80))?;
        }

        writeln!(w, "\n{} ({})", bracket.tournament_name, bracket.label)?;
        if !bracket.parent_tournament_name.is_empty() {
            writeln!(w, "Part of: {}", bracket.parent_tournament_name)?;
        }
        writeln!(w)?;

        write_match_table_header(w)?;
        for m in &bracket.matches {
            write_match_row(w, m)?;
        }
        write_match_table_footer(w)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::test_match;

    fn bracket(label: &str, parent: &str) -> Bracket {
        Bracket {
            tournament_id: "t-1".to_string(),
            tournament_name: "Playoffs".to_string(),
            parent_tournament_name: parent.to_string(),
            parent_tournament_format: String::new(),
            circuit_name: "2026".to_string(),
            start_date: "2026-01-09T10:00:00Z".parse().unwrap(),
            end_date: "2026-01-12T20:00:00Z".parse().unwrap(),
            index: 0,
            label: label.to_string(),
            format: "double-elim".to_string(),
            number_of_teams: Some(8),
            matches: vec![test_match(false, true)],
        }
    }

    fn render(brackets: &[Bracket], format: Format) -> String {
        let mut buf = Vec::new();
        render_brackets(&mut buf, brackets, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_table_prints_placeholder() {
        let out = render(&[], Format::Table);
        assert_eq!(out, "No brackets found\n");
    }

    #[test]
    fn test_table_header_with_parent() {
        let out = render(&[bracket("Playoffs", "RLCS Major 1")], Format::Table);
        assert!(out.contains("Playoffs (Playoffs)"));
        assert!(out.contains("Part of: RLCS Major 1"));
        assert!(out.contains("Upper Final"));
    }

    #[test]
    fn test_table_omits_parent_line_when_empty() {
        let out = render(&[bracket("Swiss", "")], Format::Table);
        assert!(!out.contains("Part of:"));
    }

    #[test]
    fn test_table_separates_multiple_brackets() {
        let out = render(&[bracket("Swiss", ""), bracket("Playoffs", "")], Format::Table);
        assert!(out.contains(&"=".repeat(80)));
    }

    #[test]
    fn test_json_structure() {
        let out = render(&[bracket("Playoffs", "RLCS Major 1")], Format::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["label"], "Playoffs");
        assert_eq!(parsed[0]["numberOfTeams"], 8);
        assert_eq!(parsed[0]["matches"][0]["isCompleted"], true);
    }
}
