use std::io::Write;

use crate::domain::Match;
use crate::error::AppError;
use crate::output::format::Format;
use crate::output::table::truncate;

/// Renders matches in the requested format.
pub fn render_matches(w: &mut impl Write, matches: &[Match], format: Format) -> Result<(), AppError> {
    match format {
        Format::Table => render_table(w, matches),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, matches)?;
            writeln!(w)?;
            Ok(())
        }
        Format::Yaml => {
            serde_yaml::to_writer(w, matches)?;
            Ok(())
        }
    }
}

fn render_table(w: &mut impl Write, matches: &[Match]) -> Result<(), AppError> {
    if matches.is_empty() {
        writeln!(w, "No matches found")?;
        return Ok(());
    }

    write_match_table_header(w)?;
    for m in matches {
        write_match_row(w, m)?;
    }
    write_match_table_footer(w)?;

    Ok(())
}

pub(crate) fn write_match_table_header(w: &mut impl Write) -> Result<(), AppError> {
    writeln!(
        w,
        "┌───────────────────────────────┬─────────────────────────────────────┬─────────┬─────────────┐"
    )?;
    writeln!(
        w,
        "│ Match                         │ Teams                               │ Score   │ Status      │"
    )?;
    writeln!(
        w,
        "├───────────────────────────────┼─────────────────────────────────────┼─────────┼─────────────┤"
    )?;
    Ok(())
}

pub(crate) fn write_match_row(w: &mut impl Write, m: &Match) -> Result<(), AppError> {
    let name = truncate(&m.name, 29);
    let teams = format!(
        "{} vs {}",
        truncate(&m.team_a.name, 15),
        truncate(&m.team_b.name, 15)
    );
    let score = format!("{} - {}", m.team_a_score, m.team_b_score);
    let status = m.status_label();

    writeln!(w, "│ {name:<29} │ {teams:<35} │ {score:<7} │ {status:<11} │")?;
    Ok(())
}

pub(crate) fn write_match_table_footer(w: &mut impl Write) -> Result<(), AppError> {
    writeln!(
        w,
        "└───────────────────────────────┴─────────────────────────────────────┴─────────┴─────────────┘"
    )?;
    Ok(())
}
