use std::io::Write;

use crate::domain::GameListing;
use crate::error::AppError;
use crate::output::format::Format;
use crate::output::table::truncate;

/// Renders the cross-tournament games view in the requested format.
pub fn render_games(
    w: &mut impl Write,
    games: &[GameListing],
    format: Format,
) -> Result<(), AppError> {
    match format {
        Format::Table => render_table(w, games),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, games)?;
            writeln!(w)?;
            Ok(())
        }
        Format::Yaml => {
            serde_yaml::to_writer(w, games)?;
            Ok(())
        }
    }
}

fn render_table(w: &mut impl Write, games: &[GameListing]) -> Result<(), AppError> {
    if games.is_empty() {
        writeln!(w, "No games found")?;
        return Ok(());
    }

    writeln!(
        w,
        "┌───────────────────────┬───────────────────────────────┬─────────────────────────────────────┬─────────┬─────────────┐"
    )?;
    writeln!(
        w,
        "│ Tournament            │ Match                         │ Teams                               │ Score   │ Status      │"
    )?;
    writeln!(
        w,
        "├───────────────────────┼───────────────────────────────┼─────────────────────────────────────┼─────────┼─────────────┤"
    )?;

    for game in games {
        let tournament = truncate(&game.tournament_name, 21);
        let name = truncate(&game.series.name, 29);
        let teams = format!(
            "{} vs {}",
            truncate(&game.series.team_a.name, 15),
            truncate(&game.series.team_b.name, 15)
        );
        let score = format!("{} - {}", game.series.team_a_score, game.series.team_b_score);
        let status = game.series.status_label();

        writeln!(
            w,
            "│ {tournament:<21} │ {name:<29} │ {teams:<35} │ {score:<7} │ {status:<11} │"
        )?;
    }

    writeln!(
        w,
        "└───────────────────────┴───────────────────────────────┴─────────────────────────────────────┴─────────┴─────────────┘"
    )?;

    Ok(())
}
