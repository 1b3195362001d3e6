use std::io::Write;

use crate::constants::DATE_FORMAT;
use crate::domain::Tournament;
use crate::error::AppError;
use crate::output::format::TournamentFormat;
use crate::output::table::{format_date_range, truncate};

/// Renders tournaments in the requested format.
pub fn render_tournaments(
    w: &mut impl Write,
    tournaments: &[Tournament],
    format: TournamentFormat,
) -> Result<(), AppError> {
    match format {
        TournamentFormat::Table => render_table(w, tournaments),
        TournamentFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, tournaments)?;
            writeln!(w)?;
            Ok(())
        }
        TournamentFormat::Csv => render_csv(w, tournaments),
        TournamentFormat::Yaml => {
            serde_yaml::to_writer(w, tournaments)?;
            Ok(())
        }
    }
}

fn render_table(w: &mut impl Write, tournaments: &[Tournament]) -> Result<(), AppError> {
    writeln!(
        w,
        "┌────────────────────────────┬───────────────────────────────┬──────────────────┬─────────────┬────────┬───────┬────────────────────┐"
    )?;
    writeln!(
        w,
        "│ ID                         │ Name                          │ Dates            │ Prize Pool  │ Region │ Teams │ Type               │"
    )?;
    writeln!(
        w,
        "├────────────────────────────┼───────────────────────────────┼──────────────────┼─────────────┼────────┼───────┼────────────────────┤"
    )?;

    for t in tournaments {
        let id = truncate(&t.id, 26);
        let name = truncate(&t.name, 29);
        let dates = format_date_range(t.start_date, t.end_date);
        let prize_pool = truncate(&t.prize_pool, 13);
        let region = match t.region.as_str() {
            "" => "-",
            r => r,
        };

        writeln!(
            w,
            "│ {id:<26} │ {name:<29} │ {dates:<16} │ {prize_pool:<11} │ {region:<6} │ {:<5} │ {:<18} │",
            t.team_count,
            t.tournament_type.as_str(),
        )?;
    }

    writeln!(
        w,
        "└────────────────────────────┴───────────────────────────────┴──────────────────┴─────────────┴────────┴───────┴────────────────────┘"
    )?;
    Ok(())
}

fn render_csv(w: &mut impl Write, tournaments: &[Tournament]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(w);

    writer.write_record([
        "ID",
        "Name",
        "StartDate",
        "EndDate",
        "CircuitID",
        "PrizePool",
        "Location",
        "TeamCount",
        "Region",
        "Type",
        "Description",
        "IsOnline",
        "IsMajor",
    ])?;

    for t in tournaments {
        writer.write_record([
            t.id.as_str(),
            t.name.as_str(),
            &t.start_date.format(DATE_FORMAT).to_string(),
            &t.end_date.format(DATE_FORMAT).to_string(),
            t.circuit_id.as_str(),
            t.prize_pool.as_str(),
            t.location.as_str(),
            &t.team_count.to_string(),
            t.region.as_str(),
            t.tournament_type.as_str(),
            t.description.as_str(),
            &t.is_online.to_string(),
            &t.is_major.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
