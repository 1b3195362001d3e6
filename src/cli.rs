use clap::{Parser, Subcommand};

use crate::commands::{
    MatchesGetArgs, MatchesListArgs, TournamentsBracketsArgs, TournamentsListArgs,
    TournamentsMatchesArgs,
};

/// Command line client for RLCS tournament, match and bracket data.
#[derive(Debug, Parser)]
#[command(name = "rlcs-cli", author, version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tournament-related commands
    #[command(subcommand)]
    Tournaments(TournamentsCommand),

    /// Match-related commands
    #[command(subcommand)]
    Matches(MatchesCommand),
}

#[derive(Debug, Subcommand)]
pub enum TournamentsCommand {
    /// List all tournaments of a circuit
    List(TournamentsListArgs),

    /// List matches across tournaments
    Matches(TournamentsMatchesArgs),

    /// Get brackets for a specific tournament
    Brackets(TournamentsBracketsArgs),
}

#[derive(Debug, Subcommand)]
pub enum MatchesCommand {
    /// List matches for a specific tournament
    List(MatchesListArgs),

    /// Get detailed information for a specific match
    Get(MatchesGetArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tournaments_list() {
        let cli = Cli::try_parse_from([
            "rlcs-cli",
            "tournaments",
            "list",
            "--circuit",
            "2026",
            "--region",
            "EU",
            "--online",
            "-o",
            "json",
        ])
        .unwrap();
        match cli.command {
            Command::Tournaments(TournamentsCommand::List(args)) => {
                assert_eq!(args.circuit, "2026");
                assert_eq!(args.region.as_deref(), Some("EU"));
                assert!(args.online);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_matches_list_with_status_flags() {
        let cli = Cli::try_parse_from([
            "rlcs-cli",
            "matches",
            "list",
            "t-1",
            "--live-only",
            "--team",
            "vitality",
        ])
        .unwrap();
        match cli.command {
            Command::Matches(MatchesCommand::List(args)) => {
                assert_eq!(args.tournament_id, "t-1");
                assert!(args.live_only);
                assert_eq!(args.team.as_deref(), Some("vitality"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_output_format() {
        assert!(
            Cli::try_parse_from(["rlcs-cli", "matches", "get", "m-1", "-o", "xml"]).is_err()
        );
        // CSV exists for tournaments but not for matches
        assert!(
            Cli::try_parse_from(["rlcs-cli", "matches", "get", "m-1", "-o", "csv"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["rlcs-cli", "tournaments", "list", "-o", "csv"]).is_ok()
        );
    }
}
