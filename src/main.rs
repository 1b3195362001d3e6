use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rlcs_cli::cli::{Cli, Command, MatchesCommand, TournamentsCommand};
use rlcs_cli::constants::{API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS};
use rlcs_cli::data_fetcher::api::create_http_client;
use rlcs_cli::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Logs go to stderr so table/JSON output on stdout stays pipeable.
    let default_directive = if cli.debug {
        "rlcs_cli=debug"
    } else {
        "rlcs_cli=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_directive.parse().expect(
                "default log directive must parse",
            )),
        )
        .init();

    let client = create_http_client(DEFAULT_HTTP_TIMEOUT_SECONDS)?;
    let now = Utc::now();
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Tournaments(TournamentsCommand::List(args)) => {
            args.run(&client, API_BASE_URL, now, &mut stdout).await
        }
        Command::Tournaments(TournamentsCommand::Matches(args)) => {
            args.run(&client, API_BASE_URL, now, &mut stdout).await
        }
        Command::Tournaments(TournamentsCommand::Brackets(args)) => {
            args.run(&client, API_BASE_URL, &mut stdout).await
        }
        Command::Matches(MatchesCommand::List(args)) => {
            args.run(&client, API_BASE_URL, &mut stdout).await
        }
        Command::Matches(MatchesCommand::Get(args)) => {
            args.run(&client, API_BASE_URL, &mut stdout).await
        }
    }
}
