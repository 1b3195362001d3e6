use clap::ValueEnum;

/// Output formats available for the tournaments view. Tournaments are the
/// only flat entity, so they alone support CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TournamentFormat {
    #[default]
    Table,
    Json,
    Csv,
    Yaml,
}

/// Output formats for the match, bracket and games views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
    Yaml,
}
