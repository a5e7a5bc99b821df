use crate::demo::{run_catalog, run_demo, run_score, CatalogArgs, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ods_assessment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ods-assessment",
    about = "Score ODS sustainability self-assessments and serve them over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answer file and print the report
    Score(ScoreArgs),
    /// List the dimensions and questions of the active catalog
    Catalog(CatalogArgs),
    /// Walk a scripted assessment session end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["ods-assessment"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "ods-assessment",
            "score",
            "--answers",
            "answers.csv",
            "--seed",
            "7",
            "--json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers.to_str(), Some("answers.csv"));
                assert_eq!(args.seed, Some(7));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_dimension_filter() {
        let err = Cli::try_parse_from(["ods-assessment", "catalog", "--dimension", "energia"])
            .expect_err("unknown dimension");
        assert!(err.to_string().contains("energia"));
    }
}
