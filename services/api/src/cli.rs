use crate::report::{run_course_show, run_scorecard, CourseShowArgs, ScorecardArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use golf_scorecard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "golf-scorecard",
    about = "Load golf course files and score rounds against them",
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
    /// Inspect a course file
    Course {
        #[command(subcommand)]
        command: CourseCommand,
    },
    /// Print a golfer's scorecard, totals and shot categories for a course file
    Scorecard(ScorecardArgs),
}

#[derive(Subcommand, Debug)]
enum CourseCommand {
    /// Print the course banner and its holes
    Show(CourseShowArgs),
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
        Command::Course {
            command: CourseCommand::Show(args),
        } => run_course_show(args),
        Command::Scorecard(args) => run_scorecard(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scorecard_scores_split_on_commas() {
        let cli = Cli::try_parse_from([
            "golf-scorecard",
            "scorecard",
            "--course",
            "course.txt",
            "--golfer",
            "Jordan",
            "--scores",
            "4,5,3",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Scorecard(args)) => {
                assert_eq!(args.golfer, "Jordan");
                assert_eq!(args.scores, Some(vec![4, 5, 3]));
                assert!(!args.json);
            }
            other => panic!("expected scorecard command, got {other:?}"),
        }
    }

    #[test]
    fn zero_score_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from([
            "golf-scorecard",
            "scorecard",
            "--course",
            "course.txt",
            "--golfer",
            "Jordan",
            "--scores",
            "4,0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["golf-scorecard"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
