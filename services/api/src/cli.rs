use crate::demo::{run_demo, run_diagnose, run_questions, DemoArgs, DiagnoseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nailcare_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Nail Care Advisor",
    about = "Serve and exercise the nail diagnosis and product recommendation engine",
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
    /// Print the questionnaire grouped by dimension
    Questions,
    /// Diagnose a completed answer set read from a JSON file
    Diagnose(DiagnoseArgs),
    /// Walk scripted shoppers through the questionnaire against a demo catalog
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
        Command::Questions => {
            run_questions();
            Ok(())
        }
        Command::Diagnose(args) => run_diagnose(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
