use crate::demo::{run_demo, run_quote, DemoArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use paintshop::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Paintshop Back Office",
    about = "Run the painting-shop estimating service and demos from the command line",
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
    /// Work with estimates from the command line
    Estimate {
        #[command(subcommand)]
        command: EstimateCommand,
    },
    /// Run an end-to-end CLI demo covering the estimate lifecycle
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EstimateCommand {
    /// Price the sample job and print the quote breakdown
    Quote(QuoteArgs),
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
        Command::Estimate {
            command: EstimateCommand::Quote(args),
        } => run_quote(args),
        Command::Demo(args) => run_demo(args),
    }
}
