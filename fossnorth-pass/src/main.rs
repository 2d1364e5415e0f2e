use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fossnorth_core::config::Config;
use fossnorth_core::logging;
use fossnorth_pass::{PassError, SessionId, ticket_link};
use owo_colors::OwoColorize;
use url::Url;

#[derive(Parser)]
#[command(name = "fossnorth-pass")]
#[command(about = "Turn your foss-north 2025 ticket into a Catima wallet card link")]
struct Cli {
    /// Value of the `sessionid` cookie on foss-north.se (32 lowercase letters/digits)
    session_id: String,

    /// Config file (defaults to ~/.config/fossnorth/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match run(&cli).await {
        Ok(link) => {
            println!("{}", link);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<Url, PassError> {
    // Validated before anything touches the network
    let session: SessionId = cli.session_id.parse()?;
    let config = Config::load(cli.config.as_deref())?;

    ticket_link(&session, &config.pass).await
}
