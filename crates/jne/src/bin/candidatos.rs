use clap::Parser;
use jne::cli::CandidatosCli;
use tracing::trace;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CandidatosCli::parse();
    let tui = jne::preprocess(cli.common.trace)?;
    trace!("command line input recorded: {cli:?}");

    jne::spider::candidates(cli, tui).await
}
