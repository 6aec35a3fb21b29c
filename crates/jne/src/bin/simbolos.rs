use clap::Parser;
use jne::cli::SimbolosCli;
use tracing::trace;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = SimbolosCli::parse();
    let tui = jne::preprocess(cli.common.trace)?;
    trace!("command line input recorded: {cli:?}");

    jne::spider::symbols(cli, tui).await
}
