pub mod cli;
pub mod spider;

use cli::TraceLevel;
use tracing::{subscriber, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

/// Open the .env file, and install a tracing subscriber if a trace level was requested.
///
/// Returns whether console (tui) output should be used: only when no trace level is set.
pub fn preprocess(trace: Option<TraceLevel>) -> anyhow::Result<bool> {
    dotenv::dotenv().ok();

    let trace_level = match trace {
        Some(level) => level,
        None => return Ok(true),
    };

    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(match trace_level {
            TraceLevel::DEBUG => Level::DEBUG,
            TraceLevel::ERROR => Level::ERROR,
            TraceLevel::INFO => Level::INFO,
            TraceLevel::TRACE => Level::TRACE,
            TraceLevel::WARN => Level::WARN,
        })
        .finish();
    subscriber::set_global_default(my_subscriber)?;

    Ok(false)
}
