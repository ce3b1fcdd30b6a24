// Flags inspection tool.
//
// Prints the flags the browser bundle would build for a hostname, using the
// process environment (and `.env`) in place of the compile-time values.
//
//   timer-flags [HOSTNAME]

use timer_client::modules::bootstrap::use_cases::build_flags::handler::BuildFlagsHandler;
use timer_client::shared::infrastructure::clock::SystemClock;
use timer_client::shared::infrastructure::config::process_env::ProcessEnvConfig;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();

    ProcessEnvConfig::load_dotenv();
    let hostname = std::env::args().nth(1).unwrap_or_else(|| "localhost".to_string());

    let flags = BuildFlagsHandler::new(&ProcessEnvConfig, &SystemClock).handle(&hostname);
    tracing::info!(%hostname, "flags built");
    println!("{}", serde_json::to_string_pretty(&flags)?);
    Ok(())
}
