use anyhow::Result;
use tracing_subscriber::EnvFilter;
use worktime::commands::Cli;
use worktime::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    // Debug mode routes all messages through tracing instead of println
    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}
