use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber used by the binaries.
///
/// The filter comes from `OBOT_LOG` (standard env-filter syntax) and
/// defaults to `info`. Logs go to stderr so command output stays clean on
/// stdout.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env("OBOT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(())
}
