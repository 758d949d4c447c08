use tracing_subscriber::{EnvFilter, fmt};

/// Install the global fmt subscriber. Fails if one is already installed or the filter is invalid.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)?;
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(test)]
mod telemetry_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_install_the_subscriber_only_once() {
        let _ = init("warn");
        assert!(init("warn").is_err());
    }
}
