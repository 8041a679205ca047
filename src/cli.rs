use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal admin console for a vehicle inventory service.
#[derive(Debug, Parser)]
#[command(name = "carport", version, about)]
pub struct Cli {
    /// Path to the configuration file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the vehicle API, overriding the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds, overriding the config file.
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "carport",
            "--base-url",
            "http://cars.example:9000",
            "--timeout",
            "10",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.api.base_url, "http://cars.example:9000");
        assert_eq!(config.api.timeout_seconds, 10);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let cli = Cli::parse_from(["carport"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_seconds, 30);
    }
}
