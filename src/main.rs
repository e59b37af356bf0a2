use clap::Parser;
use tracing_subscriber::EnvFilter;
use tutorial_api::config::Config;
use tutorial_api::server;

/// Tutorial REST API server.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address
    #[arg(short, long, env = "LISTEN")]
    listen: Option<String>,

    /// Log format (`text` or `json`)
    #[arg(long, env = "LOG_FORMAT")]
    log_format: Option<String>,

    /// Start with an empty user store
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Validated only after the flags are applied.
    let mut config = Config::from_env()?;
    apply_overrides(&mut config, cli);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn apply_overrides(config: &mut Config, cli: Cli) {
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    if cli.no_seed {
        config.seed_users = false;
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config_with_format(log_format: &str) -> Config {
        Config {
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: log_format.to_string(),
            version_major: "1".to_string(),
            version_minor: "0".to_string(),
            seed_users: true,
        }
    }

    #[test]
    #[serial]
    fn test_flag_fixes_invalid_env_format() {
        let mut config = config_with_format("xml");
        assert!(config.validate().is_err());

        let cli = Cli::try_parse_from(["tutorial-api", "--log-format", "json"]).unwrap();
        apply_overrides(&mut config, cli);

        assert_eq!(config.log_format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_listen_flag_reads_env() {
        // SAFETY: Tests are run serially
        unsafe {
            std::env::set_var("LISTEN", "127.0.0.1:9000");
        }

        let cli = Cli::try_parse_from(["tutorial-api", "--no-seed"]).unwrap();
        let mut config = config_with_format("text");
        apply_overrides(&mut config, cli);

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert!(!config.seed_users);

        unsafe {
            std::env::remove_var("LISTEN");
            std::env::remove_var("LOG_FORMAT");
        }
    }
}
