// Configuration module entry point
// Loads layered configuration and exposes the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Config file looked up when no `--config` argument is given
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (extension optional)
    ///
    /// Layers, lowest priority first: built-in defaults, the config file if it
    /// exists, then `MOCK_`-prefixed environment variables such as
    /// `MOCK_SERVER__PORT=9090`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.label", "Python Test Server")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("MOCK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// URL printed in the startup banner
    pub fn public_url(&self) -> String {
        self.server
            .public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.server.host, self.server.port))
    }
}

/// Pick the config path from command line arguments (`--config <path>` or `-c <path>`)
pub fn config_path_from_args<I>(args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            if let Some(path) = args.next() {
                return path;
            }
        } else if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/mock-config").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.label, "Python Test Server");
        assert!(cfg.server.workers.is_none());
        assert!(cfg.logging.access_log);
        assert!(cfg.performance.keep_alive);
        assert_eq!(cfg.performance.connection_timeout, 30);
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("does-not-exist/mock-config").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host() {
        let mut cfg = Config::load_from("does-not-exist/mock-config").unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_public_url_fallback() {
        let mut cfg = Config::load_from("does-not-exist/mock-config").unwrap();
        assert_eq!(cfg.public_url(), "http://0.0.0.0:8080");
        cfg.server.public_url = Some("https://mock.example:8080".to_string());
        assert_eq!(cfg.public_url(), "https://mock.example:8080");
    }

    #[test]
    fn test_config_path_from_args() {
        assert_eq!(config_path_from_args(args(&["server"])), DEFAULT_CONFIG_PATH);
        assert_eq!(
            config_path_from_args(args(&["server", "--config", "dev.toml"])),
            "dev.toml"
        );
        assert_eq!(config_path_from_args(args(&["server", "-c", "a"])), "a");
        assert_eq!(
            config_path_from_args(args(&["server", "--config=b.toml"])),
            "b.toml"
        );
        // Dangling flag falls back to the default
        assert_eq!(
            config_path_from_args(args(&["server", "--config"])),
            DEFAULT_CONFIG_PATH
        );
    }
}
