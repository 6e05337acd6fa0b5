// Configuration module entry point
// Layers defaults, config file, environment and command line into an immutable Config

mod types;

use std::net::{IpAddr, SocketAddr};

use crate::cli::Cli;

// Re-export public types
pub use types::{Config, LogLevel};

/// Config file looked up in the working directory when `--config` is not given
const DEFAULT_CONFIG_NAME: &str = "jsonserve";

/// Prefix for environment overrides, e.g. `JSONSERVE_SERVER__PORT=8080`
const ENV_PREFIX: &str = "JSONSERVE";

impl Config {
    /// Load configuration for the given command line.
    ///
    /// Precedence, lowest first: defaults, config file, environment, command line.
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        Self::load_from(cli, Some(DEFAULT_CONFIG_NAME), None)
    }

    /// Load with the process environment and the working directory left out.
    ///
    /// `env` stands in for the process environment.
    #[cfg(test)]
    pub fn load_isolated(
        cli: &Cli,
        env: config::Map<String, String>,
    ) -> Result<Self, config::ConfigError> {
        Self::load_from(cli, None, Some(env))
    }

    /// `default_file` is looked up only when `--config` is absent; `env` replaces the
    /// process environment when set.
    fn load_from(
        cli: &Cli,
        default_file: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.backlog", 1024)?
            .set_default("files.root_dir", "./")?
            .set_default("logging.level", "info")?;

        match (&cli.config, default_file) {
            (Some(path), _) => {
                builder = builder.add_source(config::File::from(path.as_path()).required(true));
            }
            (None, Some(name)) => {
                builder = builder.add_source(config::File::with_name(name).required(false));
            }
            (None, None) => {}
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .set_override_option("server.host", cli.host.clone())?
            .set_override_option("server.port", cli.port.map(i64::from))?
            .set_override_option(
                "server.workers",
                cli.workers.map(|w| i64::try_from(w).unwrap_or(i64::MAX)),
            )?
            .set_override_option(
                "files.root_dir",
                cli.root.as_ref().map(|p| p.to_string_lossy().into_owned()),
            )?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.workers == Some(0) {
            return Err(config::ConfigError::Message(
                "server.workers must be greater than 0".to_string(),
            ));
        }
        if self.server.backlog == 0 {
            return Err(config::ConfigError::Message(
                "server.backlog must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| format!("Invalid address '{}': {e}", self.server.host))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn load(cli: &Cli) -> Result<Config, config::ConfigError> {
        Config::load_isolated(cli, config::Map::new())
    }

    fn env(vars: &[(&str, &str)]) -> config::Map<String, String> {
        vars.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let cfg = load(&Cli::default()).unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.files.root_dir, PathBuf::from("./"));
        assert_eq!(cfg.logging.level, LogLevel::Info);
        assert!(cfg.logging.error_log_file.is_none());
    }

    #[test]
    fn test_config_file() {
        let file = write_config(
            "[server]\nport = 8081\n\n[files]\nroot_dir = \"/srv/json\"\n\n[logging]\nlevel = \"warn\"\n",
        );
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };

        let cfg = load(&cli).unwrap();
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.files.root_dir, PathBuf::from("/srv/json"));
        assert_eq!(cfg.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("[server]\nport = 8081\nhost = \"127.0.0.1\"\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            port: Some(9000),
            root: Some(PathBuf::from("data")),
            workers: Some(2),
            ..Cli::default()
        };

        let cfg = load(&cli).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.files.root_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/jsonserve.toml")),
            ..Cli::default()
        };
        assert!(load(&cli).is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let cli = Cli {
            workers: Some(0),
            ..Cli::default()
        };
        assert!(load(&cli).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = load(&Cli::default()).unwrap();
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );

        cfg.server.host = "::1".to_string();
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "[::1]:3000".parse::<SocketAddr>().unwrap()
        );

        cfg.server.host = "localhost:80".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[server]\nport = 8081\n\n[logging]\nlevel = \"warn\"\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        let vars = env(&[
            ("JSONSERVE_SERVER__PORT", "8082"),
            ("JSONSERVE_FILES__ROOT_DIR", "/srv/env"),
            ("OTHER_SERVER__PORT", "1"),
        ]);

        let cfg = Config::load_isolated(&cli, vars).unwrap();
        assert_eq!(cfg.server.port, 8082);
        assert_eq!(cfg.files.root_dir, PathBuf::from("/srv/env"));
        assert_eq!(cfg.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = Cli {
            port: Some(9001),
            ..Cli::default()
        };
        let vars = env(&[("JSONSERVE_SERVER__PORT", "8082"), ("JSONSERVE_SERVER__WORKERS", "3")]);

        let cfg = Config::load_isolated(&cli, vars).unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.workers, Some(3));
    }
}
