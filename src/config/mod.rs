// Configuration module entry point
// Loads application configuration from file, environment and defaults

mod types;

use std::net::SocketAddr;

pub use types::{AppConfig, Config, LoggingConfig, RouteConfig, ServerConfig};

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.read_timeout", 30)?
            .set_default("app.show_errors", false)?
            .set_default("app.views_dir", "views")?
            .set_default("app.public_dir", "public")?
            .set_default("app.log_dir", "logs")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert!(!cfg.app.show_errors);
        assert_eq!(cfg.app.views_dir, "views");
        assert_eq!(cfg.app.log_dir, "logs");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.routes.is_empty());
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_load_routes_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(
            &path,
            r#"
[app]
show_errors = true

[[routes]]
path = "posts/{id:\\d+}"
params = { controller = "Posts", action = "show" }

[[routes]]
path = "{controller}/{action}"
"#,
        )
        .unwrap();

        let cfg = Config::load_from(dir.path().join("app").to_str().unwrap()).unwrap();
        assert!(cfg.app.show_errors);
        assert_eq!(cfg.routes.len(), 2);
        assert_eq!(cfg.routes[0].path, "posts/{id:\\d+}");
        assert_eq!(cfg.routes[0].params.get("action"), Some("show"));
        assert!(cfg.routes[1].params.is_empty());
    }
}
