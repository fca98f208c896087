//! Server configuration loaded from environment variables.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 17020;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Bind address (from STOREFRONT_HOST)
    pub host: String,
    /// HTTP port (from STOREFRONT_PORT)
    pub port: u16,
    /// Optional JSON product catalog (from STOREFRONT_CATALOG)
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("STOREFRONT_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("STOREFRONT_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid STOREFRONT_PORT '{}'", raw);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let catalog_path = lookup("STOREFRONT_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            catalog_path,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().bind_addr(), "127.0.0.1:17020");
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("STOREFRONT_HOST", "0.0.0.0"),
            ("STOREFRONT_PORT", "8080"),
            ("STOREFRONT_CATALOG", "/srv/catalog.json"),
        ]);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let cfg = config(&[("STOREFRONT_PORT", "not-a-port")]);
        assert_eq!(cfg.port, DEFAULT_PORT);
    }
}
