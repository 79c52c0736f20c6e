use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
    /// Income figure used when a dashboard request does not carry one.
    pub default_budget: f64,
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            default_budget: 0.0,
            seed_demo_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let public_dir = lookup("FINMATE_PUBLIC_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);
        let default_budget = parse_budget(lookup("FINMATE_BUDGET").as_deref())
            .unwrap_or(defaults.default_budget);
        let seed_demo_data = match lookup("FINMATE_SEED") {
            Some(value) => !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
            None => defaults.seed_demo_data,
        };

        Self {
            port,
            public_dir,
            default_budget,
            seed_demo_data,
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn investments_path(&self) -> PathBuf {
        self.public_dir.join("data").join("investments.json")
    }

    /// Resolves a budget supplied by a client, falling back to the configured one.
    pub fn budget_or_default(&self, raw: Option<&str>) -> f64 {
        parse_budget(raw).unwrap_or(self.default_budget)
    }
}

/// A budget figure is any finite, non-negative number.
pub fn parse_budget(raw: Option<&str>) -> Option<f64> {
    raw?.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.default_budget, 0.0);
        assert!(config.seed_demo_data);
        assert_eq!(
            config.investments_path(),
            PathBuf::from("public/data/investments.json")
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[("PORT", "http"), ("FINMATE_BUDGET", "-20")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.default_budget, 0.0);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8181"),
            ("FINMATE_PUBLIC_DIR", "/srv/finmate"),
            ("FINMATE_BUDGET", "2500"),
            ("FINMATE_SEED", "false"),
        ]);
        assert_eq!(config.port, 8181);
        assert_eq!(config.public_dir, PathBuf::from("/srv/finmate"));
        assert_eq!(config.default_budget, 2500.0);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn client_budget_must_be_finite_and_non_negative() {
        let config = config_from(&[("FINMATE_BUDGET", "100")]);
        assert_eq!(config.budget_or_default(Some("1800.5")), 1800.5);
        assert_eq!(config.budget_or_default(Some("0")), 0.0);
        assert_eq!(config.budget_or_default(Some("-1")), 100.0);
        assert_eq!(config.budget_or_default(Some("inf")), 100.0);
        assert_eq!(config.budget_or_default(Some("lots")), 100.0);
        assert_eq!(config.budget_or_default(None), 100.0);
    }
}
