use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Reserved for a durable backend. The store is in-memory regardless.
    pub aws_region: String,
    pub dynamodb_table: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            host: get("HOST", "0.0.0.0"),
            port: get("PORT", "8080").trim().parse().unwrap_or(8080),

            aws_region: get("AWS_REGION", "us-east-1"),
            dynamodb_table: get("DYNAMODB_TABLE", "habits"),
            environment: get("ENVIRONMENT", "development"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
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
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.dynamodb_table, "habits");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_values_override_defaults() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("AWS_REGION", "eu-west-1"),
            ("DYNAMODB_TABLE", "habits-prod"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        assert_eq!(config.aws_region, "eu-west-1");
        assert_eq!(config.dynamodb_table, "habits-prod");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_empty_and_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("ENVIRONMENT", "")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
    }
}
