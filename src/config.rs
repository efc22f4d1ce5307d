use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid u16")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env manipulation stays in one test to avoid races between test threads.
    #[test]
    fn test_port_from_env() {
        std::env::remove_var("PORT");
        assert_eq!(ServiceConfig::from_env().unwrap().port, 8080);

        std::env::set_var("PORT", "9000");
        assert_eq!(ServiceConfig::from_env().unwrap().port, 9000);

        std::env::set_var("PORT", "not-a-port");
        assert!(ServiceConfig::from_env().is_err());

        std::env::remove_var("PORT");
    }
}
