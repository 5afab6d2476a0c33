use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub run_host: String,
    /// Port the HTTP server listens on
    pub run_port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let run_port = match env::var("API_RUN_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid value for API_RUN_PORT: {:?}", raw))?,
            Err(_) => 8000,
        };

        Ok(Self {
            run_host: env::var("API_RUN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            run_port,
        })
    }

    /// Address to bind, e.g. `0.0.0.0:8000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.run_host, self.run_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            run_host: "127.0.0.1".to_string(),
            run_port: 8000,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }
}
