use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub scoring_base_url: String,
    pub scoring_token: String,
    pub session_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            scoring_base_url: std::env::var("SCORING_BASE_URL")
                .map_err(|_| anyhow::anyhow!("SCORING_BASE_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("SCORING_BASE_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("SCORING_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            scoring_token: std::env::var("SCORING_TOKEN")
                .map_err(|_| anyhow::anyhow!("SCORING_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("SCORING_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SESSION_TTL_SECS must be a valid number"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Scoring Base URL: {}", config.scoring_base_url);
        tracing::debug!("Session TTL: {}s", config.session_ttl_secs);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
