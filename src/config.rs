use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub google_client_id: String,
    /// Artificial processing delay for the mocked payment endpoint.
    pub payment_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "cvforge".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "cvforge-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 7),
        };
        let google_client_id = std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
        let payment_delay_ms = std::env::var("PAYMENT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1000);
        Ok(Self {
            database_url,
            jwt,
            google_client_id,
            payment_delay_ms,
        })
    }
}
