/// Runtime configuration, read from the environment (a `.env` file is
/// honored when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .expect("CORS_ALLOWED_ORIGIN must be set!"),
        }
    }
}
