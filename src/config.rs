pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub session_minutes: i64,
}

impl Config {
    pub fn from_env() -> Config {
        let _ = dotenv::dotenv();
        Config {
            database_url: dotenv::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:grapevine.db?mode=rwc".to_owned()),
            bind_addr: dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned()),
            session_minutes: dotenv::var("SESSION_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60),
        }
    }
}
