use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Published spreadsheet export, e.g. `.../export?format=csv&gid=0`.
    pub csv_url: String,
    pub env: Environment,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// JSON file backing the per-user key-value store.
    pub store_path: PathBuf,
    /// Raw `initDataUnsafe` JSON handed over by the Telegram host, if any.
    pub telegram_init_data: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("csv_url", &self.csv_url)
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("store_path", &self.store_path)
            .field(
                "telegram_init_data",
                &self.telegram_init_data.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
