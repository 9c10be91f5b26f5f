use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub db_host: String,
    pub db_port: String,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            db_host: std::env::var("DB_HOST")
                .map_err(|_| ConfigError::MissingEnvVar("DB_HOST".to_string()))?,
            db_port: std::env::var("DB_PORT")
                .map_err(|_| ConfigError::MissingEnvVar("DB_PORT".to_string()))?,
            db_user: std::env::var("DB_USER")
                .map_err(|_| ConfigError::MissingEnvVar("DB_USER".to_string()))?,
            db_pass: std::env::var("DB_PASS")
                .map_err(|_| ConfigError::MissingEnvVar("DB_PASS".to_string()))?,
            db_name: std::env::var("DB_NAME")
                .map_err(|_| ConfigError::MissingEnvVar("DB_NAME".to_string()))?,
        })
    }

    /// Connection string for the PostgreSQL store.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_pass, self.db_host, self.db_port, self.db_name
        )
    }
}
