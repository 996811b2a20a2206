use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_SMTP_PORT: u16 = 587;

pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub app_url: String,
    pub upload_dir: String,

    pub bot_token: String,
    pub admin_password: String,
    pub admin_chat_ids: Vec<i64>,

    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_sender: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            bind_addr: optional_var("BIND_ADDR", DEFAULT_BIND_ADDR),
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            app_url: optional_var("APP_URL", DEFAULT_APP_URL),
            upload_dir: optional_var("UPLOAD_DIR", DEFAULT_UPLOAD_DIR),
            bot_token: required_var("TELEGRAM_BOT_TOKEN")?,
            admin_password: required_var("TELEGRAM_ADMIN_PASSWORD")?,
            admin_chat_ids: parse_chat_ids(&required_var("TELEGRAM_ADMIN_CHAT_IDS")?)?,
            smtp_host: required_var("SMTP_HOST")?,
            smtp_port: parse_smtp_port()?,
            smtp_username: required_var("SMTP_USERNAME")?,
            smtp_password: required_var("SMTP_PASSWORD")?,
            smtp_sender: required_var("SMTP_SENDER")?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parses the comma-separated allow-list of operator chat ids.
fn parse_chat_ids(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "TELEGRAM_ADMIN_CHAT_IDS".to_string(),
                value: part.to_string(),
            })
        })
        .collect()
}

fn parse_smtp_port() -> Result<u16, ConfigError> {
    match std::env::var("SMTP_PORT") {
        Err(_) => Ok(DEFAULT_SMTP_PORT),
        Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
            name: "SMTP_PORT".to_string(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::parse_chat_ids;

    #[test]
    fn parses_comma_separated_chat_ids() {
        let ids = parse_chat_ids("123, 456,-789").unwrap();
        assert_eq!(ids, vec![123, 456, -789]);
    }

    #[test]
    fn skips_empty_entries() {
        let ids = parse_chat_ids("123,,456,").unwrap();
        assert_eq!(ids, vec![123, 456]);
    }

    #[test]
    fn rejects_non_numeric_entries() {
        assert!(parse_chat_ids("123,abc").is_err());
    }
}
