use std::env;
use std::path::PathBuf;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_SECRET: &str = "your-secret-key";
const DEFAULT_ADVISOR_URL: &str = "http://localhost:5000/api/chat";

/// Process configuration, read once at startup and passed into `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub jwt_secret: String,
    pub advisor_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_dir = env::var("APP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set; using the development default");
            DEFAULT_JWT_SECRET.to_string()
        });
        let advisor_url =
            env::var("ADVISOR_URL").unwrap_or_else(|_| DEFAULT_ADVISOR_URL.to_string());

        Self {
            port,
            data_dir,
            jwt_secret,
            advisor_url,
        }
    }
}
