use std::env;

pub const MIN_JWT_SECRET_LEN: usize = 32;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub admin_subject: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_upload_preset: String,
    /// Appended to every photo's alt text, e.g. "Anna Svensson Fotografi".
    pub gallery_alt_byline: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = required("PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?;

        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {MIN_JWT_SECRET_LEN} characters"),
            });
        }

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ConfigError::Invalid {
                        name: "DB_MAX_CONNECTIONS",
                        reason: format!("expected a positive integer, got '{raw}'"),
                    })?
            }
            _ => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port,
            jwt_secret,
            admin_subject: required("ADMIN_SUBJECT")?,
            cloudinary_cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            cloudinary_upload_preset: required("CLOUDINARY_UPLOAD_PRESET")?,
            gallery_alt_byline: lookup("GALLERY_ALT_BYLINE").unwrap_or_default(),
            db_max_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
