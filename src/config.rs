use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub store: StoreKind,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("STORE").as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(AppError::EnvError(format!(
                    "STORE must be `postgres` or `memory`, got `{other}`"
                )));
            }
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(AppError::EnvError("DATABASE_URL must be set".into()));
        }

        let jwt_secret =
            lookup("JWT_SECRET").ok_or_else(|| AppError::EnvError("JWT_SECRET must be set".into()))?;

        let port = match lookup("PORT") {
            Some(s) => s
                .parse::<u16>()
                .map_err(|e| AppError::EnvError(format!("Invalid PORT `{s}`: {e}")))?,
            None => 3001,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(s) => s.parse::<u32>().map_err(|e| {
                AppError::EnvError(format!("Invalid DATABASE_MAX_CONNECTIONS `{s}`: {e}"))
            })?,
            None => 5,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database_url,
            database_max_connections,
            jwt_secret,
            port,
            allowed_origins,
            store,
        })
    }
}
