use crate::auth::JwtConfig;

/// Fixed login for one role
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | runtime environment |
/// | ADMIN_USERNAME / ADMIN_PASSWORD | admin / 12345 | admin login |
/// | DEVOTEE_USERNAME / DEVOTEE_PASSWORD | devotee / 12345 | devotee login |
/// | TEMPLE_NAME | Shri Ram Mandir | name printed on tickets |
/// | QUEUE_LENGTH | 34 | default queue length |
/// | AVG_PROCESSING_MINUTES | 2 | default minutes per devotee |
/// | LIVE_DEVOTEE_COUNT | 1247 | live count shown on the dashboard |
/// | PARKING_TOTAL_SPACES | 300 | parking capacity |
///
/// `JWT_SECRET` and `JWT_EXPIRATION_MINUTES` are read by [`JwtConfig`].
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub jwt: JwtConfig,
    pub admin: Credential,
    pub devotee: Credential,
    pub temple_name: String,
    pub queue_length: u32,
    pub average_processing_minutes: u32,
    pub live_devotee_count: u32,
    pub parking_total_spaces: u32,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: env_or("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
            admin: Credential {
                username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
                password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "12345".into()),
            },
            devotee: Credential {
                username: std::env::var("DEVOTEE_USERNAME").unwrap_or_else(|_| "devotee".into()),
                password: std::env::var("DEVOTEE_PASSWORD").unwrap_or_else(|_| "12345".into()),
            },
            temple_name: std::env::var("TEMPLE_NAME")
                .unwrap_or_else(|_| "Shri Ram Mandir".into()),
            queue_length: env_or("QUEUE_LENGTH", 34),
            average_processing_minutes: env_or("AVG_PROCESSING_MINUTES", 2),
            live_devotee_count: env_or("LIVE_DEVOTEE_COUNT", 1247),
            parking_total_spaces: env_or("PARKING_TOTAL_SPACES", 300),
        }
    }

    /// Override the port, mostly for tests
    pub fn with_port(http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
