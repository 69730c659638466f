//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CatalogConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, RateLimitConfig, ServerConfig, SnowflakeConfig,
};
