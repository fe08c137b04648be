//! Configuration for Inventory API

use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, env_flag, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Start with the two sample products instead of an empty store
    pub seed_sample_products: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000 unless set
        let cors = CorsConfig::from_env()?; // Any origin unless CORS_ALLOWED_ORIGIN is set
        let seed_sample_products = env_flag("SEED_SAMPLE_PRODUCTS", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_sample_products,
        })
    }
}
