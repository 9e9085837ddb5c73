use clap::Parser;
use config::{ConfigError, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Host
    #[clap(long, value_parser)]
    host: Option<String>,

    /// Port to expose the server
    #[clap(long, value_parser)]
    port: Option<i16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MailerConfig {
    pub url: String,
    pub key: String,
    pub sender: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub mailer: MailerConfig,
    pub app: AppConfig,
    pub env: String, // prd / stg / dev
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        log::debug!("Args: {:#?}", args);

        let config = config::Config::builder()
            .add_source(File::with_name("configuration"))
            .add_source(
                config::Environment::default()
                    .try_parsing(true)
                    .separator("_"),
            )
            .set_override_option("server.host", args.host)?
            .set_override_option("server.port", args.port)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("store.url", "http://localhost:54321")? // supabase cli -> local env
            .set_default("store.key", "test_key")? // supabase cli -> local env
            .set_default("mailer.url", "https://api.resend.com")?
            .set_default("mailer.key", "test_key")?
            .set_default("mailer.sender", "Bidi <notifications@yourdomain.com>")?
            .set_default("app.url", "http://localhost:3000")?
            .set_default("env", "dev")?
            .build()?;

        config.try_deserialize()
    }
}
