use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Path of the home content document served at /data/home.json
    #[arg(long, env = "CONTENT_PATH")]
    pub content_path: Option<String>,

    /// Base URL to fetch data/home.json from instead of the local file
    #[arg(long, env = "CONTENT_URL")]
    pub content_url: Option<String>,

    /// Tab to show when a page is opened
    #[arg(long, env = "INITIAL_TAB")]
    pub initial_tab: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Home content document on disk.
    pub path: String,
    /// Remote page origin; when set, content is fetched over HTTP.
    pub url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    pub title: String,
    pub static_dir: String,
    /// Explicit initial tab; `None` keeps the markup's choice.
    pub initial_tab: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration.
    ///
    /// Priority: CLI flag > CLI env var > `PORTFOLIO_*` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("content.path", "content/home.json")?
            .set_default("content.timeout_secs", 5)?
            .set_default("page.title", "Portfolio")?
            .set_default("page.static_dir", "static")?;

        if let Some(path) = config_file(cli.config.as_deref()) {
            builder = builder.add_source(File::from(path));
        }

        // PORTFOLIO_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(path) = cli.content_path {
            builder = builder.set_override("content.path", path)?;
        }
        if let Some(url) = cli.content_url {
            builder = builder.set_override("content.url", url)?;
        }
        if let Some(tab) = cli.initial_tab {
            builder = builder.set_override("page.initial_tab", tab)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// The explicit config file, or `./config.yaml` if it exists.
fn config_file(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            fallback.exists().then(|| fallback.to_path_buf())
        }
    }
}
