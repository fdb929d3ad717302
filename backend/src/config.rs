//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "invoice-editor", version, about = "Invoice template editor server")]
pub struct Config {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "INVOICE_EDITOR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "INVOICE_EDITOR_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file, created on first start.
    #[arg(long, env = "INVOICE_EDITOR_DB", default_value = "invoice_templates.sqlite")]
    pub database: PathBuf,

    /// Do not open a browser tab on startup.
    #[arg(long, env = "INVOICE_EDITOR_NO_BROWSER")]
    pub no_browser: bool,

    /// Leave an empty database empty instead of inserting the demo template.
    #[arg(long)]
    pub no_seed: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
