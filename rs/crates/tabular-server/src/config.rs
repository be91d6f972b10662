use std::path::PathBuf;

use clap::Parser;

/// Server settings. Every flag can also come from the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "tabular-server", about = "Tabular data dashboard server", version)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "TABULAR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "TABULAR_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding index.html
    #[arg(long, env = "TABULAR_TEMPLATES_DIR", default_value = "apps/tabular-dashboard/templates")]
    pub templates_dir: PathBuf,

    /// Directory served under /static/
    #[arg(long, env = "TABULAR_STATIC_DIR", default_value = "apps/tabular-dashboard/static")]
    pub static_dir: PathBuf,

    /// Created at startup; uploads are not written to it
    #[arg(long, env = "TABULAR_UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Largest accepted request body in bytes
    #[arg(long, env = "TABULAR_MAX_UPLOAD_BYTES", default_value_t = 16 * 1024 * 1024)]
    pub max_upload_bytes: usize,

    /// Accepted upload extensions, comma separated (empty accepts any)
    #[arg(
        long,
        env = "TABULAR_ALLOWED_EXTENSIONS",
        value_delimiter = ',',
        default_value = "csv,xlsx,xls"
    )]
    pub allowed_extensions: Vec<String>,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Lowercased, dot-less extensions with blanks removed.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.allowed_extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}
