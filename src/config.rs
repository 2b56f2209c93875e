use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Serves static HTML articles and answers related-file lookups.
#[derive(Parser, Debug, Clone)]
#[command(name = "article-server", version, about)]
pub struct ServerConfig {
    /// Directory holding the articles; searched by /related-files and served as static files
    #[arg(long, env = "ARTICLES_DIR", default_value = "static/articles")]
    pub articles_dir: PathBuf,

    /// Host address to bind to
    #[arg(long, env = "ARTICLE_SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "ARTICLE_SERVER_PORT", default_value_t = 3003)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", addr, e),
            )
        })
    }

    /// Absolute form of the articles directory, falling back to the configured path.
    pub fn resolved_articles_dir(&self) -> PathBuf {
        self.articles_dir
            .canonicalize()
            .unwrap_or_else(|_| self.articles_dir.clone())
    }
}
