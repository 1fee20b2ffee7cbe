use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_DATABASE_URL: &str = "sqlite://people.db?mode=rwc";
const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct Config {
    /// SeaORM connection URL; `sqlite://` and `postgres://` are both accepted
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparsable values use defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
