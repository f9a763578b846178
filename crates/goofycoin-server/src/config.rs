//! Server configuration, from command-line flags or the environment.

use std::path::PathBuf;

use clap::Parser;
use goofycoin::{LedgerConfig, DEFAULT_COIN_UNIT};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Every flag can also be set through the environment variable named next to it.
#[derive(Debug, Clone, Parser)]
#[command(name = "goofycoin-server", version, about = "Serve the goofycoin ledger over HTTP")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding index.html and dashboard.html.
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Directory holding the js/ and css/ asset folders.
    #[arg(long, env = "ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Reject appends that do not extend the current tail.
    #[arg(long, env = "STRICT_LINKAGE")]
    pub strict_linkage: bool,

    /// Unit word used in payload descriptions.
    #[arg(long, env = "COIN_UNIT", default_value = DEFAULT_COIN_UNIT)]
    pub coin_unit: String,
}

impl ServerConfig {
    /// `host:port`, ready for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The ledger service settings carried by this configuration.
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            strict_linkage: self.strict_linkage,
            coin_unit: self.coin_unit.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("public"),
            assets_dir: PathBuf::from("assets"),
            strict_linkage: false,
            coin_unit: DEFAULT_COIN_UNIT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr(), "0.0.0.0:8080");
        assert_eq!(c.public_dir, PathBuf::from("public"));
        assert!(!c.strict_linkage);
        assert_eq!(c.coin_unit, "coins");
    }

    #[test]
    fn flags_override_everything() {
        let c = ServerConfig::parse_from([
            "goofycoin-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--public-dir",
            "/srv/goofy/public",
            "--assets-dir",
            "/srv/goofy/assets",
            "--strict-linkage",
            "--coin-unit",
            "goofs",
        ]);
        assert_eq!(c.bind_addr(), "127.0.0.1:9000");
        assert_eq!(c.public_dir, PathBuf::from("/srv/goofy/public"));
        assert_eq!(c.assets_dir, PathBuf::from("/srv/goofy/assets"));

        let ledger = c.ledger_config();
        assert!(ledger.strict_linkage);
        assert_eq!(ledger.coin_unit, "goofs");
    }

    #[test]
    fn bad_port_is_rejected() {
        let parsed = ServerConfig::try_parse_from(["goofycoin-server", "--port", "not-a-port"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        ServerConfig::command().debug_assert();
    }
}
