use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Server settings, from flags or `ROWQL_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "rowql_server", about = "Serve SELECT queries over a directory of CSV tables")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "ROWQL_ADDR", default_value = "127.0.0.1:7878")]
    pub addr: SocketAddr,

    /// Directory holding one `<table>.csv` file per table
    #[arg(long, env = "ROWQL_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}
