mod remote;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rowql_core::Database;
use rowql_core::engine::format_result;
use rowql_core::parser::parse;
use rowql_core::types::ResultSet;
use tracing_subscriber::EnvFilter;

use crate::remote::RemoteClient;

#[derive(Debug, Parser)]
#[command(name = "rowql", about = "Run SELECT queries over CSV tables")]
struct Args {
    /// Directory holding one `<table>.csv` file per table
    #[arg(long, env = "ROWQL_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Base URL of a rowql_server; queries are sent there instead of run locally
    #[arg(long, env = "ROWQL_SERVER")]
    server: Option<String>,
}

enum Backend {
    Local {
        db: Database,
        runtime: tokio::runtime::Runtime,
    },
    Remote(RemoteClient),
}

impl Backend {
    fn run(&self, input: &str) -> anyhow::Result<ResultSet> {
        match self {
            Backend::Local { db, runtime } => Ok(runtime.block_on(db.query(input))?),
            Backend::Remote(client) => client.query(input),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let backend = match args.server {
        Some(url) => {
            tracing::info!(%url, "using remote server");
            Backend::Remote(RemoteClient::new(url))
        }
        None => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to start runtime")?;
            tracing::info!(data_dir = %args.data_dir.display(), "using local tables");
            Backend::Local {
                db: Database::open(args.data_dir),
                runtime,
            }
        }
    };

    println!("rowql (type 'help' or 'exit')");

    loop {
        print!("rowql> ");
        io::stdout().flush()?;

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Failed to read input");
                continue;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            println!("Commands:");
            println!("  parse <query> -> show parsed query (debug)");
            println!("  exit|quit     -> quit");
            println!("  help          -> help");
            println!("  (anything else is executed as a SELECT)");
            continue;
        }

        // ---- PARSE DEBUG MODE ----
        if let Some(rest) = input.strip_prefix("parse ") {
            match parse(rest) {
                Ok(query) => println!("Parsed as: {query:#?}"),
                Err(e) => eprintln!("Parse error: {e}"),
            }
            continue;
        }

        // ---- NORMAL EXECUTION MODE ----
        match backend.run(input) {
            Ok(result) => println!("{}", format_result(&result)),
            Err(err) => println!("{err:#}"),
        }
    }

    Ok(())
}
