use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use purgeplan::{build_query, QuerySpec};

/// Compiles a deletion query spec to the SQL that gets submitted to the
/// engine.
#[derive(Debug, StructOpt)]
#[structopt(name = "purgeplan")]
struct Opt {
    /// Path to the query spec JSON document; reads stdin when omitted.
    spec: Option<PathBuf>,
}

fn read_input(opt: &Opt) -> Result<String> {
    match &opt.spec {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opt = Opt::from_args();
    let raw = read_input(&opt)?;
    let spec: QuerySpec =
        serde_json::from_str(&raw).context("Failed to parse query spec")?;
    spec.validate()?;
    println!("{}", build_query(&spec));

    Ok(())
}
