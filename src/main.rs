use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, bail};
use rechain::{ChainFileConfig, ReplacementChain, whitespace_normalizer};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: rechain [CHAIN_FILE CHAIN_NAME] < input";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let chain = match args.as_slice() {
        [] => whitespace_normalizer(),
        [path, name] => load_chain(path, name)?,
        _ => bail!(USAGE),
    };

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        writeln!(out, "{}", chain.normalize_str(&line))?;
    }
    out.flush()?;

    Ok(())
}

fn load_chain(path: &str, name: &str) -> anyhow::Result<ReplacementChain> {
    let config = ChainFileConfig::from_file(path)
        .with_context(|| format!("failed to load chain file {path}"))?;
    Ok(config.build(name)?)
}
