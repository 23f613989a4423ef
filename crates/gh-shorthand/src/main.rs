//! gh-shorthand - Alfred script filter for GitHub shorthand
//!
//! Joins its arguments into one input line, expands it against
//! ~/.gh-shorthand.yml and prints Alfred items as JSON.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gh_shorthand::{config::Config, items, Items};

/// gh-shorthand - Expand GitHub shorthand into Alfred items
#[derive(Parser)]
#[command(name = "gh-shorthand")]
#[command(version)]
#[command(about = "Expand GitHub shorthand into Alfred items")]
#[command(long_about = "Expand GitHub shorthand into Alfred items.\n\n\
    Input words are joined with spaces and matched against the repo and\n\
    user shorthand in ~/.gh-shorthand.yml:\n\n    \
    gh-shorthand df 12      -> Open zerowidth/dotfiles#12\n    \
    gh-shorthand zw/foo     -> Open zerowidth/foo")]
struct Cli {
    /// Config file (default: ~/.gh-shorthand.yml or $GH_SHORTHAND_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Print the parse result instead of Alfred items
    #[arg(long)]
    raw: bool,

    /// Shorthand input
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    input: Vec<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = cli.input.join(" ");
    tracing::debug!("input: {:?}", input);

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(&shorthand_core::expand_path(path))?,
        None => Config::load()?,
    };

    if cli.raw {
        let result = config.parser(items::item_options()).parse(&input);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let doc = Items::from(items::generate_items(&config, &input));
    println!("{}", serde_json::to_string(&doc)?);
    Ok(())
}
