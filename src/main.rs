mod debug_report;

use anyhow::{Context as _, Result, anyhow, bail};
use clap::Parser;
use instant_answers::answers::{self, Fetchers};
use instant_answers::{Config, Dispatcher, LanguageTag, MemoryCache, RequestContext, SystemClock};
use std::io::{self, IsTerminal, Read};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Answer a search query with the built-in instant answer modules.
#[derive(Parser, Debug)]
#[command(name = "instant-answers", version, about)]
struct Cli {
    /// Query text. Read from stdin when omitted.
    query: Vec<String>,

    /// Configuration file, merged over ./instant.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Caller language (BCP-47 tag)
    #[arg(short, long, value_name = "TAG")]
    language: Option<LanguageTag>,

    /// Caller IP address
    #[arg(long, value_name = "ADDR")]
    ip: Option<IpAddr>,

    /// Caller user agent
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print the envelope as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Disable ANSI color output
    #[arg(long)]
    no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).init();

    let config =
        Config::load(cli.config.as_deref()).map_err(|err| anyhow!("failed to load configuration: {err}"))?;
    let query = if cli.query.is_empty() { read_stdin()? } else { cli.query.join(" ") };
    if query.trim().is_empty() {
        bail!("no query provided");
    }

    let registry = answers::standard(&Fetchers::default())?;
    let cache = Arc::new(MemoryCache::new(Arc::new(SystemClock)));
    let dispatcher = Dispatcher::new(registry).with_config(config.clone()).with_cache(cache);

    let language = match cli.language {
        Some(language) => language,
        None => LanguageTag::parse(&config.default_language).unwrap_or_default(),
    };
    let mut ctx = RequestContext::new(language);
    if let Some(ip) = cli.ip {
        ctx = ctx.with_ip(ip);
    }
    if let Some(user_agent) = cli.user_agent {
        ctx = ctx.with_user_agent(user_agent);
    }

    let run = dispatcher.answer_verbose(&query, &ctx).await;
    if cli.json {
        println!("{}", run.envelope.to_json()?);
    } else {
        let color = !cli.no_color && io::stdout().is_terminal();
        debug_report::print_run(query.trim(), &run, dispatcher.registry(), color);
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    Ok(buffer)
}
