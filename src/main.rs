//! `linggloss` command line.
//!
//! * `linggloss` – gloss TSV lines from stdin (`flexcode \t lemma_id \t pos \t sub_pos`).
//! * `linggloss lookup <code>...` – print the decoded category and the BTS label
//!   of each code, `-` where there is none.
//! * `linggloss serve` – run the HTTP endpoint on `server.listen`.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use linggloss::batch::gloss_lines;
use linggloss::settings::Settings;
use linggloss::{
    FanoutSink, Flexcode, GlossError, Glosser, RawFlexcode, Result, TracingSink, WriterSink, decoder, resolve_flexcode,
    server,
};

const USAGE: &str = "linggloss [gloss | lookup <code>... | serve]";

fn diagnostic_sink(settings: &Settings) -> Result<FanoutSink> {
    let mut sink = FanoutSink::new();
    if let Some(path) = &settings.diagnostics.path {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        sink.push(WriterSink::new(BufWriter::new(file)));
    }
    if settings.diagnostics.tracing {
        sink.push(TracingSink);
    }
    Ok(sink)
}

fn batch(settings: &Settings) -> Result<()> {
    let glosser = Glosser::with_sink(diagnostic_sink(settings)?);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let started = std::time::Instant::now();
    let count = gloss_lines(&glosser, stdin.lock(), BufWriter::new(stdout.lock()))?;
    info!(tokens = count, ms = started.elapsed().as_secs_f64() * 1000.0, "batch complete");
    Ok(())
}

fn lookup(codes: &[String]) -> Result<()> {
    if codes.is_empty() {
        return Err(GlossError::Usage(USAGE.into()));
    }
    let mut out = io::stdout().lock();
    for code in codes {
        let category = match Flexcode::parse(RawFlexcode::from(code)) {
            Ok(parsed) => decoder::category(&parsed).to_string(),
            Err(_) => "-".to_string(),
        };
        writeln!(out, "{}\t{}\t{}", code, category, resolve_flexcode(code).unwrap_or("-"))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = match args.first().map(String::as_str) {
        None | Some("gloss") => batch(&settings),
        Some("lookup") => lookup(&args[1..]),
        Some("serve") => server::serve(&settings.server.listen, settings.diagnostics.tracing).await,
        Some(other) => Err(GlossError::Usage(format!("unknown command {}; {}", other, USAGE))),
    };
    if let Err(e) = outcome {
        error!(error = %e, "linggloss failed");
        std::process::exit(1);
    }
}
