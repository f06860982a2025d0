// ==============================================================================
// CLI for textmatch
// ==============================================================================
//
//   textmatch [OPTIONS] <METRIC> <A> <B>
//
// Scores two strings (or two files with `--file`) with one metric or all of
// them, printing plain text or JSON.

use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::Path;

use miette::{Context, IntoDiagnostic};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use textmatch::{EditBackend, Metric, find_longest_match};

const USAGE: &str = "\
Score how similar two strings are

Usage: textmatch [OPTIONS] <METRIC> <A> <B>

Arguments:
  <METRIC>  substring, edit, or all
  <A>       first string (a path with --file)
  <B>       second string (a path with --file)

Options:
      --file             read A and B from files; `-` reads one of them from stdin
      --json             print a JSON object instead of plain text
      --backend <NAME>   edit-distance backend: dp (default) or strsim
  -v, --verbose          log debug events to stderr (overridden by TEXTMATCH_LOG)
  -h, --help             print this help
  -V, --version          print the version
";

// ==============================================================================
// Argument Parsing
// ==============================================================================

enum Command {
    Help,
    Version,
    Score(Args),
}

struct Args {
    metric: String,
    a: String,
    b: String,
    from_files: bool,
    json: bool,
    backend: Option<String>,
    verbose: bool,
}

fn parse_args() -> Result<Command, lexopt::Error> {
    use lexopt::prelude::*;

    let mut positional = Vec::new();
    let mut from_files = false;
    let mut json = false;
    let mut backend = None;
    let mut verbose = false;

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => return Ok(Command::Help),
            Short('V') | Long("version") => return Ok(Command::Version),
            Short('v') | Long("verbose") => verbose = true,
            Long("file") => from_files = true,
            Long("json") => json = true,
            Long("backend") => backend = Some(parser.value()?.string()?),
            Value(value) if positional.len() < 3 => positional.push(value.string()?),
            _ => return Err(arg.unexpected()),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(metric), Some(a), Some(b)) = (positional.next(), positional.next(), positional.next())
    else {
        return Err("expected three arguments: <METRIC> <A> <B>".into());
    };

    Ok(Command::Score(Args {
        metric,
        a,
        b,
        from_files,
        json,
        backend,
        verbose,
    }))
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TEXTMATCH_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// ==============================================================================
// Entry Point
// ==============================================================================

fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))?;

    let args = match parse_args().map_err(|e| miette::miette!("{e}"))? {
        Command::Help => return write_output(USAGE),
        Command::Version => {
            return write_output(&format!("textmatch {}\n", env!("CARGO_PKG_VERSION")));
        }
        Command::Score(args) => args,
    };
    init_logging(args.verbose);

    let metrics: Vec<Metric> = if args.metric == "all" {
        Metric::ALL.to_vec()
    } else {
        vec![args.metric.parse().map_err(miette::Report::new)?]
    };
    let backend: EditBackend = match &args.backend {
        Some(name) => name.parse().map_err(miette::Report::new)?,
        None => EditBackend::default(),
    };

    let (a, b) = if args.from_files {
        if args.a == "-" && args.b == "-" {
            miette::bail!("at most one of A and B can be read from stdin");
        }
        (read_text(&args.a)?, read_text(&args.b)?)
    } else {
        (args.a, args.b)
    };

    let mut scores = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let algorithm = metric.algorithm(backend);
        let score = algorithm
            .similarity(&a, &b)
            .map_err(miette::Report::new)
            .wrap_err_with(|| format!("score with {}", algorithm.name()))?;
        tracing::info!(%metric, algorithm = algorithm.name(), score, "scored");
        scores.push((metric, score));
    }

    let rendered = if args.json {
        render_json(&scores, &a, &b)?
    } else if let [(_, score)] = scores.as_slice() {
        format!("{score:?}\n")
    } else {
        scores
            .iter()
            .map(|(metric, score)| format!("{metric}\t{score:?}\n"))
            .collect()
    };
    write_output(&rendered)
}

// ==============================================================================
// Input and Output
// ==============================================================================

/// Read a text file, or stdin for `-`. A single trailing line ending is
/// dropped so that files saved by editors score the same as inline strings.
fn read_text(path: &str) -> miette::Result<String> {
    let mut text = if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .into_diagnostic()
            .wrap_err("read stdin")?;
        text
    } else {
        fs::read_to_string(Path::new(path))
            .into_diagnostic()
            .wrap_err_with(|| format!("read {path}"))?
    };
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn score_json(metric: Metric, score: f64, a: &str, b: &str) -> serde_json::Value {
    let mut value = json!({ "metric": metric.as_str(), "score": score });
    if metric == Metric::Substring {
        let m = find_longest_match(a, b);
        value["match"] = json!({
            "a": m.a,
            "b": m.b,
            "size": m.size,
            "text": m.text(a),
        });
    }
    value
}

fn render_json(scores: &[(Metric, f64)], a: &str, b: &str) -> miette::Result<String> {
    let value = match scores {
        [(metric, score)] => score_json(*metric, *score, a, b),
        _ => serde_json::Value::Object(
            scores
                .iter()
                .map(|(metric, score)| (metric.to_string(), score_json(*metric, *score, a, b)))
                .collect(),
        ),
    };
    let mut rendered = serde_json::to_string_pretty(&value)
        .into_diagnostic()
        .wrap_err("serialize JSON")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write to stdout, exiting quietly if the reader has gone away.
fn write_output(content: &str) -> miette::Result<()> {
    if let Err(e) = write!(io::stdout(), "{content}") {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(e).into_diagnostic().wrap_err("write to stdout");
    }
    Ok(())
}
