use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use range_query::descriptor::{Answers, TaskPayload};
use tracing::{Level, error, info};

/// Answers a batch of range sum / alternating range sum queries.
///
/// Reads a task document `{"token", "data", "query"}` and writes the results
/// as a JSON array, one number per query.
#[derive(Debug, Parser)]
#[command(name = "range-query")]
struct Cli {
    /// Task document to read; stdin when absent
    #[arg(short, long, env = "RANGE_QUERY_INPUT")]
    input: Option<PathBuf>,

    /// Where to write the results; stdout when absent
    #[arg(short, long, env = "RANGE_QUERY_OUTPUT")]
    output: Option<PathBuf>,

    /// Pretty-print the results
    #[arg(long)]
    pretty: bool,

    #[arg(long, env = "RANGE_QUERY_LOG", default_value = "info")]
    log_level: Level,
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_payload<R: Read>(reader: R) -> Result<TaskPayload> {
    serde_json::from_reader(reader).context("failed to parse task document")
}

fn write_answers<W: Write>(mut writer: W, answers: &Answers, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, answers)?;
    } else {
        serde_json::to_writer(&mut writer, answers)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn run<R: Read, W: Write>(reader: R, writer: W, pretty: bool) -> Result<usize> {
    let payload = read_payload(reader)?;
    info!(
        len = payload.data.len(),
        queries = payload.query.len(),
        token = payload.token.is_some(),
        "loaded task"
    );

    let answers = payload.answer()?;
    write_answers(writer, &answers, pretty)?;
    Ok(answers.len())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match run(reader, writer, cli.pretty) {
        Ok(count) => {
            info!("wrote {} results", count);
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_worked_example() {
        let input = br#"{
            "token": "abc",
            "data": [1, 2, 3, 4, 5],
            "query": [
                {"type": "2", "range": [1, 3]},
                {"type": "1", "range": [1, 3]},
                {"type": "2", "range": [0, 4]}
            ]
        }"#;
        let mut out = Vec::new();
        let count = run(&input[..], &mut out, false).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "[3,9,3]\n");
    }

    #[test]
    fn large_integers_and_numeric_tags() {
        let input = br#"{
            "data": [9223372036854775807, 9223372036854775807],
            "query": [{"type": "1", "range": [0, 1]}, {"type": 1, "range": [0, 1]}]
        }"#;
        let mut out = Vec::new();
        run(&input[..], &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[18446744073709551614,0]\n");
    }

    #[test]
    fn pretty_output_is_still_an_array() {
        let input = br#"{"data": [5], "query": [{"type": "1", "range": [0, 0]}]}"#;
        let mut out = Vec::new();
        run(&input[..], &mut out, true).unwrap();
        let parsed: Vec<i64> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![5]);
    }

    #[test]
    fn invalid_range_is_reported() {
        let input = br#"{"data": [], "query": [{"type": "1", "range": [0, 0]}]}"#;
        let mut out = Vec::new();
        let err = run(&input[..], &mut out, false).unwrap_err();
        assert!(err.to_string().contains("query #0"), "{err}");
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_document_is_reported() {
        let mut out = Vec::new();
        let err = run(&b"{\"data\": 3}"[..], &mut out, false).unwrap_err();
        assert!(err.to_string().contains("failed to parse"), "{err}");
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "range-query",
            "--input",
            "task.json",
            "--pretty",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("task.json")));
        assert!(cli.pretty);
        assert_eq!(cli.log_level, Level::DEBUG);
    }
}
