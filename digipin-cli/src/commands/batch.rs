//! Batch command: encode or decode a delimited file line by line.
//!
//! Every input line produces exactly one output line: the original line
//! followed by the result fields. A record that cannot be processed gets
//! empty result fields and the run continues.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use digipin::batch::{BatchEncoder, BatchError, BatchSummary, Point};
use digipin::log::TracingLogger;

use super::common::{format_code, resolve_delimiter, resolve_hyphenated, resolve_threads};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the batch command.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input file (reads stdin when omitted)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Decode the first field as a DIGIPIN instead of encoding lat/lon fields
    #[arg(long)]
    pub decode: bool,

    /// Treat the first line as a header and extend it with the result column names
    #[arg(long)]
    pub header: bool,

    /// Worker threads (0 = one per CPU; defaults to [batch] threads)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Field delimiter: a character or comma, tab, pipe, semicolon, space
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Write codes without hyphens
    #[arg(long)]
    pub compact: bool,
}

/// Run the batch command.
pub fn run(args: BatchArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(debug)?;
    runner.log_startup("batch");

    let config = runner.config();
    let delimiter = resolve_delimiter(args.delimiter.as_deref(), config)?;
    let threads = resolve_threads(args.threads, config);
    let hyphenated = resolve_hyphenated(args.compact, config);

    let mut lines = read_lines(args.input.as_deref())?;
    let header = if args.header && !lines.is_empty() {
        Some(lines.remove(0))
    } else {
        None
    };

    let encoder = BatchEncoder::new(Arc::new(TracingLogger::new())).with_threads(threads);

    let mut output = Vec::with_capacity(lines.len() + 1);
    if args.decode {
        output.extend(header.map(|h| decoded_header(&h, delimiter)));
        let (records, decoded) = decode_lines(&encoder, &lines, delimiter)?;
        output.extend(records);
        eprintln!("Decoded {} of {} codes", decoded, lines.len());
    } else {
        output.extend(header.map(|h| encoded_header(&h, delimiter)));
        let (records, summary) = encode_lines(&encoder, &lines, delimiter, hyphenated)?;
        output.extend(records);
        eprintln!(
            "Encoded {} of {} records ({} missing, {} out of range)",
            summary.encoded, summary.total, summary.missing, summary.out_of_range
        );
    }

    write_lines(args.output.as_deref(), &output)
}

/// Read the first two fields of a line as latitude and longitude.
///
/// Absent, blank or non-numeric fields become `None`.
pub fn parse_point(line: &str, delimiter: char) -> Point {
    let mut fields = line.split(delimiter).map(|f| f.trim().parse::<f64>().ok());
    Point {
        lat: fields.next().flatten(),
        lon: fields.next().flatten(),
    }
}

/// The code field of a line to decode.
pub fn code_field(line: &str, delimiter: char) -> &str {
    line.split(delimiter).next().unwrap_or_default().trim()
}

fn encoded_header(header: &str, delimiter: char) -> String {
    format!("{}{}digipin", header, delimiter)
}

fn decoded_header(header: &str, delimiter: char) -> String {
    format!("{}{d}latitude{d}longitude", header, d = delimiter)
}

/// Encode every line, appending the code (or an empty field).
pub fn encode_lines(
    encoder: &BatchEncoder,
    lines: &[String],
    delimiter: char,
    hyphenated: bool,
) -> Result<(Vec<String>, BatchSummary), BatchError> {
    let points: Vec<Point> = lines.iter().map(|l| parse_point(l, delimiter)).collect();
    let result = encoder.encode_all(&points)?;

    let records = lines
        .iter()
        .zip(result.codes())
        .map(|(line, code)| {
            let field = code
                .map(|c| format_code(&c, hyphenated))
                .unwrap_or_default();
            format!("{}{}{}", line, delimiter, field)
        })
        .collect();

    Ok((records, result.summary))
}

/// Decode every line, appending latitude and longitude (or empty fields).
pub fn decode_lines(
    encoder: &BatchEncoder,
    lines: &[String],
    delimiter: char,
) -> Result<(Vec<String>, usize), BatchError> {
    let codes: Vec<&str> = lines.iter().map(|l| code_field(l, delimiter)).collect();
    let results = encoder.decode_all(&codes)?;

    let decoded = results.iter().filter(|r| r.is_ok()).count();
    let records = lines
        .iter()
        .zip(&results)
        .map(|(line, result)| match result {
            Ok(c) => format!(
                "{line}{d}{}{d}{}",
                c.latitude_string(),
                c.longitude_string(),
                d = delimiter
            ),
            Err(_) => format!("{line}{d}{d}", d = delimiter),
        })
        .collect();

    Ok((records, decoded))
}

fn read_lines(input: Option<&Path>) -> Result<Vec<String>, CliError> {
    let name = input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    let read_error = |error: io::Error| CliError::Read {
        path: name.clone(),
        error,
    };

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(read_error)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect::<Result<_, _>>()
        .map_err(read_error)
}

fn write_lines(output: Option<&Path>, lines: &[String]) -> Result<(), CliError> {
    let name = output
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdout>".to_string());
    let write_error = |error: io::Error| CliError::Write {
        path: name.clone(),
        error,
    };

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path).map_err(write_error)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    for line in lines {
        writeln!(writer, "{}", line).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use digipin::log::NoOpLogger;

    fn encoder() -> BatchEncoder {
        BatchEncoder::new(Arc::new(NoOpLogger))
    }

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(
            parse_point("28.622788, 77.213033,Delhi", ','),
            Point::new(28.622788, 77.213033)
        );
        assert_eq!(parse_point("", ','), Point::missing());
        assert_eq!(
            parse_point("12.9|", '|'),
            Point {
                lat: Some(12.9),
                lon: None
            }
        );
        assert_eq!(parse_point("north\t77.0", '\t').lat, None);
    }

    #[test]
    fn test_code_field() {
        assert_eq!(code_field(" 39J-49L-L8T4 ,office", ','), "39J-49L-L8T4");
        assert_eq!(code_field("", ','), "");
    }

    #[test]
    fn test_encode_lines_keeps_every_record() {
        let input = lines(&["28.622788,77.213033", "", "51.5,-0.12", "12.9716,77.5946"]);

        let (records, summary) = encode_lines(&encoder(), &input, ',', true).unwrap();

        assert_eq!(
            records,
            vec![
                "28.622788,77.213033,39J-49L-L8T4",
                ",",
                "51.5,-0.12,",
                "12.9716,77.5946,4P3-JK8-52C9",
            ]
        );
        assert_eq!(summary.encoded, 2);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.out_of_range, 1);
    }

    #[test]
    fn test_encode_lines_compact() {
        let input = lines(&["20.5;81.5"]);
        let (records, _) = encode_lines(&encoder(), &input, ';', false).unwrap();
        assert_eq!(records, vec!["20.5;81.5;2LLLLLLLLL"]);
    }

    #[test]
    fn test_decode_lines() {
        let input = lines(&["39J-49L-L8T4", "bogus", "2LLLLLLLLL\thome"]);

        let (records, decoded) = decode_lines(&encoder(), &input, '\t').unwrap();
        assert_eq!(decoded, 2);

        let (records_csv, _) = decode_lines(&encoder(), &input[..2], ',').unwrap();
        assert_eq!(
            records_csv,
            vec!["39J-49L-L8T4,28.622793,77.213049", "bogus,,"]
        );
        assert_eq!(records[2], "2LLLLLLLLL\thome\t20.500017\t81.500017");
    }

    #[test]
    fn test_headers() {
        assert_eq!(encoded_header("lat,lon", ','), "lat,lon,digipin");
        assert_eq!(decoded_header("code", ','), "code,latitude,longitude");
    }

    #[test]
    fn test_read_and_write_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let input = temp.path().join("in.csv");
        let output = temp.path().join("out.csv");
        std::fs::write(&input, "20.5,81.5\r\n8.0883,77.5385\n").unwrap();

        let read = read_lines(Some(&input)).unwrap();
        assert_eq!(read, vec!["20.5,81.5", "8.0883,77.5385"]);

        write_lines(Some(&output), &read).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "20.5,81.5\n8.0883,77.5385\n"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = read_lines(Some(&temp.path().join("absent.csv"))).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
