use std::{
    fs,
    io::{self, Read},
    ops::Range,
    path::PathBuf,
};

use anyhow::{Context, Error};
use clap::{Args, Parser, ValueEnum};
use emoji_spans::{EmojiStr, IndexUnit, Span, Tag};
use log::LevelFilter;
use serde::Serialize;
use serde_json::json;

/// Find, test for and strip emoji in text
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(long, env = "EMOJI_SPANS_LOG", default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    /// Unit of reported positions: byte, char or utf16
    #[arg(
        long,
        global = true,
        env = "EMOJI_SPANS_INDEX",
        default_value_t = IndexUnit::Byte
    )]
    pub index: IndexUnit,

    /// Output format
    #[arg(
        long,
        global = true,
        env = "EMOJI_SPANS_FORMAT",
        value_enum,
        default_value_t = Format::Text
    )]
    pub format: Format,

    #[command(subcommand)]
    pub subcmd: SubCommand,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            index: self.index,
            format: self.format,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub index: IndexUnit,
    pub format: Format,
}

/// Result of a command: what to print and whether it succeeded.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self { output, success: true }
    }
}

#[derive(Parser)]
pub enum SubCommand {
    Ranges(Ranges),
    Spans(Spans),
    Check(Check),
    Strip(Strip),
    Count(Count),
}

impl SubCommand {
    pub fn execute(&self, settings: &Settings) -> Result<Outcome, Error> {
        match self {
            Self::Ranges(cmd) => cmd.execute(settings),
            Self::Spans(cmd) => cmd.execute(settings),
            Self::Check(cmd) => cmd.execute(settings),
            Self::Strip(cmd) => cmd.execute(settings),
            Self::Count(cmd) => cmd.execute(settings),
        }
    }
}

// Text given as an argument, read from --file or from standard input.
// One trailing line break is dropped from file and stdin input.
#[derive(Args)]
pub struct Input {
    /// Text to scan
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, short, conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl Input {
    pub fn read(&self) -> Result<String, Error> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        };
        let bytes = match &self.file {
            Some(path) => fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .context("failed to read standard input")?;
                bytes
            },
        };
        log::debug!("read {} bytes of input", bytes.len());
        decode(bytes)
    }
}

fn decode(bytes: Vec<u8>) -> Result<String, Error> {
    let mut text = String::from_utf8(bytes).context("input is not valid UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        };
    };
    Ok(text)
}

#[derive(Serialize)]
struct SpanRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<Tag>,
    start: usize,
    end: usize,
    text: &'a str,
}

fn records<'a>(
    text: &'a str,
    spans: &[Span<'a>],
    index: IndexUnit,
    with_tag: bool,
) -> Vec<SpanRecord<'a>> {
    let ranges = index.convert_all(text, spans.iter().map(Span::range));
    spans
        .iter()
        .zip(ranges)
        .map(|(span, Range { start, end })| SpanRecord {
            tag: with_tag.then(|| span.tag()),
            start,
            end,
            text: span.as_str(),
        })
        .collect()
}

/// Print the positions of emoji spans
#[derive(Parser)]
pub struct Ranges {
    #[command(flatten)]
    input: Input,
}

impl Ranges {
    pub fn execute(&self, settings: &Settings) -> Result<Outcome, Error> {
        let text = self.input.read()?;
        let spans: Vec<Span> = text.emoji_spans().filter(Span::is_emoji).collect();
        let records = records(&text, &spans, settings.index, false);
        let output = match settings.format {
            Format::Text => records
                .iter()
                .map(|record| format!("{}..{}\t{}\n", record.start, record.end, record.text))
                .collect(),
            Format::Json => serde_json::to_string(&records)? + "\n",
        };
        Ok(Outcome::ok(output))
    }
}

/// Print every emoji and plain span
#[derive(Parser)]
pub struct Spans {
    #[command(flatten)]
    input: Input,
}

impl Spans {
    pub fn execute(&self, settings: &Settings) -> Result<Outcome, Error> {
        let text = self.input.read()?;
        let spans: Vec<Span> = text.emoji_spans().collect();
        let records = records(&text, &spans, settings.index, true);
        let output = match settings.format {
            Format::Text => records
                .iter()
                .zip(&spans)
                .map(|(record, span)| {
                    format!(
                        "{}\t{}..{}\t{:?}\n",
                        span.tag(),
                        record.start,
                        record.end,
                        record.text,
                    )
                })
                .collect(),
            Format::Json => serde_json::to_string(&records)? + "\n",
        };
        Ok(Outcome::ok(output))
    }
}

/// Check whether the text consists of emoji only; exits with 1 if not
#[derive(Parser)]
pub struct Check {
    #[command(flatten)]
    input: Input,
}

impl Check {
    pub fn execute(&self, settings: &Settings) -> Result<Outcome, Error> {
        let text = self.input.read()?;
        let emoji_only = text.is_emoji_only();
        log::info!("emoji only: {emoji_only}");
        let output = match settings.format {
            Format::Text => format!("{emoji_only}\n"),
            Format::Json => json!({ "emoji_only": emoji_only }).to_string() + "\n",
        };
        Ok(Outcome { output, success: emoji_only })
    }
}

/// Print the text with emoji removed
#[derive(Parser)]
pub struct Strip {
    #[command(flatten)]
    input: Input,
}

impl Strip {
    pub fn execute(&self, settings: &Settings) -> Result<Outcome, Error> {
        let text = self.input.read()?;
        let stripped = text.strip_emojis();
        log::info!("removed {} bytes", text.len() - stripped.len());
        let output = match settings.format {
            Format::Text => format!("{stripped}\n"),
            Format::Json => json!({ "text": stripped }).to_string() + "\n",
        };
        Ok(Outcome::ok(output))
    }
}

/// Print the number of emoji
#[derive(Parser)]
pub struct Count {
    #[command(flatten)]
    input: Input,
}

impl Count {
    pub fn execute(&self, settings: &Settings) -> Result<Outcome, Error> {
        let text = self.input.read()?;
        let count = text.emoji_count();
        let output = match settings.format {
            Format::Text => format!("{count}\n"),
            Format::Json => json!({ "count": count }).to_string() + "\n",
        };
        Ok(Outcome::ok(output))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use super::*;

    fn run(args: &[&str]) -> Outcome {
        let args = std::iter::once("emoji-spans").chain(args.iter().copied());
        let cli = Cli::try_parse_from(args).unwrap();
        cli.subcmd.execute(&cli.settings()).unwrap()
    }

    #[test]
    fn test_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_ranges() {
        let outcome = run(&["ranges", "Hi 😀! 👍🏽"]);
        assert_eq!(outcome.output, "3..7\t😀\n9..17\t👍🏽\n");
        assert!(outcome.success);
    }

    #[test]
    fn test_ranges_utf16_json() {
        let outcome = run(&["--index", "utf16", "--format", "json", "ranges", "Hi 😀!"]);
        assert_eq!(outcome.output, "[{\"start\":3,\"end\":5,\"text\":\"😀\"}]\n");
    }

    #[test]
    fn test_ranges_none() {
        assert_eq!(run(&["ranges", "plain"]).output, "");
    }

    #[test]
    fn test_spans() {
        let outcome = run(&["--index", "char", "spans", "a 🇺🇸"]);
        assert_eq!(outcome.output, "plain\t0..2\t\"a \"\nemoji\t2..4\t\"🇺🇸\"\n");
    }

    #[test]
    fn test_spans_json() {
        let outcome = run(&["spans", "--format", "json", "x😀"]);
        assert_eq!(
            outcome.output,
            "[{\"tag\":\"plain\",\"start\":0,\"end\":1,\"text\":\"x\"},\
             {\"tag\":\"emoji\",\"start\":1,\"end\":5,\"text\":\"😀\"}]\n",
        );
    }

    #[test]
    fn test_check() {
        let outcome = run(&["check", "😀🔥"]);
        assert_eq!(outcome, Outcome { output: "true\n".to_string(), success: true });

        let outcome = run(&["check", "5"]);
        assert_eq!(outcome, Outcome { output: "false\n".to_string(), success: false });

        let outcome = run(&["--format", "json", "check", "5\u{FE0F}\u{20E3}"]);
        assert_eq!(outcome.output, "{\"emoji_only\":true}\n");
    }

    #[test]
    fn test_strip() {
        assert_eq!(run(&["strip", "A😀B🔥C"]).output, "ABC\n");
        assert_eq!(
            run(&["--format", "json", "strip", "ok 👌"]).output,
            "{\"text\":\"ok \"}\n",
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(run(&["count", "👍🏽🇺🇸 and 🇫🇷"]).output, "3\n");
    }

    #[test]
    fn test_decode_drops_one_line_break() {
        assert_eq!(decode(b"\xF0\x9F\x98\x80\n".to_vec()).unwrap(), "😀");
        assert_eq!(decode(b"a\r\n".to_vec()).unwrap(), "a");
        assert_eq!(decode(b"a\n\n".to_vec()).unwrap(), "a\n");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let error = decode(vec![b'a', 0xFF]).unwrap_err();
        assert_eq!(error.to_string(), "input is not valid UTF-8");
    }

    #[test]
    fn test_unknown_index_unit() {
        let result = Cli::try_parse_from(["emoji-spans", "--index", "words", "count", "x"]);
        assert!(result.is_err());
    }
}
