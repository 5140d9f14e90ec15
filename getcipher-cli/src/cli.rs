use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use getcipher_core::batch::{cipher_lines, split_lines};
use getcipher_core::{AlgorithmDescriptor, ParameterSet, Registry};
use rand_core::OsRng;
use tracing_subscriber::EnvFilter;

use crate::options::OptionParser;

#[derive(Parser, Debug)]
#[command(
    name = "getcipher",
    about = "Turn a password list into hashcat-compatible ciphertexts, one per line."
)]
pub struct Args {
    /// Algorithm name (`phpass`, or its alias `wordpress`).
    pub algorithm: String,

    /// Plaintext passwords, one per line.
    #[arg(required_unless_present = "list_options")]
    pub password_file: Option<PathBuf>,

    /// Output file, one ciphertext per successfully processed password.
    #[arg(required_unless_present = "list_options")]
    pub cipher_file: Option<PathBuf>,

    /// Parameter overrides as `name=value`.
    ///
    /// Known names: `salt_len=<bits>`, `iter_pos=<char>`,
    /// `salt_charset=[a-b][c-d]...`.
    #[arg(value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Print the algorithm's parameters (after overrides) and exit.
    #[arg(long)]
    pub list_options: bool,

    /// Log at debug level (overrides `RUST_LOG`).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Counts for one processed password file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub failed: usize,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run_with_args(args)
}

pub fn run_with_args(args: Args) -> Result<()> {
    let mut descriptor = Registry::with_defaults()
        .create(&args.algorithm)
        .with_context(|| format!("select algorithm '{}'", args.algorithm))?;

    let overrides = OptionParser::new()?.parse(&args.options)?;
    descriptor
        .configure(&overrides)
        .with_context(|| format!("configure {}", descriptor.name()))?;

    if args.list_options {
        print!("{}", describe_parameters(descriptor.name(), descriptor.params()));
        return Ok(());
    }

    let (Some(input), Some(output)) = (&args.password_file, &args.cipher_file) else {
        anyhow::bail!("PASSWORD_FILE and CIPHER_FILE are required");
    };

    let summary = cipher_file(&descriptor, input, output)?;
    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} passwords failed",
            summary.failed,
            summary.written + summary.failed
        );
    }
    Ok(())
}

/// Cipher every line of `input` into `output`.
///
/// Failed lines, including ones that are not UTF-8, are logged and
/// skipped; they do not abort the file.
pub fn cipher_file(
    descriptor: &AlgorithmDescriptor,
    input: &Path,
    output: &Path,
) -> Result<Summary> {
    let passwords = fs::read(input)
        .with_context(|| format!("read password file {}", input.display()))?;
    let file = File::create(output)
        .with_context(|| format!("create cipher file {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let mut summary = Summary {
        written: 0,
        failed: 0,
    };
    for outcome in cipher_lines(descriptor, split_lines(&passwords), &mut OsRng) {
        match outcome.result {
            Ok(cipher) => {
                writeln!(writer, "{cipher}")
                    .with_context(|| format!("write cipher file {}", output.display()))?;
                summary.written += 1;
            }
            Err(err) => {
                tracing::error!(line = outcome.line, code = err.code(), "{err}");
                summary.failed += 1;
            }
        }
    }
    writer
        .flush()
        .with_context(|| format!("write cipher file {}", output.display()))?;

    tracing::info!(
        written = summary.written,
        failed = summary.failed,
        output = %output.display(),
        "cipher file complete"
    );
    Ok(summary)
}

/// Human-readable schema of the active parameter slots.
pub fn describe_parameters(algorithm: &str, params: &ParameterSet) -> String {
    let mut out = format!("{algorithm} parameters:\n");
    for (index, slot) in params.active() {
        let kind = slot.kind().map_or("-", |k| k.as_str());
        let current = slot
            .current
            .as_ref()
            .map_or_else(String::new, ToString::to_string);
        let _ = write!(out, "  [{index}] {:<14}{kind:<9}current {current}", slot.name);
        if slot.options.len() > 1 {
            let options: Vec<_> = slot.options.iter().map(ToString::to_string).collect();
            let _ = write!(out, "  options {}", options.join(", "));
        }
        if let (Some(min), Some(max)) = (slot.min, slot.max) {
            let _ = write!(out, "  bounds {min}..={max}");
        }
        out.push('\n');
    }
    out
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
