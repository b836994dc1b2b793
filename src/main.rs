use clap::{ArgAction, Parser, Subcommand};
use luhn_lab::application::inspector;
use luhn_lab::application::synthesizer::Synthesizer;
use luhn_lab::config::{IssuerPreset, OutputFormat, Settings};
use luhn_lab::domain::ports::DigitSourceBox;
use luhn_lab::infrastructure::random::RngDigits;
use luhn_lab::interfaces::csv::inspection_writer::InspectionWriter;
use luhn_lab::interfaces::csv::number_reader::NumberReader;
use luhn_lab::interfaces::csv::record_writer::RecordWriter;
use luhn_lab::interfaces::json::JsonRecordWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML file with generator defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check numbers given on the command line
    Validate {
        /// Numbers to check; spaces and dashes are ignored
        #[arg(required = true)]
        numbers: Vec<String>,
    },
    /// Check every number in a CSV file with a `number` column
    Verify {
        /// Input CSV file
        input: PathBuf,
    },
    /// Compute the check digit for a payload
    CheckDigit {
        /// Digits preceding the check digit
        payload: String,
    },
    /// Generate Luhn-compliant numbers from an issuer prefix
    Generate {
        /// Issuer preset supplying the leading digits
        #[arg(long, value_enum)]
        preset: Option<IssuerPreset>,

        /// Literal leading digits; takes precedence over the preset
        #[arg(long)]
        prefix: Option<String>,

        /// Total length including the check digit
        #[arg(long)]
        length: Option<usize>,

        /// How many numbers to generate
        #[arg(long)]
        count: Option<usize>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(verbose = cli.verbose, "luhn-lab started");

    match cli.command {
        Command::Validate { numbers } => {
            let stdout = io::stdout();
            let mut writer = InspectionWriter::new(stdout.lock());
            writer
                .write_all(numbers.iter().map(|n| inspector::inspect(n)))
                .into_diagnostic()?;
        }
        Command::Verify { input } => {
            let file = File::open(&input).into_diagnostic()?;
            info!(path = %input.display(), "verifying numbers file");

            let stdout = io::stdout();
            let mut writer = InspectionWriter::new(stdout.lock());
            let (mut checked, mut passed) = (0usize, 0usize);
            for record in NumberReader::new(file).numbers() {
                match record {
                    Ok(record) => {
                        let inspection = inspector::inspect(&record.number);
                        checked += 1;
                        if inspection.is_valid() {
                            passed += 1;
                        }
                        writer.write(&inspection).into_diagnostic()?;
                    }
                    Err(e) => {
                        warn!(error = %e, "skipping unreadable record");
                        eprintln!("Error reading record: {}", e);
                    }
                }
            }
            writer.flush().into_diagnostic()?;
            info!(checked, passed, "verification finished");
        }
        Command::CheckDigit { payload } => {
            let (check, complete) = inspector::complete(&payload).into_diagnostic()?;
            println!("check digit: {check}");
            println!("complete: {complete}");
        }
        Command::Generate {
            preset,
            prefix,
            length,
            count,
            format,
            seed,
        } => {
            let mut settings = Settings::load(cli.config.as_deref()).into_diagnostic()?;
            if let Some(preset) = preset {
                settings.preset = preset;
                settings.prefix = None;
            }
            if let Some(prefix) = prefix {
                settings.prefix = Some(prefix);
            }
            if let Some(length) = length {
                settings.length = length;
            }
            if let Some(count) = count {
                settings.count = count;
            }
            if let Some(format) = format {
                settings.format = format;
            }
            settings.validate().into_diagnostic()?;
            debug!(
                prefix = settings.effective_prefix(),
                preset = ?settings.preset,
                "resolved generator settings"
            );

            let source: DigitSourceBox = match seed {
                Some(seed) => Box::new(RngDigits::seeded(seed)),
                None => Box::new(RngDigits::thread_local()),
            };
            let mut synthesizer = Synthesizer::with_source(source);
            let records = synthesizer
                .batch(settings.effective_prefix(), settings.length, settings.count)
                .into_diagnostic()?;

            let stdout = io::stdout();
            match settings.format {
                OutputFormat::Csv => RecordWriter::new(stdout.lock())
                    .write_records(&records)
                    .into_diagnostic()?,
                OutputFormat::Json => JsonRecordWriter::new(stdout.lock())
                    .write_records(&records)
                    .into_diagnostic()?,
            }
        }
    }

    Ok(())
}
