use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tonecheck::drill::DrillFile;
use tonecheck::render::Renderer;
use tonecheck::stats::{BatchStats, Timer};
use tonecheck::{AssessError, AssessmentReport, Assessor, AttemptRequest, Config, logging};
use tracing::info;

#[derive(Parser)]
#[command(name = "tonecheck", version, about = "Score Mandarin pronunciation attempts")]
struct Cli {
    /// Config file (default: $TONECHECK_CONFIG, then ./tonecheck.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score one attempt given on the command line
    Check {
        /// Romanized target phrase
        #[arg(long)]
        target: String,
        /// What the learner said, as returned by speech-to-text
        #[arg(long)]
        transcript: String,
        /// Romanized transcript (defaults to the transcript itself)
        #[arg(long)]
        romanized: Option<String>,
        /// Print the JSON report
        #[arg(long)]
        json: bool,
    },
    /// Score every drill in a TOML drill file
    Batch {
        file: PathBuf,
        /// Print a JSON array of results
        #[arg(long)]
        json: bool,
    },
    /// Score one JSON attempt request ("-" reads stdin)
    Request { file: PathBuf },
}

/// Every attempt passed
const EXIT_PASSED: u8 = 0;
/// At least one attempt was scored and failed
const EXIT_FAILED: u8 = 1;
/// Input missing, upstream failure, or bad config/files
const EXIT_REJECTED: u8 = 2;

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<'a> {
    Report(&'a AssessmentReport),
    Error { error: &'static str, message: String },
}

impl<'a> Outcome<'a> {
    fn of(result: &'a Result<AssessmentReport, AssessError>) -> Self {
        match result {
            Ok(report) => Outcome::Report(report),
            Err(e) => Outcome::Error {
                error: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

#[hotpath::main]
fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_REJECTED)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    let assessor = Assessor::new(config.thresholds);
    let renderer = Renderer::new(config.report.color, config.report.show_normalized);

    match cli.command {
        Command::Check {
            target,
            transcript,
            romanized,
            json,
        } => {
            let request = AttemptRequest {
                transcript_romanized: Some(romanized.unwrap_or_else(|| transcript.clone())),
                transcript: Some(transcript),
                target_romanized: Some(target),
                upstream_error: None,
            };
            let result = assessor.assess(&request);
            if json {
                println!("{}", serde_json::to_string_pretty(&Outcome::of(&result))?);
            } else {
                match &result {
                    Ok(report) => print!("{}", renderer.report(report)),
                    Err(e) => eprint!("{}", renderer.error(e)),
                }
            }
            Ok(exit_code(&result))
        }
        Command::Batch { file, json } => run_batch(&assessor, &renderer, &file, json),
        Command::Request { file } => {
            let text = read_input(&file)?;
            let request: AttemptRequest = serde_json::from_str(&text)
                .with_context(|| format!("parsing attempt request {}", file.display()))?;
            let result = assessor.assess(&request);
            println!("{}", serde_json::to_string_pretty(&Outcome::of(&result))?);
            Ok(exit_code(&result))
        }
    }
}

fn run_batch(assessor: &Assessor, renderer: &Renderer, file: &Path, json: bool) -> Result<u8> {
    let drills = DrillFile::load(file)?.drills;
    info!(count = drills.len(), file = %file.display(), "scoring drills");

    let mut stats = BatchStats::default();
    let mut results = Vec::with_capacity(drills.len());

    for (i, drill) in drills.iter().enumerate() {
        let timer = Timer::start();
        let result = assessor.assess(&drill.to_request());
        match &result {
            Ok(report) => timer.finish(
                &mut stats,
                report.similarity,
                report.passed,
                report.mismatches.len(),
            ),
            Err(_) => stats.rejected += 1,
        }

        if !json {
            println!("[{}/{}]", i + 1, drills.len());
            match &result {
                Ok(report) => print!("{}", renderer.report(report)),
                Err(e) => print!("{}", renderer.error(e)),
            }
            println!();
        }
        results.push(result);
    }

    if json {
        let outcomes: Vec<Outcome> = results.iter().map(Outcome::of).collect();
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print!("{}", stats.summary());
    }

    info!(
        scored = stats.scored.len(),
        passed = stats.passed(),
        rejected = stats.rejected,
        "batch finished"
    );

    Ok(if stats.rejected > 0 {
        EXIT_REJECTED
    } else if stats.all_passed() {
        EXIT_PASSED
    } else {
        EXIT_FAILED
    })
}

fn exit_code(result: &Result<AssessmentReport, AssessError>) -> u8 {
    match result {
        Ok(report) if report.passed => EXIT_PASSED,
        Ok(_) => EXIT_FAILED,
        Err(_) => EXIT_REJECTED,
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading attempt request from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
