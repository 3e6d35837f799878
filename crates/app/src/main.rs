use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::DatasetService;
use storage::builder::{BuildConfig, RawCase, build_dataset, collect_cases};
use storage::{DataLocation, Storage};
use tracing::{info, warn};
use ui::{App, UiApp, build_app_context};

mod logger;

const DEFAULT_DATA: &str = "data/isic_quiz_sets.json";
const DEFAULT_TITLE: &str = "Dermoscopy Quiz";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingFlag { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidData { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingFlag { flag } => write!(f, "{flag} is required"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a positive integer)")
            }
            ArgsError::InvalidData { raw } => write!(f, "invalid --data value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_count(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<usize, ArgsError> {
    let value = require_value(args, flag)?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgsError::InvalidNumber { flag, raw: value }),
    }
}

struct DesktopApp {
    title: String,
    dataset_service: Arc<DatasetService>,
}

impl UiApp for DesktopApp {
    fn app_title(&self) -> String {
        self.title.clone()
    }

    fn dataset_service(&self) -> Arc<DatasetService> {
        Arc::clone(&self.dataset_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--data <path|url>] [--title <text>] [--verbose]");
    eprintln!("  cargo run -p app -- build --input <cases.json> --output <quiz.json>");
    eprintln!("                            [--sets <n>] [--per-class <n>]");
    eprintln!("                            [--fallback-per-class <n>] [--target <n>] [--verbose]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --data {DEFAULT_DATA}");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!();
    eprintln!("Defaults for build:");
    eprintln!("  --sets 3 --per-class 5 --fallback-per-class 3 --target 15");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DERM_QUIZ_DATA, DERM_QUIZ_TITLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Build,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "build" => Some(Self::Build),
            _ => None,
        }
    }
}

struct UiArgs {
    data: DataLocation,
    title: String,
    verbose: bool,
}

impl UiArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut data = std::env::var("DERM_QUIZ_DATA").unwrap_or_else(|_| DEFAULT_DATA.into());
        let mut title = std::env::var("DERM_QUIZ_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.into());
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => data = require_value(args, "--data")?,
                "--title" => title = require_value(args, "--title")?,
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if data.trim().is_empty() {
            return Err(ArgsError::InvalidData { raw: data });
        }

        Ok(Self {
            data: DataLocation::parse(&data),
            title,
            verbose,
        })
    }
}

struct BuildArgs {
    input: PathBuf,
    output: PathBuf,
    config: BuildConfig,
    verbose: bool,
}

impl BuildArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut input = None;
        let mut output = None;
        let mut config = BuildConfig::default();
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" => input = Some(PathBuf::from(require_value(args, "--input")?)),
                "--output" => output = Some(PathBuf::from(require_value(args, "--output")?)),
                "--sets" => config.sets = require_count(args, "--sets")?,
                "--per-class" => config.preferred_per_class = require_count(args, "--per-class")?,
                "--fallback-per-class" => {
                    config.fallback_per_class = require_count(args, "--fallback-per-class")?;
                }
                "--target" => config.target_per_label = require_count(args, "--target")?,
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            input: input.ok_or(ArgsError::MissingFlag { flag: "--input" })?,
            output: output.ok_or(ArgsError::MissingFlag { flag: "--output" })?,
            config,
            verbose,
        })
    }
}

fn run_ui(args: UiArgs) {
    let storage = Storage::from_location(&args.data);
    info!(source = %storage.dataset.describe(), "launching quiz");
    let dataset_service = Arc::new(DatasetService::new(Arc::clone(&storage.dataset)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title.clone(),
        dataset_service,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window on macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run_build(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = tokio::fs::read(&args.input).await?;
    let cases: Vec<RawCase> = serde_json::from_slice(&raw)?;
    info!(input = %args.input.display(), cases = cases.len(), "building quiz sets");

    let buckets = collect_cases(cases, args.config.target_per_label);
    if !buckets.is_complete() {
        warn!(
            target = args.config.target_per_label,
            "some diagnoses are below the per-label target"
        );
    }
    let dataset = build_dataset(&buckets, &args.config);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let document = serde_json::to_vec_pretty(&dataset)?;
    tokio::fs::write(&args.output, document).await?;
    info!(
        output = %args.output.display(),
        questions = dataset.question_count(),
        "quiz sets written"
    );
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the quiz.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let report = |e: ArgsError| {
        eprintln!("{e}");
        print_usage();
        e
    };

    match cmd {
        Command::Ui => {
            let args = UiArgs::parse(&mut iter).map_err(report)?;
            logger::init_logger(args.verbose);
            run_ui(args);
            Ok(())
        }
        Command::Build => {
            let args = BuildArgs::parse(&mut iter).map_err(report)?;
            logger::init_logger(args.verbose);
            run_build(args).await
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
