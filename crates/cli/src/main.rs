//! LearnTrack CLI - learning activity tracker.

mod render;
mod shell;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use learntrack_core::{ActivityFilter, ActivityId, ActivityType, ThemeMode};
use learntrack_session::{Tracker, TrackerConfig};
use learntrack_storage::{ActivityStore, StoreError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "learntrack")]
#[command(about = "Track online classes, assignments, quizzes and discussions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Starting theme (light or dark)
    #[arg(long, global = true)]
    theme: Option<ThemeMode>,

    /// How long notifications stay visible, in milliseconds
    #[arg(long, global = true)]
    notification_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List activities
    List {
        /// Filter by type, or "all"
        #[arg(long, default_value = "all")]
        filter: ActivityFilter,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create an activity and show the resulting list
    Create {
        /// Activity title
        title: String,
        /// Activity type
        #[arg(long = "type")]
        activity_type: Option<ActivityType>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show activity details
    Show {
        /// Activity ID
        id: String,
    },
    /// Start an interactive session
    Shell,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Listings go to stdout; keep logs on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> TrackerConfig {
    let mut config = TrackerConfig::default();
    if let Some(theme) = cli.theme {
        config.initial_theme = theme;
    }
    if let Some(ms) = cli.notification_ms {
        config.notification_ttl = Duration::from_millis(ms);
    }
    config
}

/// What a one-shot command prints, and whether it succeeded.
#[derive(Debug, Default, PartialEq, Eq)]
struct Output {
    stdout: String,
    stderr: String,
    failed: bool,
}

impl Output {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            ..Default::default()
        }
    }

    fn emit(self) -> ExitCode {
        print!("{}", self.stdout);
        eprint!("{}", self.stderr);
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Create an activity and render the result.
///
/// A rejected title is reported through the notification it posted, with
/// the unchanged listing, rather than as an error.
fn create_activity<S: ActivityStore>(
    tracker: &mut Tracker<S>,
    title: &str,
    activity_type: ActivityType,
    json: bool,
) -> Result<Output> {
    match tracker.create(title, activity_type) {
        Ok(record) if json => Ok(Output::ok(serde_json::to_string_pretty(&record)? + "\n")),
        Ok(_) => {
            let mut stdout = tracker
                .view()
                .notification()
                .map(|text| format!("{}\n", text))
                .unwrap_or_default();
            stdout.push_str(&render::listing(ActivityFilter::All, &tracker.visible()));
            Ok(Output::ok(stdout))
        }
        Err(StoreError::Validation(e)) => {
            let notice = tracker
                .view()
                .notification()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string());
            Ok(Output {
                stdout: render::listing(ActivityFilter::All, &tracker.visible()),
                stderr: format!("{}\n", notice),
                failed: true,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Render details for one activity.
fn show_activity<S: ActivityStore>(tracker: &mut Tracker<S>, id: ActivityId) -> Output {
    if !tracker.open_details(&id) {
        return Output {
            stderr: format!("Activity not found: {}\n", id),
            failed: true,
            ..Default::default()
        };
    }
    Output::ok(tracker.selected().map(render::details).unwrap_or_default())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli);
    let mut tracker = Tracker::seeded().with_config(config);

    let output = match cli.command {
        Commands::List { filter, json } => {
            tracker.select_filter(filter);
            let records = tracker.visible();
            if json {
                Output::ok(serde_json::to_string_pretty(&records)? + "\n")
            } else {
                Output::ok(render::listing(filter, &records))
            }
        }
        Commands::Create { title, activity_type, json } => {
            let activity_type = activity_type.unwrap_or(tracker.config().default_create_type);
            create_activity(&mut tracker, &title, activity_type, json)?
        }
        Commands::Show { id } => show_activity(&mut tracker, ActivityId::new(id)),
        Commands::Shell => {
            info!("Starting LearnTrack shell");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            shell::run(&mut tracker, stdin, &mut stdout).await?;
            Output::default()
        }
    };

    Ok(output.emit())
}
