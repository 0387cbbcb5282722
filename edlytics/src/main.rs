//! # edlytics
//!
//! A CLI for exploring the online-learning engagement survey.
//!
//! ## Overview
//!
//! edlytics is built on top of edlyticslib and puts the dashboard's views on
//! the terminal: the filtered survey, the sortable platform table, the drop-off
//! heatmap, chart data per tab, and the CSV/JSON exports.
//!
//! ## Usage
//!
//! ```bash
//! # Filtered survey view
//! edlytics --platform Coursera --search course
//!
//! # Platform table, sorted by users then flipped
//! edlytics table --sort users --sort users
//!
//! # Chart data for one tab, as JSON
//! edlytics charts --tab research --output json
//!
//! # Export the current view
//! edlytics export csv --dir ./exports --platform Udemy
//! ```

mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use chrono::Local;
use clap::{Arg, ArgAction, ArgMatches, Command};
use edlyticslib::output::ChartData;
use edlyticslib::{Dataset, DirectorySink, ExportFormat, Session, SortColumn, Tab};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use render::Summary;

/// Output format for every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Table,
    Json,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn filter_args() -> [Arg; 4] {
    [
        Arg::new("age")
            .long("age")
            .global(true)
            .help("Age group (e.g. 18-24)"),
        Arg::new("occupation")
            .long("occupation")
            .global(true)
            .help("Occupation (e.g. Student)"),
        Arg::new("platform")
            .short('p')
            .long("platform")
            .global(true)
            .help("Platform name, exact match"),
        Arg::new("search")
            .short('s')
            .long("search")
            .global(true)
            .help("Case-insensitive text search over reasons and features"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("edlytics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Online learning engagement analytics: filter, sort and export survey data")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Load datasets from a JSON file instead of the built-in data"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .default_value("table")
                .value_parser(["table", "json"])
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .args(filter_args())
        .subcommand(Command::new("view").about("Show the filtered survey view (default command)"))
        .subcommand(
            Command::new("table")
                .about("Show the platform performance table")
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .action(ArgAction::Append)
                        .help("Click a column header (platform, users, market-share, engagement); repeat to toggle"),
                ),
        )
        .subcommand(Command::new("heatmap").about("Show the drop-off heatmap"))
        .subcommand(
            Command::new("charts")
                .about("Show chart data")
                .arg(
                    Arg::new("tab")
                        .short('t')
                        .long("tab")
                        .help("Dashboard tab (overview, behavior, platforms, research, community)"),
                ),
        )
        .subcommand(Command::new("summary").about("Show headline figures"))
        .subcommand(Command::new("community").about("List community discussions and articles"))
        .subcommand(
            Command::new("export")
                .about("Export the current view to a file")
                .arg(
                    Arg::new("format")
                        .required(true)
                        .value_parser(["csv", "json"])
                        .help("Export format"),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Directory to write the export into"),
                ),
        )
}

fn output_mode(matches: &ArgMatches) -> OutputMode {
    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => OutputMode::Json,
        _ => OutputMode::Table,
    }
}

fn load_dataset(matches: &ArgMatches) -> anyhow::Result<Dataset> {
    match matches.get_one::<PathBuf>("data") {
        Some(path) => Ok(Dataset::from_json_file(path)?),
        None => Ok(Dataset::builtin()),
    }
}

/// Build a session with the filter flags applied.
fn build_session(matches: &ArgMatches) -> anyhow::Result<Session> {
    let mut session = Session::new(load_dataset(matches)?);

    if let Some(age) = matches.get_one::<String>("age") {
        session.set_age(age)?;
    }
    if let Some(occupation) = matches.get_one::<String>("occupation") {
        session.set_occupation(occupation)?;
    }
    if let Some(platform) = matches.get_one::<String>("platform") {
        session.set_platform(platform);
    }
    if let Some(search) = matches.get_one::<String>("search") {
        // One-shot invocation: there is no further input to wait for
        session.input_search(search, Instant::now());
        session.flush_search();
    }

    Ok(session)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

#[derive(Serialize)]
struct ViewOutput<'a> {
    applied_filters: &'a edlyticslib::FilterState,
    filtered_survey_data: &'a edlyticslib::FilteredView,
}

fn view_handler(session: &Session, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Json => to_json(&ViewOutput {
            applied_filters: session.filters(),
            filtered_survey_data: session.view(),
        }),
        OutputMode::Table => Ok(render::render_view(session.view(), session.filters())),
    }
}

fn table_handler(
    matches: &ArgMatches,
    session: &mut Session,
    mode: OutputMode,
) -> anyhow::Result<String> {
    if let Some(clicks) = matches.get_many::<String>("sort") {
        for name in clicks {
            let column = SortColumn::from_str(name)?;
            session.click_sort_header(column);
        }
    }

    match mode {
        OutputMode::Json => to_json(session.table()),
        OutputMode::Table => Ok(render::render_table(session.table(), session.sort())),
    }
}

fn charts_handler(
    matches: &ArgMatches,
    session: &mut Session,
    mode: OutputMode,
) -> anyhow::Result<String> {
    let charts: Vec<&ChartData> = match matches.get_one::<String>("tab") {
        Some(name) => {
            let tab = Tab::from_str(name)?;
            session.select_tab(tab);
            tab.chart_ids()
                .iter()
                .filter_map(|id| session.charts().get(id))
                .collect()
        }
        None => session.charts().charts().iter().collect(),
    };

    match mode {
        OutputMode::Json => to_json(&charts),
        OutputMode::Table => Ok(render::render_charts(&charts)),
    }
}

fn export_handler(matches: &ArgMatches, session: &Session) -> anyhow::Result<String> {
    let format = matches
        .get_one::<String>("format")
        .map(|s| ExportFormat::from_str(s))
        .transpose()?
        .context("missing export format")?;
    let dir = matches
        .get_one::<PathBuf>("dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut sink = DirectorySink::new(&dir);
    let path = session
        .deliver(format, &Local::now(), &mut sink)
        .with_context(|| format!("could not export to {}", dir.display()))?;

    Ok(format!("Exported {}\n", path.display()))
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let mode = output_mode(matches);
    let mut session = build_session(matches)?;
    tracing::debug!(
        command = matches.subcommand_name().unwrap_or("view"),
        filters_active = session.filters().is_active(),
        "dispatching"
    );

    match matches.subcommand() {
        None | Some(("view", _)) => view_handler(&session, mode),
        Some(("table", sub)) => table_handler(sub, &mut session, mode),
        Some(("heatmap", _)) => match mode {
            OutputMode::Json => to_json(&session.data().heatmap.cells()),
            OutputMode::Table => Ok(render::render_heatmap(&session.data().heatmap)),
        },
        Some(("charts", sub)) => charts_handler(sub, &mut session, mode),
        Some(("summary", _)) => {
            let summary = Summary::from_dataset(session.data());
            match mode {
                OutputMode::Json => to_json(&summary),
                OutputMode::Table => Ok(render::render_summary(&summary)),
            }
        }
        Some(("community", _)) => match mode {
            OutputMode::Json => to_json(&session.data().community),
            OutputMode::Table => Ok(render::render_community(&session.data().community)),
        },
        Some(("export", sub)) => export_handler(sub, &session),
        Some((other, _)) => Err(anyhow::anyhow!("unknown command: {other}")),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["edlytics"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_filter_flags_after_subcommand() {
        let m = matches(&["table", "--platform", "Udemy", "--output", "json"]);
        let session = build_session(&m).unwrap();
        assert_eq!(session.filters().platform.as_deref(), Some("Udemy"));
        assert_eq!(output_mode(&m), OutputMode::Json);
    }

    #[test]
    fn test_search_flag_is_applied() {
        let m = matches(&["--search", "  Lack "]);
        let session = build_session(&m).unwrap();
        assert_eq!(session.filters().search.as_deref(), Some("lack"));
        assert!(!session.has_pending_search());
    }

    #[test]
    fn test_unknown_age_is_an_error() {
        let m = matches(&["--age", "90+"]);
        assert!(build_session(&m).is_err());
    }

    #[test]
    fn test_repeated_sort_toggles() {
        let m = matches(&["table", "--sort", "users", "--sort", "users"]);
        let (_, sub) = m.subcommand().unwrap();
        let mut session = build_session(&m).unwrap();
        table_handler(sub, &mut session, OutputMode::Table).unwrap();
        assert_eq!(session.table()[0].platform, "YouTube");
    }
}
