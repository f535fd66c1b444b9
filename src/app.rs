use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::cli::args::{CliArgs, Command};
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::report::{self, ReportConfig, ReportOutcome, DEFAULT_PAGE_SIZE};
use crate::store::SnapshotStore;

const DEFAULT_DB_FILE: &str = "pagewitness.db";

fn print_banner() {
    const BANNER: &str = r#"
  _ __   __ _  __ _  _____      _(_) |_ _ __   ___  ___ ___
 | '_ \ / _` |/ _` |/ _ \ \ /\ / / | __| '_ \ / _ \/ __/ __|
 | |_) | (_| | (_| |  __/\ V  V /| | |_| | | |  __/\__ \__ \
 | .__/ \__,_|\__, |\___| \_/\_/ |_|\__|_| |_|\___||___/___/
 |_|          |___/
       v0.1.0 - capture snapshot report generator
    "#;
    print!("{}", BANNER);
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[derive(Clone, Debug)]
struct RunConfig {
    db_file: String,
    no_color: bool,
    report: ReportConfig,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);

    let db_file = args
        .db_file
        .or(cfg.db_file)
        .map(|p| config::expand_tilde_string(&p))
        .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());

    let report_dir = args
        .report_dir
        .or(cfg.report_dir)
        .map(|p| config::expand_tilde(&p))
        .unwrap_or_else(|| PathBuf::from("."));

    let Command::Generate {
        page_size,
        include_errors,
    } = args.command;

    let page_size = page_size.or(cfg.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err("invalid page-size, expected positive integer".to_string());
    }
    let include_errors = include_errors || cfg.include_errors.unwrap_or(false);

    Ok(RunConfig {
        db_file,
        no_color,
        report: ReportConfig {
            page_size,
            include_errors,
            report_dir,
        },
    })
}

pub fn run_cli() -> Result<(), String> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let cfg = match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;
    if run.no_color {
        colored::control::set_override(false);
    }

    print_banner();
    format_kv_line("Snapshot", &run.db_file);
    format_kv_line(
        "Report",
        &format!(
            "dir={} page-size={} include-errors={}",
            run.report.report_dir.display(),
            run.report.page_size,
            format_bool(run.report.include_errors),
        ),
    );
    println!();

    fs::create_dir_all(&run.report.report_dir).map_err(|e| {
        format!(
            "failed to create report directory '{}': {e}",
            run.report.report_dir.display()
        )
    })?;

    let store = SnapshotStore::open(&run.db_file);
    match report::generate(&store, &run.report) {
        Ok(ReportOutcome::Written {
            pages,
            records,
            first_page,
        }) => {
            format_kv_line("Pages", &format!("{pages} ({records} records)"));
            log::info!("report generated, open {}", first_page.display());
            Ok(())
        }
        Ok(ReportOutcome::Empty {
            candidates,
            ignored,
        }) => {
            log::error!(
                "no screenshot entries to report: {candidates} scanned, {ignored} ignored"
            );
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }
}
