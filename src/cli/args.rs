use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pagewitness",
    version,
    about = "static HTML report generator for website capture snapshots",
    long_about = "Pagewitness turns a snapshot of captured website probes into a paginated, offline-browsable HTML report.\n\nExamples:\n  pagewitness generate\n  pagewitness -D captures.db generate -p 25\n  pagewitness -D captures.db -d ./report generate --include-errors\n\nTip: Use --config to persist snapshot and report settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'D',
        long = "db",
        visible_alias = "db-file",
        value_name = "FILE",
        help_heading = "Input",
        help = "Capture snapshot file to read records from (defaults to pagewitness.db)."
    )]
    pub db_file: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.pagewitness/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'd',
        long = "rd",
        visible_alias = "report-dir",
        value_name = "DIR",
        help_heading = "Output",
        help = "Directory the report pages are written to (defaults to the current directory)."
    )]
    pub report_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate an HTML report from a capture snapshot
    Generate {
        #[arg(
            short = 'p',
            long = "page-size",
            value_name = "N",
            help = "Results per page."
        )]
        page_size: Option<usize>,

        #[arg(
            short = 'i',
            long = "include-errors",
            help = "Include non-2xx responses in the report."
        )]
        include_errors: bool,
    },
}
