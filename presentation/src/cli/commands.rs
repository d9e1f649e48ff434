//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tailor_domain::{OutputFormat, ProviderKind};

/// What `tailor run` prints on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Only the final document
    Document,
    /// Only the captured JD analysis
    Analysis,
    /// Analysis and document with headings
    Full,
    /// Both as a JSON object
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Document => OutputFormat::Document,
            FormatArg::Analysis => OutputFormat::Analysis,
            FormatArg::Full => OutputFormat::Full,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for tailor
#[derive(Parser, Debug)]
#[command(name = "tailor")]
#[command(author, version, about = "Tailor a LaTeX document to a job description with a pipeline of LLM agents")]
#[command(long_about = r#"
Tailor compiles an instruction document into an ordered pipeline of agents
and runs them one after another over a LaTeX document.

Each agent sees the job description, the current document and the outputs of
the agents before it. JSON agents produce analysis; LaTeX agents rewrite the
document.

Configuration files are loaded from (in priority order):
1. TAILOR_* environment variables
2. --config <path>     Explicit config file
3. ./tailor.toml       Project-level config
4. ~/.config/tailor/config.toml   Global config

Example:
  tailor run -d resume.tex -t "Senior Rust engineer, distributed storage" -o tailored.tex
  tailor run -d resume.tex --task-file jd.txt --provider gemini --format full
  tailor steps -i instructions.md
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the pipeline over a document
    Run(RunArgs),
    /// Show the pipeline compiled from an instruction document
    Steps(StepsArgs),
    /// Show configuration file locations
    Config,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// LaTeX document to tailor
    #[arg(short, long, value_name = "PATH")]
    pub document: PathBuf,

    /// Job description text
    #[arg(
        short,
        long,
        value_name = "TEXT",
        conflicts_with = "task_file",
        required_unless_present = "task_file"
    )]
    pub task: Option<String>,

    /// Read the job description from a file
    #[arg(long, value_name = "PATH")]
    pub task_file: Option<PathBuf>,

    /// Instruction document (overrides the configured lookup)
    #[arg(short, long, value_name = "PATH")]
    pub instructions: Option<PathBuf>,

    /// Completion back end for this run (openai, gemini)
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<ProviderKind>,

    /// Model for this run
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// API key for this run
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Write the final document here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Also write the captured analysis here
    #[arg(long, value_name = "PATH")]
    pub analysis_out: Option<PathBuf>,

    /// Output format (default from config, else document)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Args, Debug)]
pub struct StepsArgs {
    /// Instruction document (overrides the configured lookup)
    #[arg(short, long, value_name = "PATH")]
    pub instructions: Option<PathBuf>,
}
