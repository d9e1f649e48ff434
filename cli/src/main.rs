//! CLI entrypoint for tailor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::fs;
use std::io::IsTerminal;
use std::sync::Arc;
use tailor_application::{RunPipelineInput, RunPipelineUseCase};
use tailor_domain::{OutputFormat, compile, extract_workflow_steps};
use tailor_infrastructure::{ConfigLoader, FileConfig, InstructionLoader, RoutingGateway};
use tailor_presentation::{
    Cli, Command, ConsoleFormatter, ProgressReporter, RunArgs, SimpleProgress, StepsArgs,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tailor");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    ConsoleFormatter::configure_color(config.output.color);

    match cli.command {
        Command::Config => {
            ConfigLoader::print_config_sources(cli.config.as_deref());
            Ok(())
        }
        Command::Steps(args) => show_steps(&config, args),
        Command::Run(args) => run(&config, args, cli.quiet).await,
    }
}

fn show_steps(config: &FileConfig, args: StepsArgs) -> Result<()> {
    let instructions =
        InstructionLoader::new(config.instructions.clone()).load(args.instructions.as_deref())?;
    let bundle = compile(&instructions.content);

    println!(
        "Instructions: {} ({})",
        instructions.path.display(),
        instructions.source
    );
    let workflow = extract_workflow_steps(&instructions.content);
    if workflow.is_empty() {
        println!("Workflow section: not found");
    } else {
        println!("Workflow section: {} step(s)", workflow.len());
    }
    println!();
    print!("{}", ConsoleFormatter::format_pipeline(&bundle));

    Ok(())
}

async fn run(config: &FileConfig, args: RunArgs, quiet: bool) -> Result<()> {
    let document = fs::read_to_string(&args.document)
        .with_context(|| format!("Failed to read document {}", args.document.display()))?;

    let task = match (args.task, &args.task_file) {
        (Some(task), _) => task,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description {}", path.display()))?,
        (None, None) => bail!("A job description is required. Use --task or --task-file."),
    };
    if task.trim().is_empty() {
        bail!("The job description is empty.");
    }

    let instructions =
        InstructionLoader::new(config.instructions.clone()).load(args.instructions.as_deref())?;
    let bundle = compile(&instructions.content);
    info!(
        source = %instructions.source,
        agents = bundle.len(),
        "Compiled instructions"
    );

    let (provider_config, issues) = config.providers.to_provider_config();
    if !quiet {
        eprint!("{}", ConsoleFormatter::format_issues(&issues));
    }

    // === Dependency Injection ===
    let gateway = Arc::new(RoutingGateway::from_config(&provider_config)?);
    let use_case = RunPipelineUseCase::new(gateway);

    let mut input = RunPipelineInput::new(document, task);
    if let Some(key) = args.api_key {
        input = input.with_credential(key);
    }
    if let Some(provider) = args.provider {
        input = input.with_provider(provider);
    }
    if let Some(model) = args.model {
        input = input.with_model(model);
    }

    // Execute with or without progress reporting
    let result = if quiet {
        use_case.execute(&bundle, input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case
            .execute_with_progress(&bundle, input, &progress)
            .await
            .inspect_err(|_| progress.abandon())?
    } else {
        use_case
            .execute_with_progress(&bundle, input, &SimpleProgress)
            .await?
    };

    let format = args
        .format
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    if let Some(path) = &args.analysis_out {
        fs::write(path, &result.captured_analysis)
            .with_context(|| format!("Failed to write analysis {}", path.display()))?;
    }

    match &args.out {
        Some(path) => {
            fs::write(path, &result.final_document)
                .with_context(|| format!("Failed to write document {}", path.display()))?;
            if !quiet {
                eprintln!("Wrote {}", path.display());
            }
            // The document already went to the file
            if format != OutputFormat::Document {
                println!("{}", ConsoleFormatter::format(&result, format));
            }
        }
        None => println!("{}", ConsoleFormatter::format(&result, format)),
    }

    Ok(())
}
