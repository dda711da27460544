//! javacc-build CLI - JavaCC, JJTree and JJDoc grammar compilation
//!
//! Usage: javacc-build [OPTIONS] <COMMAND>
//!
//! Commands:
//!   javacc  Compile JavaCC grammars into Java sources
//!   jjtree  Compile JJTree grammars into JavaCC grammars
//!   jjdoc   Generate HTML documentation for JavaCC grammars
//!   all     Run jjtree, javacc and jjdoc in that order
//!   tasks   List the tasks and their effective settings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use javacc_build::config::{self, Config, Verbosity};
use javacc_build::presentation::{
    create_compile_use_case, print_config_warnings, render_error_json, render_tasks,
};
use javacc_build::{CompileOptions, GrammarFamily};

/// javacc-build - run JavaCC grammar compilers over a source tree
#[derive(Parser, Debug)]
#[command(name = "javacc-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root; relative paths are resolved against it
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Config file to use instead of <project>/javacc.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output NDJSON events on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report failures
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile JavaCC grammars (*.jj) into Java sources
    Javacc(TaskArgs),

    /// Compile JJTree grammars (*.jjt) into JavaCC grammars
    Jjtree(TaskArgs),

    /// Generate HTML documentation for JavaCC grammars
    Jjdoc(TaskArgs),

    /// Run jjtree, javacc and jjdoc in that order
    All,

    /// List the tasks and their effective settings
    Tasks,
}

/// Per-run overrides of the configured task settings
#[derive(Args, Debug, Default, Clone)]
struct TaskArgs {
    /// Directory searched for grammar files
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory receiving generated and copied files
    #[arg(long)]
    output: Option<PathBuf>,

    /// Scratch directory for compiler output
    #[arg(long)]
    temp: Option<PathBuf>,

    /// File-name suffix that marks a grammar file
    #[arg(long)]
    suffix: Option<String>,

    /// Archive containing the compiler (repeatable, replaces the configured classpath)
    #[arg(long = "classpath", value_name = "PATH")]
    classpath: Vec<PathBuf>,

    /// Compiler option passed as -NAME=VALUE (repeatable)
    #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_argument)]
    arguments: Vec<(String, String)>,

    /// Hand-written source root whose classes win over generated ones (repeatable)
    #[arg(long = "custom-source", value_name = "DIR")]
    custom_sources: Vec<PathBuf>,
}

fn parse_argument(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Javacc(args) => cmd_task(GrammarFamily::JavaCC, args, &config, &cli),
        Commands::Jjtree(args) => cmd_task(GrammarFamily::JJTree, args, &config, &cli),
        Commands::Jjdoc(args) => cmd_task(GrammarFamily::JJDoc, args, &config, &cli),
        Commands::All => cmd_all(&config, &cli),
        Commands::Tasks => cmd_tasks(&config, &cli),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let explicit = cli.config.as_ref().map(|p| cli.project.join(p));
    let project_config = config::project_config_path(&cli.project);

    let loaded = match explicit {
        Some(path) => Some(read_config(&path, cli.json)?),
        None if project_config.exists() => Some(read_config(&project_config, cli.json)?),
        None => None,
    };

    let mut config = match loaded {
        Some(config) => config::with_env_overrides(config),
        // Project file is absent; user config or defaults
        None => Config::load_or_default(None),
    };

    config.output.verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        config.output.verbosity.raised_by(cli.verbose)
    };
    Ok(config)
}

fn read_config(path: &Path, json: bool) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    if !json {
        print_config_warnings(path, &warnings);
    }
    Ok(config)
}

fn task_options(
    family: GrammarFamily,
    args: &TaskArgs,
    config: &Config,
    project: &Path,
) -> CompileOptions {
    let mut options = CompileOptions::from_config(family, config, project);

    if let Some(input) = &args.input {
        options = options.with_input_dir(project.join(input));
    }
    if let Some(output) = &args.output {
        options = options.with_output_dir(project.join(output));
    }
    if let Some(temp) = &args.temp {
        options = options.with_temp_dir(project.join(temp));
    }
    if let Some(suffix) = &args.suffix {
        options = options.with_suffix(suffix.clone());
    }
    if !args.classpath.is_empty() {
        options = options.with_classpath(args.classpath.iter().map(|p| project.join(p)).collect());
    }
    for (name, value) in &args.arguments {
        options = options.with_argument(name.clone(), value.clone());
    }
    for root in &args.custom_sources {
        options = options.with_custom_source(project.join(root));
    }

    options
}

fn cmd_task(family: GrammarFamily, args: &TaskArgs, config: &Config, cli: &Cli) -> Result<()> {
    let options = task_options(family, args, config, &cli.project);
    let use_case = create_compile_use_case(config, cli.json);

    match use_case.execute(&options) {
        Ok(_) => Ok(()),
        Err(e) => {
            if cli.json {
                println!("{}", render_error_json(family, &e));
            }
            Err(anyhow::Error::new(e).context(format!("{} failed", family.task_name())))
        }
    }
}

fn cmd_all(config: &Config, cli: &Cli) -> Result<()> {
    let args = TaskArgs::default();
    for family in GrammarFamily::ALL {
        cmd_task(family, &args, config, cli)?;
    }
    Ok(())
}

fn cmd_tasks(config: &Config, cli: &Cli) -> Result<()> {
    if cli.json {
        for family in GrammarFamily::ALL {
            let options = CompileOptions::from_config(family, config, &cli.project);
            let output = serde_json::json!({
                "event": "task",
                "name": family.task_name(),
                "description": family.description(),
                "main_class": family.main_class(),
                "input": options.input_dir.display().to_string(),
                "output": options.output_dir.display().to_string(),
                "temp": options.temp_dir.display().to_string(),
                "suffix": options.suffix,
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        print!("{}", render_tasks(config, &cli.project));
    }
    Ok(())
}
