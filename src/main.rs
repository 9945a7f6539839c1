//! ct CLI entrypoint
//! Parses command-line arguments and dispatches to the template use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use comtemplate::{
    application::{
        ApplicationError, ApplyTemplateUseCase, CheckTemplatesUseCase, InitTemplatesUseCase,
        ListTemplatesUseCase, PresetCollector, TemplateInfoUseCase,
    },
    core::Error,
    infrastructure::{FileSystemStore, LinePrompter},
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ct")]
#[command(author, version, about = "Create and use reusable commit message templates", long_about = LONG_ABOUT)]
struct Cli {
    /// Directory containing comtemplate.yml or comtemplate.yaml
    #[arg(long, global = true, env = "COMTEMPLATE_DIR", default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

const LONG_ABOUT: &str = "\
Create and use reusable commit message templates.

1. Initialize a default template file: 'ct init'
   Creates comtemplate.yml in the current directory. Edit it to add your own templates.

2. List available templates: 'ct list'

3. Use a template: 'ct <template-name>'
   Asks for each template variable, then prints the filled message.";

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create a default comtemplate.yml
    Init,
    /// List all valid templates
    List,
    /// Show a template's variables and text
    Info {
        /// Name of the template
        name: String,
    },
    /// Validate the template file and report every problem
    Check,
    /// Fill a template and print the result
    Use {
        /// Name of the template
        name: String,
        /// Preset a variable value instead of being asked for it
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
    /// Shorthand for 'ct use <template-name>'
    #[command(external_subcommand)]
    Template(Vec<String>),
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if is_missing_source(&e) {
                eprintln!("\nRun 'ct init' to create a default comtemplate.yml");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let store = FileSystemStore::new(&cli.dir);
    info!(dir = %store.root().display(), "Starting ct");

    match cli.command {
        Commands::Init => {
            let name = InitTemplatesUseCase::new(&store).execute()?;
            println!("Created {}", store.path_for(name).display());
        }
        Commands::List => {
            println!("{}", ListTemplatesUseCase::new(&store).execute()?);
        }
        Commands::Info { name } => {
            println!("{}", TemplateInfoUseCase::new(&store).execute(&name)?);
        }
        Commands::Check => {
            let report = CheckTemplatesUseCase::new(&store).execute()?;
            print!("{}", report.output);
            if !report.ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Use { name, set } => apply_template(&store, &name, &set)?,
        Commands::Template(args) => {
            let Some((name, rest)) = args.split_first() else {
                anyhow::bail!("No template name given");
            };
            if !rest.is_empty() {
                anyhow::bail!(
                    "Unexpected arguments after template name: {} (use 'ct use {name} --set NAME=VALUE')",
                    rest.join(" ")
                );
            }
            apply_template(&store, name, &[])?
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn apply_template(store: &FileSystemStore, name: &str, presets: &[String]) -> anyhow::Result<()> {
    let mut collector = PresetCollector::from_assignments(presets, LinePrompter::stdio())
        .context("Invalid --set value")?;

    let text = ApplyTemplateUseCase::new(store)
        .execute(name, &mut collector)
        .with_context(|| format!("Failed to fill template '{name}'"))?;

    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
    Ok(())
}

fn is_missing_source(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ApplicationError>(),
            Some(ApplicationError::Core(Error::NoSourceFound { .. }))
        ) || matches!(
            cause.downcast_ref::<Error>(),
            Some(Error::NoSourceFound { .. })
        )
    })
}
