//! Command-line entry point shared by the provider binaries.
//!
//! Every binary runs the same flow; only the [`ProviderKind`] differs. Exit
//! status is 0 on success and 1 on any failure, argument errors included.

use crate::config::{BackendConfig, GenerationParams, ProviderKind};
use crate::generator::CodeGenerator;
use crate::output::{OutputLayout, WrittenArtifacts};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate a page object and step definitions from a feature file"
)]
pub struct Cli {
    /// Feature file describing the scenario
    pub feature_file: PathBuf,

    /// Instructions document guiding the generated code
    pub instructions_file: PathBuf,

    /// Directory under which pages/ and steps/ are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Override the provider's default model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Maximum number of tokens the backend may generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Log pipeline progress to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    fn generation_params(&self, provider: ProviderKind) -> GenerationParams {
        let defaults = GenerationParams::for_provider(provider);
        GenerationParams {
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            ..defaults
        }
    }
}

/// Parse arguments from the process and run one generation.
pub fn run(provider: ProviderKind) -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(execute(provider, cli)) {
        Ok(written) => {
            println!("Page object written to {}", written.page_object.display());
            println!(
                "Step definitions written to {}",
                written.step_definition.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Configuration first, then the pipeline.
pub async fn execute(provider: ProviderKind, cli: Cli) -> anyhow::Result<WrittenArtifacts> {
    let mut config = BackendConfig::from_env(provider)?;
    if let Some(model) = cli.model.clone() {
        config = config.with_model(model);
    }

    let generator = CodeGenerator::from_config(
        config,
        cli.generation_params(provider),
        OutputLayout::new(cli.output_dir.clone()),
    )?;

    generator
        .generate(&cli.feature_file, &cli.instructions_file)
        .await
        .with_context(|| format!("{} code generation failed", provider.display_name()))
}

/// Stderr subscriber. `--verbose` forces debug; otherwise `RUST_LOG`, else silent.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("feature_codegen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
