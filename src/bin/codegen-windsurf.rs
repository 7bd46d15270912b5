use feature_codegen::{cli, ProviderKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(ProviderKind::Windsurf)
}
