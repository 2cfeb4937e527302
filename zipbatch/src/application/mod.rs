pub mod handlers;

use crate::presentation::cli::{Cli, Invocation};
use clap::CommandFactory;
use handlers::Output;
use std::process::ExitCode;
use zipbatch_core::BatchConfig;
use zipbatch_core::error::Result;

/// Exit status for malformed invocations.
pub const USAGE_EXIT: u8 = 2;

pub fn config_from(cli: &Cli, invocation: Invocation) -> BatchConfig {
    let base = match invocation {
        Invocation::Extended {
            source,
            output,
            prefix,
        } => BatchConfig {
            delete_sources: !cli.keep_sources,
            ..BatchConfig::new(source, output, prefix)
        },
        Invocation::Legacy => BatchConfig::legacy(),
    };
    BatchConfig {
        batch_size: cli.batch_size,
        source_extension: cli.extension.clone(),
        method: cli.method,
        level: cli.level,
        deterministic: cli.deterministic,
        dry_run: cli.dry_run,
        ..base
    }
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    let Some(invocation) = cli.invocation() else {
        println!("error: SOURCE_DIR, OUTPUT_DIR and PREFIX must be given together\n");
        println!("{}", Cli::command().render_usage());
        return Ok(ExitCode::from(USAGE_EXIT));
    };

    let cfg = config_from(&cli, invocation);
    tracing::debug!(?cfg, "resolved configuration");
    let out = Output {
        json: cli.json,
        quiet: cli.quiet,
    };
    handlers::handle_batch(&cfg, out)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use zipbatch_core::Method;

    #[test]
    fn extended_config_deletes_unless_kept() {
        let cli = Cli::parse_from(["zipbatch", "in", "out", "logs"]);
        let cfg = config_from(&cli, cli.invocation().unwrap());
        assert!(cfg.delete_sources);
        assert_eq!(cfg.source_dir, PathBuf::from("in"));
        assert_eq!(cfg.prefix, "logs");

        let cli = Cli::parse_from(["zipbatch", "in", "out", "logs", "--keep-sources"]);
        let cfg = config_from(&cli, cli.invocation().unwrap());
        assert!(!cfg.delete_sources);
    }

    #[test]
    fn legacy_config_never_deletes() {
        let cli = Cli::parse_from(["zipbatch", "--batch-size", "10", "--method", "stored"]);
        let cfg = config_from(&cli, Invocation::Legacy);
        assert!(!cfg.delete_sources);
        assert_eq!(cfg.source_dir, PathBuf::from("input"));
        assert_eq!(cfg.output_dir, PathBuf::from("output"));
        assert_eq!(cfg.batch_size, 10);
        assert_eq!(cfg.method, Method::Stored);
    }
}
