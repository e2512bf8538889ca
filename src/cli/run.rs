use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command, SwitchArgs},
    exit_status::ExitStatus,
};
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, default_config_json, load_config},
    delimiter::DelimiterPolicy,
    discovery::discover_files,
    report::Reporter,
    switcher::switch,
};

pub fn run(Arguments { command, switch }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => run_switch(switch),
    }
}

fn run_switch(args: SwitchArgs) -> Result<ExitStatus> {
    let env = args.env.as_deref().context("--env is required")?;

    let mut reporter = Reporter::stdout(args.verbosity());

    let ConfigLoadResult { config, path } = load_config(&config_start_dir(&args.path))?;
    if let Some(path) = &path {
        reporter.config_loaded(path);
    }

    let mut options = config.discovery_options();
    if !args.extensions.is_empty() {
        options.extensions = args
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
    }

    let delimiters = match &args.delimiter {
        Some(delimiter) => DelimiterPolicy::Fixed(delimiter.clone()),
        None => DelimiterPolicy::ByExtension(config.delimiter_overrides()?),
    };

    let files = discover_files(&args.path, &options)?;

    let change_set = switch(env, &files, &delimiters, args.dry_run, &mut reporter)?;

    // In dry-run mode, pending changes exit with Failure to signal work to do
    if args.dry_run && !change_set.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Directory the config lookup starts from: the target itself, or the
/// directory containing a target file.
fn config_start_dir(path: &Path) -> PathBuf {
    let dir = if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    } else {
        path
    };
    fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
