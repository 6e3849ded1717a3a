//! Run the structural validation suite

use std::path::Path;

use log::debug;

use structcheck::core::services::checker;
use structcheck::core::suite;
use structcheck::output::OutputMode;

/// Run every check group against the base directory and render the report
///
/// Exits with status 1 when any check fails; the exit code is the only
/// contract automation should depend on.
pub fn validate(base_dir: &Path, mode: OutputMode) -> anyhow::Result<()> {
    debug!("validating project tree at {}", base_dir.display());

    let groups = suite::wifi_console_suite()?;
    let report = checker::run_suite(base_dir, &groups);

    report.render(mode);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
