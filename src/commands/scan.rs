//! Scan command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ScanConfig;
use crate::error::GridlockError;

impl FromCommand for ScanConfig {
    fn from_command(command: Commands) -> Result<Self, GridlockError> {
        match command {
            Commands::Scan {
                common,
                format,
                resolve,
                error_on_deadlock,
            } => ScanConfig::builder()
                .with_scenario(common.scenario)
                .with_format(format.format)
                .with_resolve(resolve)
                .with_error_on_deadlock(error_on_deadlock)
                .build(),
            _ => Err(GridlockError::ConfigurationError {
                message: "Invalid command type for ScanConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ScanConfig);

/// Execute the scan command for detecting deadlock cycles
pub fn execute_scan_command(command: Commands) -> Result<()> {
    let config =
        ScanConfig::from_command(command).wrap_err("Failed to parse scan command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::scan::ScanExecutor;
    ScanExecutor::execute(config)
}
