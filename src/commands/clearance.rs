//! Clearance command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ClearanceConfig;
use crate::error::GridlockError;

impl FromCommand for ClearanceConfig {
    fn from_command(command: Commands) -> Result<Self, GridlockError> {
        match command {
            Commands::Clearance {
                common,
                format,
                error_on_unsafe,
            } => ClearanceConfig::builder()
                .with_scenario(common.scenario)
                .with_format(format.format)
                .with_error_on_unsafe(error_on_unsafe)
                .build(),
            _ => Err(GridlockError::ConfigurationError {
                message: "Invalid command type for ClearanceConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ClearanceConfig);

/// Execute the clearance command for checking state safety
pub fn execute_clearance_command(command: Commands) -> Result<()> {
    let config = ClearanceConfig::from_command(command)
        .wrap_err("Failed to parse clearance command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::clearance::ClearanceExecutor;
    ClearanceExecutor::execute(config)
}
