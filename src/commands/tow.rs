//! Tow command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TowConfig;
use crate::error::GridlockError;

impl FromCommand for TowConfig {
    fn from_command(command: Commands) -> Result<Self, GridlockError> {
        match command {
            Commands::Tow {
                common,
                format,
                all,
            } => TowConfig::builder()
                .with_scenario(common.scenario)
                .with_format(format.format)
                .with_all(all)
                .build(),
            _ => Err(GridlockError::ConfigurationError {
                message: "Invalid command type for TowConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TowConfig);

/// Execute the tow command for selecting termination victims
pub fn execute_tow_command(command: Commands) -> Result<()> {
    let config =
        TowConfig::from_command(command).wrap_err("Failed to parse tow command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tow::TowExecutor;
    TowExecutor::execute(config)
}
