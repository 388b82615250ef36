//! Sketch command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SketchConfig;
use crate::error::GridlockError;

impl FromCommand for SketchConfig {
    fn from_command(command: Commands) -> Result<Self, GridlockError> {
        match command {
            Commands::Sketch {
                common,
                format,
                output,
                highlight_cycle,
            } => SketchConfig::builder()
                .with_scenario(common.scenario)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycle(highlight_cycle)
                .build(),
            _ => Err(GridlockError::ConfigurationError {
                message: "Invalid command type for SketchConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SketchConfig);

/// Execute the sketch command for rendering the wait-for graph
pub fn execute_sketch_command(command: Commands) -> Result<()> {
    let config = SketchConfig::from_command(command)
        .wrap_err("Failed to parse sketch command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::sketch::SketchExecutor;
    SketchExecutor::execute(config)
}
