//! Sketch command executor

use std::fs::File;
use std::io::{self, BufWriter};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::SketchConfig;
use crate::detector::detect_cycle;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, WaitGraphBuilder};
use crate::scenario::Scenario;

pub struct SketchExecutor;

impl CommandExecutor for SketchExecutor {
    type Config = SketchConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Sketching {} wait-for graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let scenario = Scenario::parse_file(&config.scenario)
            .wrap_err("Failed to load scenario")?;
        let graph = scenario
            .wait_for_graph()
            .into_diagnostic()
            .wrap_err("Failed to build wait-for graph")?;

        // Detect the cycle only if highlighting is requested
        let cycle = if config.highlight_cycle {
            detect_cycle(&graph)
        } else {
            None
        };

        let mut builder = WaitGraphBuilder::new();
        builder.build_from_snapshot(&graph);

        let renderer = GraphRenderer::new(config.highlight_cycle);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            GraphFormat::Ascii => {
                renderer
                    .render_ascii(builder.graph(), cycle.as_ref(), output_writer.as_mut())
                    .wrap_err("Failed to render ASCII graph")?;
            }
            GraphFormat::Mermaid => {
                renderer
                    .render_mermaid(builder.graph(), cycle.as_ref(), output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            GraphFormat::Dot => {
                renderer
                    .render_dot(builder.graph(), cycle.as_ref(), output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
        }

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✅").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
