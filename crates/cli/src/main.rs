#![deny(unsafe_code)]
//! CLI binary for the flowlic line integral convolution renderer.
//!
//! Subcommands:
//! - `render <field>` — convolve noise along the field's streamlines, write PNG
//! - `list` — print available fields and color maps

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use flowlic_core::{ColorMap, GridConfig};
use flowlic_render::lic::{min_margin, LicRenderer, DEFAULT_BUDGET_PX};
use flowlic_render::FieldKind;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "flowlic", about = "Line integral convolution field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a vector field to a PNG image.
    Render {
        /// Field name (e.g. "dipole").
        field: String,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Noise margin in pixels; defaults to the smallest band the budget
        /// allows.
        #[arg(long)]
        margin: Option<usize>,

        /// Streamline arc-length budget per direction, in pixel lengths.
        #[arg(short, long, default_value_t = DEFAULT_BUDGET_PX)]
        budget: f64,

        /// PRNG seed for the noise texture.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Color map: a preset name (thermal, dipole, mono) or an inline
        /// JSON config.
        #[arg(short, long, default_value = "dipole")]
        colormap: String,

        /// Left edge of the math window.
        #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
        x_min: f64,

        /// Right edge of the math window.
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        x_max: f64,

        /// Vertical center of the math window.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y_center: f64,

        /// Field parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Also write the raw noise texture as a grayscale PNG.
        #[arg(long)]
        noise_output: Option<PathBuf>,
    },
    /// List available fields and color maps.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let fields = FieldKind::list_fields();
            let colormaps = ColorMap::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "fields": fields,
                    "colormaps": colormaps,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Fields:");
                for name in fields {
                    println!("  {name}");
                }
                println!("Color maps:");
                println!("  {}", colormaps.join(", "));
            }
        }
        Command::Render {
            field,
            width,
            height,
            margin,
            budget,
            seed,
            colormap,
            x_min,
            x_max,
            y_center,
            params,
            output,
            noise_output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let color_map = if colormap.trim_start().starts_with('{') {
                ColorMap::from_json_str(&colormap)
            } else {
                ColorMap::from_name(&colormap)
            }
            .map_err(|e| CliError::Input(e.to_string()))?;

            let margin = margin.unwrap_or_else(|| min_margin(budget));
            let grid = GridConfig::new(width, height, margin, x_min, x_max, y_center)?;
            let field_impl = FieldKind::from_name(&field, &params)?;

            let renderer = LicRenderer::new(grid, color_map, budget, seed)?;
            let raster = renderer.render(&field_impl)?;
            flowlic_render::snapshot::write_png(&raster, &output)?;

            if let Some(noise_path) = &noise_output {
                flowlic_render::snapshot::write_png(&renderer.noise_image(), noise_path)?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "field": field,
                    "width": width,
                    "height": height,
                    "margin": margin,
                    "budget": budget,
                    "seed": seed,
                    "output": output.display().to_string(),
                    "noise_output": noise_output.map(|p| p.display().to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {field} ({width}x{height}, margin {margin}, budget {budget}, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
