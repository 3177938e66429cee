use anyhow::{Context, Result};
use clap::Parser;
use evograph::config::{ChartConfig, FigureSize};
use evograph::csv_reader;
use evograph::plotter::TemporalPlotter;
use evograph::theme::ChartTheme;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evograph")]
#[command(about = "Aggregate CSV data by year and category and render an annotated line chart", long_about = None)]
struct Args {
    /// Column for the temporal x axis
    #[arg(long, default_value = "Ano")]
    x: String,

    /// Categorical column distinguishing the line series
    #[arg(long, default_value = "C_IFDM")]
    hue: String,

    /// Name for the derived count column (y-axis label)
    #[arg(long, default_value = "Quantidade")]
    y: String,

    /// Chart title
    #[arg(long, default_value = "Evolução temporal por categoria")]
    title: String,

    /// Category-to-color mapping as a JSON object, e.g. '{"Alto": "#1b9e77"}'
    #[arg(long)]
    palette: Option<String>,

    /// Figure width in display units (100 px each)
    #[arg(long, default_value_t = 10.0)]
    width: f64,

    /// Figure height in display units
    #[arg(long, default_value_t = 6.0)]
    height: f64,

    /// Draw grid lines behind the series
    #[arg(long)]
    grid: bool,

    /// Output PNG path; defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let data = csv_reader::read_csv_from_stdin().context("Failed to read CSV from stdin")?;

    let palette = match &args.palette {
        Some(json) => {
            let mapping: HashMap<String, String> =
                serde_json::from_str(json).context("Failed to parse --palette JSON")?;
            Some(mapping)
        }
        None => None,
    };

    let config = ChartConfig {
        x_col: args.x,
        y_name: args.y,
        hue_col: args.hue,
        title: args.title,
        palette,
        figsize: FigureSize {
            width: args.width,
            height: args.height,
        },
        theme: ChartTheme {
            grid: args.grid,
            ..ChartTheme::default()
        },
    };

    let plotter = TemporalPlotter::new(data, config)?;
    let png_bytes = plotter.render().context("Failed to render plot")?;

    match args.output {
        Some(path) => {
            fs::write(&path, &png_bytes)
                .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(&png_bytes)
                .context("Failed to write PNG to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
