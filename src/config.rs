use crate::theme::ChartTheme;
use serde::Deserialize;
use std::collections::HashMap;

/// Figure size in abstract display units; the canvas renders at
/// `PIXELS_PER_UNIT` bitmap pixels per unit.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FigureSize {
    #[serde(default = "default_fig_width")]
    pub width: f64,
    #[serde(default = "default_fig_height")]
    pub height: f64,
}

pub const PIXELS_PER_UNIT: f64 = 100.0;

fn default_fig_width() -> f64 { 10.0 }
fn default_fig_height() -> f64 { 6.0 }

impl Default for FigureSize {
    fn default() -> Self {
        FigureSize { width: 10.0, height: 6.0 }
    }
}

impl FigureSize {
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (
            (self.width * PIXELS_PER_UNIT).round() as u32,
            (self.height * PIXELS_PER_UNIT).round() as u32,
        )
    }
}

/// Construction parameters for the plotter, fixed for its lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Column providing the temporal axis.
    #[serde(default = "default_x_col")]
    pub x_col: String,
    /// Name of the derived count column; becomes the y-axis label.
    #[serde(default = "default_y_name")]
    pub y_name: String,
    /// Categorical column distinguishing the line series.
    #[serde(default = "default_hue_col")]
    pub hue_col: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Optional explicit category → color mapping; uncovered categories use
    /// the default qualitative palette.
    #[serde(default)]
    pub palette: Option<HashMap<String, String>>,
    #[serde(default)]
    pub figsize: FigureSize,
    #[serde(default)]
    pub theme: ChartTheme,
}

fn default_x_col() -> String { "Ano".to_string() }
fn default_y_name() -> String { "Quantidade".to_string() }
fn default_hue_col() -> String { "C_IFDM".to_string() }
fn default_title() -> String { "Evolução temporal por categoria".to_string() }

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            x_col: default_x_col(),
            y_name: default_y_name(),
            hue_col: default_hue_col(),
            title: default_title(),
            palette: None,
            figsize: FigureSize::default(),
            theme: ChartTheme::default(),
        }
    }
}
