use serde::Deserialize;

/// Explicit chart style, supplied through the config and applied per render.
/// Styling is plain instance data; two renderers with different themes never
/// affect each other.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartTheme {
    /// Canvas background. Named color or hex.
    #[serde(default = "default_background")]
    pub background: String,
    /// Draw grid lines behind the series. Off by default (neutral theme).
    #[serde(default)]
    pub grid: bool,
    #[serde(default = "default_title_size")]
    pub title_size: f64,
    #[serde(default = "default_axis_size")]
    pub axis_size: f64,
    /// Per-point count labels: font size and color.
    #[serde(default = "default_annotation_size")]
    pub annotation_size: f64,
    #[serde(default = "default_annotation_color")]
    pub annotation_color: String,
}

fn default_background() -> String { "white".to_string() }
fn default_title_size() -> f64 { 20.0 }
fn default_axis_size() -> f64 { 14.0 }
fn default_annotation_size() -> f64 { 10.0 }
fn default_annotation_color() -> String { "darkgrey".to_string() }

impl Default for ChartTheme {
    fn default() -> Self {
        ChartTheme {
            background: default_background(),
            grid: false,
            title_size: default_title_size(),
            axis_size: default_axis_size(),
            annotation_size: default_annotation_size(),
            annotation_color: default_annotation_color(),
        }
    }
}
