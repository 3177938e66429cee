use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::graph::{Canvas, PointLabel, Series};
use crate::group::{self, GroupedTable};
use crate::palette::ColorPalette;
use anyhow::Result;
use std::collections::HashMap;

/// Aggregates a dataset by (x, hue) and renders the counts as an annotated
/// line chart.
///
/// Dataset and configuration are fixed at construction; the grouped table is
/// recomputed on every call, never cached. `render` may be called any number
/// of times, and a failed render leaves the instance usable.
#[derive(Debug)]
pub struct TemporalPlotter {
    data: Dataset,
    config: ChartConfig,
}

impl TemporalPlotter {
    /// Fails fast: a missing x or hue column errors here, before any
    /// grouping or drawing.
    pub fn new(data: Dataset, config: ChartConfig) -> Result<Self> {
        data.require_column(&config.x_col)?;
        data.require_column(&config.hue_col)?;
        Ok(Self { data, config })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The grouping operation: one row per distinct (x, hue) pair with its
    /// count, in deterministic order.
    pub fn grouped(&self) -> Result<GroupedTable> {
        group::count_by(&self.data, &self.config.x_col, &self.config.hue_col)
    }

    /// Recompute the grouping and render it as PNG bytes.
    pub fn render(&self) -> Result<Vec<u8>> {
        let table = self.grouped()?;

        let hues = group::hue_values(&table);
        let palette = match &self.config.palette {
            Some(mapping) => ColorPalette::from_mapping(mapping),
            None => ColorPalette::default(),
        };

        // Distinct x values in table order; numeric x values plot at their
        // own value, categorical ones at their index.
        let mut xs: Vec<String> = Vec::new();
        for row in &table {
            if !xs.contains(&row.x) {
                xs.push(row.x.clone());
            }
        }
        let numeric_x = !xs.is_empty() && xs.iter().all(|x| x.parse::<f64>().is_ok());
        let positions: HashMap<String, f64> = if numeric_x {
            xs.iter()
                .map(|x| (x.clone(), x.parse::<f64>().unwrap_or_default()))
                .collect()
        } else {
            xs.iter()
                .enumerate()
                .map(|(idx, x)| (x.clone(), idx as f64))
                .collect()
        };
        let x_categories = if numeric_x { None } else { Some(xs) };

        // One line series per hue, colored in sorted-hue order so the
        // default assignment is reproducible.
        let mut series = Vec::new();
        for (idx, hue) in hues.iter().enumerate() {
            let points: Vec<(f64, f64)> = table
                .iter()
                .filter(|row| &row.hue == hue)
                .map(|row| (positions[&row.x], row.count as f64))
                .collect();
            series.push(Series {
                name: hue.clone(),
                points,
                color: palette.color_for(hue, idx),
            });
        }

        let labels: Vec<PointLabel> = table
            .iter()
            .map(|row| PointLabel {
                x: positions[&row.x],
                y: row.count as f64,
                text: row.count.to_string(),
            })
            .collect();

        let (width, height) = self.config.figsize.pixel_dimensions();
        let canvas = Canvas::new(
            width,
            height,
            self.config.title.clone(),
            self.config.x_col.clone(),
            self.config.y_name.clone(),
            x_categories,
            self.config.theme.clone(),
        );
        canvas.draw(&series, &labels)
    }
}
