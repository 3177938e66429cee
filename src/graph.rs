use crate::palette;
use crate::theme::ChartTheme;
use anyhow::{Context, Result};
use image::ImageEncoder;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

/// Line width in display units; plotters strokes are whole pixels.
const LINE_WIDTH: f64 = 1.5;
/// Marker radius in pixels.
const MARKER_SIZE: i32 = 3;
/// Vertical offset of count labels above their point, in pixels.
const LABEL_OFFSET: i32 = 8;

/// One line series: a hue category, its points in x order, and its color.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
}

/// A count annotation anchored to a chart coordinate.
#[derive(Debug, Clone)]
pub struct PointLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Canvas for the aggregated line chart. Owns the figure geometry and text;
/// `draw` renders series plus annotations and encodes PNG bytes.
pub struct Canvas {
    width: u32,
    height: u32,
    title: String,
    x_label: String,
    y_label: String,
    /// When set, the x axis is categorical: positions are indices into this
    /// list and tick labels come from it.
    x_categories: Option<Vec<String>>,
    theme: ChartTheme,
}

impl Canvas {
    pub fn new(
        width: u32,
        height: u32,
        title: String,
        x_label: String,
        y_label: String,
        x_categories: Option<Vec<String>>,
        theme: ChartTheme,
    ) -> Self {
        Canvas {
            width,
            height,
            title,
            x_label,
            y_label,
            x_categories,
            theme,
        }
    }

    /// Render all series and labels into a fresh buffer and encode it as PNG.
    pub fn draw(&self, series: &[Series], labels: &[PointLabel]) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; rgb_buffer_len(self.width, self.height)];
        let background =
            palette::parse_color(&self.theme.background).unwrap_or(RGBColor(255, 255, 255));

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (self.width, self.height))
                .into_drawing_area();
            root.fill(&background).context("Failed to fill background")?;

            if series.is_empty() {
                self.draw_empty_notice(&root)?;
            } else {
                self.draw_chart(&root, series, labels)?;
            }

            root.present().context("Failed to present drawing")?;
        }

        encode_png(&buffer, self.width, self.height)
    }

    /// Placeholder canvas for an empty grouped table: title plus a notice,
    /// no axes.
    fn draw_empty_notice(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    ) -> Result<()> {
        let center = ((self.width / 2) as i32, (self.height / 2) as i32);
        let notice_style = TextStyle::from(("sans-serif", self.theme.axis_size).into_font())
            .color(&RGBColor(128, 128, 128))
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new("Sem dados para plotar", center, notice_style))
            .context("Failed to draw empty-data notice")?;

        let title_style = TextStyle::from(("sans-serif", self.theme.title_size).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(
            self.title.clone(),
            ((self.width / 2) as i32, 10),
            title_style,
        ))
        .context("Failed to draw title")?;
        Ok(())
    }

    fn draw_chart(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
        series: &[Series],
        labels: &[PointLabel],
    ) -> Result<()> {
        let (x_range, y_range) = data_ranges(series);

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .caption(&self.title, ("sans-serif", self.theme.title_size))
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .context("Failed to build chart")?;

        if let Some(categories) = &self.x_categories {
            let categories = categories.clone();
            let mut mesh = chart.configure_mesh();
            if !self.theme.grid {
                mesh.disable_x_mesh().disable_y_mesh();
            }
            mesh.x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .axis_desc_style(("sans-serif", self.theme.axis_size))
                .y_label_formatter(&|y| format!("{}", *y as u64))
                .x_labels(categories.len())
                .x_label_formatter(&move |x| {
                    let idx = x.round() as usize;
                    categories.get(idx).cloned().unwrap_or_default()
                })
                .draw()
                .context("Failed to draw mesh")?;
        } else {
            let mut mesh = chart.configure_mesh();
            if !self.theme.grid {
                mesh.disable_x_mesh().disable_y_mesh();
            }
            mesh.x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .axis_desc_style(("sans-serif", self.theme.axis_size))
                .y_label_formatter(&|y| format!("{}", *y as u64))
                .draw()
                .context("Failed to draw mesh")?;
        }

        for s in series {
            let color = s.color;
            let stroke = LINE_WIDTH.round() as u32;
            chart
                .draw_series(LineSeries::new(
                    s.points.iter().copied(),
                    color.stroke_width(stroke),
                ))
                .with_context(|| format!("Failed to draw line series '{}'", s.name))?
                .label(s.name.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(stroke))
                });

            // Marker glyph at every point.
            chart
                .draw_series(
                    s.points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled())),
                )
                .with_context(|| format!("Failed to draw markers for '{}'", s.name))?;
        }

        let annotation_color = palette::parse_color(&self.theme.annotation_color)
            .unwrap_or(RGBColor(169, 169, 169));
        let label_style = TextStyle::from(("sans-serif", self.theme.annotation_size).into_font())
            .color(&annotation_color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        chart
            .draw_series(labels.iter().map(|label| {
                EmptyElement::at((label.x, label.y))
                    + Text::new(label.text.clone(), (0, -LABEL_OFFSET), label_style.clone())
            }))
            .context("Failed to draw count labels")?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .draw()
            .context("Failed to draw legend")?;

        Ok(())
    }
}

/// Global data ranges across all series. The x range gets 5% padding on each
/// side; the y range starts at zero (counts) with headroom for the labels.
fn data_ranges(series: &[Series]) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }

    let x_range = if x_min == x_max {
        (x_min - 1.0)..(x_max + 1.0)
    } else {
        let padding = (x_max - x_min) * 0.05;
        (x_min - padding)..(x_max + padding)
    };

    let y_range = if y_max <= 0.0 {
        0.0..1.0
    } else {
        0.0..(y_max * 1.15)
    };

    (x_range, y_range)
}

/// RGB buffer size for a bitmap; widened to usize before multiplying so
/// large figures cannot overflow u32.
fn rgb_buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// Encode an RGB buffer as PNG bytes.
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    {
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(buffer, width, height, image::ColorType::Rgb8)
            .context("Failed to encode PNG")?;
    }
    Ok(png_bytes)
}
