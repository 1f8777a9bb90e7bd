use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};

use super::fonts::{ensure_font, FONT_FAMILY};
use crate::analysis::WeightDistribution;
use crate::config::ChartConfig;
use crate::error::DashboardError;
use crate::models::Series;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(190, 190, 190);

/// How a chart file was drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Bar,
    Histogram,
    Placeholder(String),
}

/// Text decorations for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
}

impl ChartLabels {
    pub fn new(title: &str, x_desc: &str, y_desc: &str) -> Self {
        Self {
            title: title.to_string(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
        }
    }
}

/// Draws fixed-size PNG charts.
///
/// Every call opens its own bitmap, writes it to `path` (replacing any
/// existing file) and releases it before returning.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
    font_paths: Vec<PathBuf>,
}

impl ChartRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            font_paths: config.font_paths.clone(),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Vertical bars for an ordered label -> value series.
    pub fn bar_chart(
        &self,
        path: &Path,
        series: &Series,
        labels: &ChartLabels,
    ) -> Result<RenderMode, DashboardError> {
        ensure_font(&self.font_paths)?;
        let root = BitMapBackend::new(path, self.size()).into_drawing_area();
        root.fill(&WHITE)?;

        let low = series.iter().map(|(_, v)| *v).fold(0.0f64, f64::min);
        let high = series.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);
        let (y_min, y_max) = padded_range(low, high);

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .caption(&labels.title, (FONT_FAMILY, 24))
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d((0..series.len()).into_segmented(), y_min..y_max)?;

        let label_of = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => series
                .get(*i)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .bold_line_style(GRID_COLOR.mix(0.6))
            .light_line_style(WHITE)
            .x_labels(series.len())
            .x_label_formatter(&label_of)
            .y_desc(labels.y_desc.as_str())
            .label_style((FONT_FAMILY, 14))
            .axis_desc_style((FONT_FAMILY, 16));
        if !labels.x_desc.is_empty() {
            mesh.x_desc(labels.x_desc.as_str());
        }
        mesh.draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(10)
                .data(series.iter().enumerate().map(|(i, (_, v))| (i, *v))),
        )?;

        root.present()?;
        Ok(RenderMode::Bar)
    }

    /// Frequency histogram of pre-binned values.
    pub fn histogram(
        &self,
        path: &Path,
        distribution: &WeightDistribution,
        labels: &ChartLabels,
    ) -> Result<RenderMode, DashboardError> {
        ensure_font(&self.font_paths)?;
        let root = BitMapBackend::new(path, self.size()).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_min, x_max) = distribution.range().unwrap_or((0.0, 1.0));
        let (_, y_max) = padded_range(0.0, distribution.max_count() as f64);

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .caption(&labels.title, (FONT_FAMILY, 24))
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(GRID_COLOR.mix(0.6))
            .light_line_style(WHITE)
            .x_desc(labels.x_desc.as_str())
            .y_desc(labels.y_desc.as_str())
            .y_label_formatter(&|v| format!("{v:.0}"))
            .label_style((FONT_FAMILY, 14))
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()?;

        chart.draw_series(distribution.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                BAR_COLOR.filled(),
            )
        }))?;
        chart.draw_series(distribution.bins.iter().filter(|b| b.count > 0).map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                WHITE.stroke_width(1),
            )
        }))?;

        root.present()?;
        Ok(RenderMode::Histogram)
    }

    /// Blank canvas with a centred message and no axes.
    pub fn placeholder(&self, path: &Path, message: &str) -> Result<RenderMode, DashboardError> {
        ensure_font(&self.font_paths)?;
        let root = BitMapBackend::new(path, self.size()).into_drawing_area();
        root.fill(&WHITE)?;

        let style = TextStyle::from((FONT_FAMILY, 22).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let centre = (self.width as i32 / 2, self.height as i32 / 2);
        root.draw_text(message, &style, centre)?;

        root.present()?;
        Ok(RenderMode::Placeholder(message.to_string()))
    }
}

/// Axis range covering `[low, high]` with 5% headroom away from zero.
fn padded_range(low: f64, high: f64) -> (f64, f64) {
    let span = high - low;
    if span <= 0.0 {
        return (low, low + 1.0);
    }
    let pad = span * 0.05;
    let min = if low < 0.0 { low - pad } else { low };
    let max = if high > 0.0 { high + pad } else { high };
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn renderer() -> ChartRenderer {
        ChartRenderer::new(&ChartConfig {
            width: 320,
            height: 240,
            ..ChartConfig::default()
        })
    }

    fn assert_png(path: &Path) {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.len() > PNG_MAGIC.len());
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(0.0, 100.0), (0.0, 105.0));
        assert_eq!(padded_range(0.0, 0.0), (0.0, 1.0));
        let (min, max) = padded_range(-10.0, 10.0);
        assert!(min < -10.0 && max > 10.0);
    }

    #[test]
    fn test_bar_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bars.png");
        let series = vec![("F".to_string(), 3.0), ("A".to_string(), 1.0)];
        let mode = renderer()
            .bar_chart(&path, &series, &ChartLabels::new("Counts", "", "Count"))
            .unwrap();
        assert_eq!(mode, RenderMode::Bar);
        assert_png(&path);
    }

    #[test]
    fn test_histogram_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.png");
        let dist = WeightDistribution::from_values(&[1000.0, 1500.0, 1500.0, 4000.0], 30);
        let mode = renderer()
            .histogram(
                &path,
                &dist,
                &ChartLabels::new("Weights", "Weight (gms)", "Frequency"),
            )
            .unwrap();
        assert_eq!(mode, RenderMode::Histogram);
        assert_png(&path);
    }

    #[test]
    fn test_placeholder_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"stale").unwrap();
        let mode = renderer().placeholder(&path, "No data for X").unwrap();
        assert_eq!(mode, RenderMode::Placeholder("No data for X".to_string()));
        assert_png(&path);
    }

    #[test]
    fn test_unwritable_path_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("chart.png");
        let err = renderer().placeholder(&path, "x").unwrap_err();
        assert!(matches!(err, DashboardError::Render(_)));
    }

    #[test]
    fn test_placeholder_messages_render_without_configured_fonts() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ChartRenderer::new(&ChartConfig {
            width: 320,
            height: 240,
            font_paths: vec![],
            ..ChartConfig::default()
        });
        let missing = dir.path().join("missing.png");
        let empty = dir.path().join("empty.png");
        renderer
            .placeholder(&missing, "Column Warehouse_block not found")
            .unwrap();
        renderer
            .placeholder(&empty, "No data for Warehouse_block")
            .unwrap();

        let missing = std::fs::read(missing).unwrap();
        let empty = std::fs::read(empty).unwrap();
        assert_ne!(missing, empty);
    }
}
