use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{compute_metric, WeightDistribution};
use crate::config::ReportConfig;
use crate::error::DashboardError;
use crate::io::{locate_input, read_csv};
use crate::models::{MetricKind, MetricOutcome, MetricResult, ShippingTable};
use crate::visualization::{write_index, ChartLabels, ChartRenderer, RenderMode};

/// Logical name of the HTML page in [`GeneratedReport::paths`].
pub const INDEX_ARTIFACT: &str = "index_html";

/// One chart written during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub kind: MetricKind,
    pub path: PathBuf,
    pub mode: RenderMode,
}

/// Everything a run wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub input: PathBuf,
    pub charts: Vec<ChartRecord>,
    pub index: PathBuf,
}

impl GeneratedReport {
    /// Logical artifact name -> written path.
    pub fn paths(&self) -> BTreeMap<String, PathBuf> {
        self.charts
            .iter()
            .map(|c| (c.kind.name().to_string(), c.path.clone()))
            .chain(std::iter::once((
                INDEX_ARTIFACT.to_string(),
                self.index.clone(),
            )))
            .collect()
    }

    /// The path mapping as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(&self.paths())?)
    }

    pub fn chart(&self, kind: MetricKind) -> Option<&ChartRecord> {
        self.charts.iter().find(|c| c.kind == kind)
    }
}

/// Titles and axis labels for a metric's chart.
pub fn chart_labels(kind: MetricKind, result: &MetricResult) -> ChartLabels {
    match (kind, result) {
        (MetricKind::ShippingPerWarehouse, _) => {
            ChartLabels::new("Shipping per warehouse", "", "Count")
        }
        (MetricKind::ModeOfShipment, _) => ChartLabels::new("Mode of shipment (counts)", "", "Count"),
        (MetricKind::AverageCustomerRating, MetricResult::GroupedMean(_)) => {
            ChartLabels::new("Average customer rating by warehouse", "", "Average rating")
        }
        (MetricKind::AverageCustomerRating, _) => {
            ChartLabels::new("Customer rating (distribution)", "Rating", "Count")
        }
        (MetricKind::WeightDistribution, _) => {
            ChartLabels::new("Weight distribution (gms)", "Weight (gms)", "Frequency")
        }
    }
}

/// Builds the shipping dashboard: locate, load, compute, render, compose.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
    root: Option<PathBuf>,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config, root: None }
    }

    /// Resolve every relative input and output path against `root` instead of
    /// the current directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.output_dir)
    }

    /// Locate and load the input table.
    pub fn load_table(&self) -> Result<(PathBuf, ShippingTable), DashboardError> {
        let candidates: Vec<PathBuf> = self
            .config
            .input_candidates
            .iter()
            .map(|p| self.resolve(p))
            .collect();
        let input = locate_input(&candidates)?;
        let table = read_csv(&input)?;
        Ok((input, table))
    }

    /// Run the whole pipeline. Nothing is written when the input cannot be found.
    pub fn generate(&self) -> Result<GeneratedReport, DashboardError> {
        let (input, table) = self.load_table()?;

        let output_dir = self.output_dir();
        std::fs::create_dir_all(&output_dir)?;

        let renderer = ChartRenderer::new(&self.config.chart);
        let mut charts = Vec::with_capacity(MetricKind::ALL.len());
        for kind in MetricKind::ALL {
            let path = output_dir.join(kind.file_name());
            let outcome = compute_metric(&table, kind);
            let mode = self.render(&renderer, kind, &outcome, &path)?;
            tracing::info!(metric = %kind, ?mode, "wrote {}", path.display());
            charts.push(ChartRecord { kind, path, mode });
        }

        let kinds: Vec<MetricKind> = charts.iter().map(|c| c.kind).collect();
        let index = write_index(&output_dir, &kinds)?;
        tracing::info!("wrote {}", index.display());

        Ok(GeneratedReport {
            input,
            charts,
            index,
        })
    }

    fn render(
        &self,
        renderer: &ChartRenderer,
        kind: MetricKind,
        outcome: &MetricOutcome,
        path: &Path,
    ) -> Result<RenderMode, DashboardError> {
        match outcome {
            MetricOutcome::Ready(result) => {
                let labels = chart_labels(kind, result);
                match result {
                    MetricResult::CategoricalCount(series) | MetricResult::GroupedMean(series) => {
                        renderer.bar_chart(path, series, &labels)
                    }
                    MetricResult::RawNumeric(values) => {
                        let dist =
                            WeightDistribution::from_values(values, self.config.chart.histogram_bins);
                        renderer.histogram(path, &dist, &labels)
                    }
                }
            }
            MetricOutcome::ColumnMissing { .. } | MetricOutcome::NoData { .. } => {
                let message = outcome.placeholder_message().unwrap_or_default();
                renderer.placeholder(path, &message)
            }
        }
    }
}

/// Generate the dashboard with the default layout relative to the current
/// directory and return the written paths by logical name.
pub fn generate_report() -> Result<BTreeMap<String, PathBuf>, DashboardError> {
    Ok(ReportGenerator::default().generate()?.paths())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_labels_follow_result() {
        let grouped = chart_labels(
            MetricKind::AverageCustomerRating,
            &MetricResult::GroupedMean(vec![]),
        );
        assert_eq!(grouped.y_desc, "Average rating");
        let counts = chart_labels(
            MetricKind::AverageCustomerRating,
            &MetricResult::CategoricalCount(vec![]),
        );
        assert_eq!(counts.title, "Customer rating (distribution)");
        assert_eq!(counts.x_desc, "Rating");
        assert_eq!(counts.y_desc, "Count");
    }

    #[test]
    fn test_paths_mapping() {
        let report = GeneratedReport {
            input: PathBuf::from("data/shipping-data.csv"),
            charts: MetricKind::ALL
                .iter()
                .map(|k| ChartRecord {
                    kind: *k,
                    path: Path::new("docs").join(k.file_name()),
                    mode: RenderMode::Bar,
                })
                .collect(),
            index: PathBuf::from("docs/index.html"),
        };
        let paths = report.paths();
        assert_eq!(paths.len(), 5);
        assert_eq!(paths["index_html"], PathBuf::from("docs/index.html"));
        assert_eq!(
            paths["weight_distribution"],
            PathBuf::from("docs/weight_distribution.png")
        );

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["index_html"], "docs/index.html");
        assert_eq!(json["mode_of_shipment"], "docs/mode_of_shipment.png");
    }

    #[test]
    fn test_resolve_against_root() {
        let generator = ReportGenerator::default().with_root("/tmp/run");
        assert_eq!(generator.output_dir(), PathBuf::from("/tmp/run/docs"));
        assert_eq!(
            ReportGenerator::default().output_dir(),
            PathBuf::from("docs")
        );
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReportGenerator::default()
            .with_root(dir.path())
            .generate()
            .unwrap_err();
        assert!(matches!(err, DashboardError::MissingInput { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
