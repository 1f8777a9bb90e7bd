pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod report;
pub mod visualization;

pub use analysis::compute_metric;
pub use config::{ChartConfig, ReportConfig};
pub use error::DashboardError;
pub use models::{MetricKind, MetricOutcome, MetricResult, ShippingTable};
pub use report::{generate_report, GeneratedReport, ReportGenerator};
