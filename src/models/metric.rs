use std::fmt;

use serde::{Deserialize, Serialize};

pub const WAREHOUSE_BLOCK: &str = "Warehouse_block";
pub const MODE_OF_SHIPMENT: &str = "Mode_of_Shipment";
pub const CUSTOMER_RATING: &str = "Customer_rating";
pub const WEIGHT_IN_GMS: &str = "Weight_in_gms";

/// The four charts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    ShippingPerWarehouse,
    ModeOfShipment,
    AverageCustomerRating,
    WeightDistribution,
}

impl MetricKind {
    /// All metrics in the order they are rendered.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::ShippingPerWarehouse,
        MetricKind::ModeOfShipment,
        MetricKind::AverageCustomerRating,
        MetricKind::WeightDistribution,
    ];

    /// Logical artifact name, also the output file stem.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::ShippingPerWarehouse => "shipping_per_warehouse",
            MetricKind::ModeOfShipment => "mode_of_shipment",
            MetricKind::AverageCustomerRating => "average_customer_rating",
            MetricKind::WeightDistribution => "weight_distribution",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name())
    }

    /// Column whose presence decides between a chart and a "not found" placeholder.
    pub fn source_column(&self) -> &'static str {
        match self {
            MetricKind::ShippingPerWarehouse => WAREHOUSE_BLOCK,
            MetricKind::ModeOfShipment => MODE_OF_SHIPMENT,
            MetricKind::AverageCustomerRating => CUSTOMER_RATING,
            MetricKind::WeightDistribution => WEIGHT_IN_GMS,
        }
    }

    /// Card heading used on the HTML index.
    pub fn heading(&self) -> &'static str {
        match self {
            MetricKind::ShippingPerWarehouse => "Shipping per warehouse",
            MetricKind::ModeOfShipment => "Mode of shipment",
            MetricKind::AverageCustomerRating => "Average customer rating",
            MetricKind::WeightDistribution => "Weight distribution",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered label -> value series.
pub type Series = Vec<(String, f64)>;

/// Aggregate computed for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricResult {
    /// Frequency per distinct value.
    CategoricalCount(Series),
    /// Mean of a numeric column per category, highest mean first.
    GroupedMean(Series),
    /// Raw values awaiting binning.
    RawNumeric(Vec<f64>),
}

/// Outcome of computing a metric: either usable data or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricOutcome {
    Ready(MetricResult),
    ColumnMissing { column: String },
    NoData { column: String },
}

impl MetricOutcome {
    pub fn column_missing(column: &str) -> Self {
        MetricOutcome::ColumnMissing {
            column: column.to_string(),
        }
    }

    pub fn no_data(column: &str) -> Self {
        MetricOutcome::NoData {
            column: column.to_string(),
        }
    }

    /// Message drawn on the placeholder image, `None` when there is data to chart.
    pub fn placeholder_message(&self) -> Option<String> {
        match self {
            MetricOutcome::Ready(_) => None,
            MetricOutcome::ColumnMissing { column } => Some(format!("Column {column} not found")),
            MetricOutcome::NoData { column } => Some(format!("No data for {column}")),
        }
    }
}
