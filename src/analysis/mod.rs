mod counts;
mod distribution;
mod grouped;

pub use counts::{numeric_value_counts, value_counts};
pub use distribution::{WeightBin, WeightDistribution};
pub use grouped::grouped_mean;

use crate::models::{
    format_value, MetricKind, MetricOutcome, MetricResult, ShippingTable, CUSTOMER_RATING,
    MODE_OF_SHIPMENT, WAREHOUSE_BLOCK, WEIGHT_IN_GMS,
};

/// Compute the aggregate behind one dashboard chart.
pub fn compute_metric(table: &ShippingTable, kind: MetricKind) -> MetricOutcome {
    let outcome = match kind {
        MetricKind::ShippingPerWarehouse => categorical_counts(table, WAREHOUSE_BLOCK),
        MetricKind::ModeOfShipment => categorical_counts(table, MODE_OF_SHIPMENT),
        MetricKind::AverageCustomerRating => rating_summary(table),
        MetricKind::WeightDistribution => weight_values(table),
    };
    tracing::debug!(metric = %kind, "computed metric: {}", describe(&outcome));
    outcome
}

fn describe(outcome: &MetricOutcome) -> String {
    match outcome {
        MetricOutcome::Ready(MetricResult::CategoricalCount(s)) => {
            format!("{} categories counted", s.len())
        }
        MetricOutcome::Ready(MetricResult::GroupedMean(s)) => format!("{} group means", s.len()),
        MetricOutcome::Ready(MetricResult::RawNumeric(v)) => format!("{} values", v.len()),
        MetricOutcome::ColumnMissing { column } => format!("column {column} missing"),
        MetricOutcome::NoData { column } => format!("no data for {column}"),
    }
}

fn categorical_counts(table: &ShippingTable, column: &str) -> MetricOutcome {
    match table.text_values(column) {
        None => MetricOutcome::column_missing(column),
        Some(values) => {
            let series = value_counts(&values);
            if series.is_empty() {
                MetricOutcome::no_data(column)
            } else {
                MetricOutcome::Ready(MetricResult::CategoricalCount(series))
            }
        }
    }
}

/// Mean rating per warehouse block, falling back to the rating frequencies
/// when no block has a rated row.
fn rating_summary(table: &ShippingTable) -> MetricOutcome {
    let Some(ratings) = table.numeric_values(CUSTOMER_RATING) else {
        return MetricOutcome::column_missing(CUSTOMER_RATING);
    };

    let has_blocks = table
        .column(WAREHOUSE_BLOCK)
        .is_some_and(|c| c.count_present() > 0);
    if has_blocks {
        let means = grouped_mean(table, WAREHOUSE_BLOCK, CUSTOMER_RATING);
        if !means.is_empty() {
            return MetricOutcome::Ready(MetricResult::GroupedMean(means));
        }
    }

    if ratings.is_empty() {
        return MetricOutcome::no_data(CUSTOMER_RATING);
    }
    let series = numeric_value_counts(&ratings)
        .into_iter()
        .map(|(rating, count)| (format_value(rating), count as f64))
        .collect();
    MetricOutcome::Ready(MetricResult::CategoricalCount(series))
}

fn weight_values(table: &ShippingTable) -> MetricOutcome {
    match table.numeric_values(WEIGHT_IN_GMS) {
        None => MetricOutcome::column_missing(WEIGHT_IN_GMS),
        Some(values) if values.is_empty() => MetricOutcome::no_data(WEIGHT_IN_GMS),
        Some(values) => MetricOutcome::Ready(MetricResult::RawNumeric(values)),
    }
}
