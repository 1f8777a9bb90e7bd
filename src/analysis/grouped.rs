use std::collections::BTreeMap;

use statrs::statistics::Statistics;

use crate::models::{Series, ShippingTable};

/// Mean of `value_column` for each distinct raw value of `group_column`.
///
/// Keys are taken as written, so `" A"` and `"A"` are separate groups.
///
/// Rows where either cell is missing are skipped. The result is ordered by
/// mean, highest first; equal means are ordered by label. Returns an empty
/// series when either column is absent or no row has both values.
pub fn grouped_mean(table: &ShippingTable, group_column: &str, value_column: &str) -> Series {
    let (Some(groups), Some(values)) = (table.column(group_column), table.column(value_column))
    else {
        return Vec::new();
    };

    let mut buckets: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for row in 0..table.num_rows() {
        if let (Some(key), Some(value)) = (groups.text(row), values.number(row)) {
            buckets.entry(key.to_string()).or_default().push(value);
        }
    }

    let mut series: Series = buckets
        .into_iter()
        .map(|(key, group)| (key, group.iter().mean()))
        .collect();
    series.sort_by(|a, b| b.1.total_cmp(&a.1));
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    use crate::models::Column;

    fn table(blocks: &[Option<&str>], ratings: &[Option<f64>]) -> ShippingTable {
        ShippingTable::from_columns(
            "t",
            vec![
                (
                    "Warehouse_block".to_string(),
                    Column::Text(blocks.iter().map(|b| b.map(str::to_string)).collect()),
                ),
                (
                    "Customer_rating".to_string(),
                    Column::Numeric(ratings.to_vec()),
                ),
            ],
        )
    }

    #[test]
    fn test_grouped_mean_ordering() {
        let t = table(
            &[Some("A"), Some("B"), Some("A"), Some("C"), Some("B")],
            &[Some(2.0), Some(5.0), Some(3.0), Some(1.0), Some(4.0)],
        );
        let series = grouped_mean(&t, "Warehouse_block", "Customer_rating");
        let labels: Vec<&str> = series.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
        assert_approx_eq!(series[0].1, 4.5);
        assert_approx_eq!(series[1].1, 2.5);
        assert_approx_eq!(series[2].1, 1.0);
    }

    #[test]
    fn test_grouped_mean_skips_incomplete_rows() {
        let t = table(
            &[Some("A"), None, Some("B"), Some("A")],
            &[Some(4.0), Some(1.0), None, Some(2.0)],
        );
        let series = grouped_mean(&t, "Warehouse_block", "Customer_rating");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].0, "A");
        assert_approx_eq!(series[0].1, 3.0);
    }

    #[test]
    fn test_grouped_mean_no_overlap_is_empty() {
        let t = table(&[Some("A"), None], &[None, Some(3.0)]);
        assert!(grouped_mean(&t, "Warehouse_block", "Customer_rating").is_empty());
    }

    #[test]
    fn test_grouped_mean_absent_column_is_empty() {
        let t = table(&[Some("A")], &[Some(3.0)]);
        assert!(grouped_mean(&t, "Mode_of_Shipment", "Customer_rating").is_empty());
    }

    #[test]
    fn test_grouped_mean_equal_means_by_label() {
        let t = table(&[Some("D"), Some("B")], &[Some(3.0), Some(3.0)]);
        let series = grouped_mean(&t, "Warehouse_block", "Customer_rating");
        assert_eq!(series[0].0, "B");
        assert_eq!(series[1].0, "D");
    }

    #[test]
    fn test_grouped_mean_keeps_untrimmed_keys_apart() {
        let t = table(&[Some("A"), Some(" A")], &[Some(1.0), Some(5.0)]);
        let series = grouped_mean(&t, "Warehouse_block", "Customer_rating");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, " A");
        assert_approx_eq!(series[0].1, 5.0);
        assert_eq!(series[1].0, "A");
        assert_approx_eq!(series[1].1, 1.0);
    }
}
