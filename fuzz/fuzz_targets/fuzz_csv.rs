#![no_main]

use libfuzzer_sys::fuzz_target;
use shipping_dashboard::{analysis::WeightDistribution, compute_metric, io, MetricKind};
use shipping_dashboard::models::{MetricOutcome, MetricResult};

fuzz_target!(|data: &[u8]| {
    let Ok(table) = io::read_csv_from_bytes(data, "fuzz") else {
        return;
    };
    for kind in MetricKind::ALL {
        if let MetricOutcome::Ready(MetricResult::RawNumeric(values)) = compute_metric(&table, kind) {
            let dist = WeightDistribution::from_values(&values, 30);
            assert_eq!(dist.total_count(), values.len());
        }
    }
});
