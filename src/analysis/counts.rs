use std::collections::HashMap;

use crate::models::Series;

/// Count occurrences of each trimmed value, most frequent first.
///
/// Ties keep the order in which the values first appear.
pub fn value_counts<I, S>(values: I) -> Series
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for value in values {
        let key = value.as_ref().trim();
        match counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                counts.insert(key.to_string(), 1);
                order.push(key.to_string());
            }
        }
    }

    let mut series: Series = order
        .into_iter()
        .map(|key| {
            let count = counts[&key] as f64;
            (key, count)
        })
        .collect();
    series.sort_by(|a, b| b.1.total_cmp(&a.1));
    series
}

/// Count occurrences of each number, smallest value first.
pub fn numeric_value_counts(values: &[f64]) -> Vec<(f64, usize)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut counts: Vec<(f64, usize)> = Vec::new();
    for v in sorted {
        match counts.last_mut() {
            Some((last, n)) if *last == v => *n += 1,
            _ => counts.push((v, 1)),
        }
    }
    counts
}
