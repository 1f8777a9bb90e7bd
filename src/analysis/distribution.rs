use serde::{Deserialize, Serialize};

/// A single bin of the weight histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBin {
    /// Lower edge of the bin (inclusive)
    pub lower: f64,
    /// Upper edge of the bin (exclusive, inclusive for the last bin)
    pub upper: f64,
    /// Midpoint of the bin
    pub midpoint: f64,
    /// Number of values in this bin
    pub count: usize,
}

/// Equal-width frequency histogram of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDistribution {
    /// Width of each bin
    pub bin_width: f64,
    /// The bins, lowest first; empty bins are kept
    pub bins: Vec<WeightBin>,
}

impl WeightDistribution {
    /// Bucket `values` into `num_bins` equal-width bins spanning `[min, max]`.
    ///
    /// When every value is identical the range is widened to `value ± 0.5`.
    /// Returns no bins for an empty input or `num_bins == 0`.
    pub fn from_values(values: &[f64], num_bins: usize) -> Self {
        if values.is_empty() || num_bins == 0 {
            return WeightDistribution {
                bin_width: 0.0,
                bins: Vec::new(),
            };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (start, end) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let bin_width = (end - start) / num_bins as f64;

        let mut counts = vec![0usize; num_bins];
        for v in values {
            let idx = (((v - start) / bin_width).floor() as usize).min(num_bins - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let lower = start + i as f64 * bin_width;
                let upper = if i + 1 == num_bins {
                    end
                } else {
                    start + (i + 1) as f64 * bin_width
                };
                WeightBin {
                    lower,
                    upper,
                    midpoint: (lower + upper) / 2.0,
                    count,
                }
            })
            .collect();

        WeightDistribution { bin_width, bins }
    }

    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Span covered by the bins, `None` when there are no bins.
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.lower, self.bins.last()?.upper))
    }
}
