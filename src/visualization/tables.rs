use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::WeightDistribution;
use crate::models::{Column, MetricKind, MetricOutcome, MetricResult, ShippingTable};

fn styled_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Format an overview of the loaded dataset as a string.
pub fn format_dataset_summary(data: &ShippingTable) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Dataset Summary".bold().green()));
    output.push_str(&format!(
        "{}\n",
        format!("{} rows | {} columns", data.num_rows(), data.num_columns()).dimmed()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = styled_table(vec!["Column", "Type", "Present", "Missing"]);
    for header in data.headers() {
        if let Some(column) = data.column(header) {
            let kind = match column {
                Column::Text(_) => "text",
                Column::Numeric(_) => "numeric",
            };
            let present = column.count_present();
            table.add_row(vec![
                Cell::new(header),
                Cell::new(kind),
                Cell::new(present),
                Cell::new(column.len() - present),
            ]);
        }
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print an overview of the loaded dataset.
pub fn print_dataset_summary(data: &ShippingTable) {
    print!("{}", format_dataset_summary(data));
}

/// Format one metric outcome as a table, or the placeholder message when there is no data.
pub fn format_metric_table(kind: MetricKind, outcome: &MetricOutcome) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", kind.heading().bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let (header, precision, series) = match outcome {
        MetricOutcome::Ready(MetricResult::CategoricalCount(series)) => ("Count", 0, series),
        MetricOutcome::Ready(MetricResult::GroupedMean(series)) => ("Average rating", 2, series),
        MetricOutcome::Ready(MetricResult::RawNumeric(values)) => {
            output.push_str(&format!("  {} values\n", values.len()));
            return output;
        }
        other => {
            let message = other.placeholder_message().unwrap_or_default();
            output.push_str(&format!("  {}\n", message.yellow()));
            return output;
        }
    };

    let mut table = styled_table(vec![kind.source_column(), header]);
    for (label, value) in series {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{value:.precision$}")),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print one metric outcome.
pub fn print_metric_table(kind: MetricKind, outcome: &MetricOutcome) {
    print!("{}", format_metric_table(kind, outcome));
}

/// Format a text-based histogram of the weight distribution as a string.
pub fn format_weight_histogram(dist: &WeightDistribution) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Weight Distribution".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if dist.bins.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let max_count = dist.max_count();
    let bar_width = 40;

    output.push_str(&format!("  {:>15}  {:>6}  Distribution\n", "Weight (gms)", "Count"));
    output.push_str(&format!("  {}\n", "-".repeat(70)));

    for bin in &dist.bins {
        let bar_len = if max_count > 0 {
            ((bin.count as f64 / max_count as f64) * bar_width as f64).round() as usize
        } else {
            0
        };

        let bar = "\u{2588}".repeat(bar_len);

        output.push_str(&format!(
            "  {:>7.0}-{:<7.0}  {:>6}  {}\n",
            bin.lower,
            bin.upper,
            bin.count,
            bar.green()
        ));
    }

    output.push('\n');
    output
}

/// Print a text-based histogram of the weight distribution.
pub fn print_weight_histogram(dist: &WeightDistribution) {
    print!("{}", format_weight_histogram(dist));
}
