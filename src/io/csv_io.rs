use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::DashboardError;
use crate::models::{is_na, Column, ShippingTable, CUSTOMER_RATING, WEIGHT_IN_GMS};

/// Columns coerced to numbers on load.
const NUMERIC_COLUMNS: [&str; 2] = [CUSTOMER_RATING, WEIGHT_IN_GMS];

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

/// Trim headers and suffix repeated names with `.1`, `.2`, ...
fn normalize_headers(raw: &csv::StringRecord) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    raw.iter()
        .map(|h| {
            let base = h.trim().to_string();
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

fn parse_csv_records<R: Read>(
    rdr: &mut csv::Reader<R>,
    name: &str,
) -> Result<ShippingTable, DashboardError> {
    let headers = normalize_headers(rdr.headers()?);
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

    for result in rdr.records() {
        let record = result?;
        for (idx, column) in cells.iter_mut().enumerate() {
            let value = record
                .get(idx)
                .filter(|raw| !is_na(raw))
                .map(str::to_string);
            column.push(value);
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(header, values)| (header, Column::Text(values)))
        .collect();

    let table = NUMERIC_COLUMNS
        .iter()
        .fold(ShippingTable::from_columns(name, columns), |table, header| {
            table.coerce_numeric(header)
        });

    tracing::debug!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "loaded table {name}"
    );
    Ok(table)
}

/// Read a shipping table from a CSV file.
pub fn read_csv(path: impl AsRef<Path>) -> Result<ShippingTable, DashboardError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let mut rdr = csv_reader(file);
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    parse_csv_records(&mut rdr, &name)
}

/// Read a shipping table from CSV bytes.
pub fn read_csv_from_bytes(data: &[u8], name: &str) -> Result<ShippingTable, DashboardError> {
    let mut rdr = csv_reader(data);
    parse_csv_records(&mut rdr, name)
}
