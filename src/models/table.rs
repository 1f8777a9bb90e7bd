use serde::{Deserialize, Serialize};

/// Cell contents treated as missing when a table is loaded.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell should be read as a missing value.
pub fn is_na(raw: &str) -> bool {
    NA_VALUES.contains(&raw)
}

/// Best-effort numeric coercion. Anything that does not parse as a finite
/// number becomes missing.
pub fn coerce_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a number the way it should appear as a category label:
/// whole values without a fractional part, everything else in shortest form.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// A single column of the shipping table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Text(Vec<Option<String>>),
    Numeric(Vec<Option<f64>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Numeric(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell `row` as text, `None` when missing.
    pub fn text(&self, row: usize) -> Option<String> {
        match self {
            Column::Text(v) => v.get(row).cloned().flatten(),
            Column::Numeric(v) => v.get(row).copied().flatten().map(format_value),
        }
    }

    /// Cell `row` as a number, `None` when missing or when the column was never coerced.
    pub fn number(&self, row: usize) -> Option<f64> {
        match self {
            Column::Text(_) => None,
            Column::Numeric(v) => v.get(row).copied().flatten(),
        }
    }

    /// Number of non-missing cells.
    pub fn count_present(&self) -> usize {
        match self {
            Column::Text(v) => v.iter().filter(|c| c.is_some()).count(),
            Column::Numeric(v) => v.iter().filter(|c| c.is_some()).count(),
        }
    }

    /// Convert a text column into a numeric one; unparseable cells become missing.
    fn coerced(self) -> Column {
        match self {
            Column::Text(v) => Column::Numeric(
                v.into_iter()
                    .map(|c| c.as_deref().and_then(coerce_number))
                    .collect(),
            ),
            numeric => numeric,
        }
    }
}

/// The loaded shipping dataset.
///
/// Columns are addressed by their trimmed header name. Once built the table is
/// only ever read; metrics derive their own views from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingTable {
    /// Name or identifier for this table (usually the source file stem)
    pub name: String,
    headers: Vec<String>,
    columns: Vec<Column>,
    num_rows: usize,
}

impl ShippingTable {
    /// Build a table from named columns. Shorter columns are padded with
    /// missing cells so every column has the same length.
    pub fn from_columns(name: impl Into<String>, columns: Vec<(String, Column)>) -> Self {
        let num_rows = columns.iter().map(|(_, c)| c.len()).max().unwrap_or(0);
        let (headers, columns) = columns
            .into_iter()
            .map(|(header, column)| (header, pad(column, num_rows)))
            .unzip();
        Self {
            name: name.into(),
            headers,
            columns,
            num_rows,
        }
    }

    /// Replace the named text column by its numeric coercion. Absent columns are left absent.
    pub(crate) fn coerce_numeric(mut self, header: &str) -> Self {
        if let Some(idx) = self.position(header) {
            let column = std::mem::replace(&mut self.columns[idx], Column::Numeric(Vec::new()));
            self.columns[idx] = column.coerced();
        }
        self
    }

    fn position(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn has_column(&self, header: &str) -> bool {
        self.position(header).is_some()
    }

    pub fn column(&self, header: &str) -> Option<&Column> {
        self.position(header).map(|idx| &self.columns[idx])
    }

    /// Non-missing values of a column as text, in row order.
    pub fn text_values(&self, header: &str) -> Option<Vec<String>> {
        let column = self.column(header)?;
        Some((0..column.len()).filter_map(|row| column.text(row)).collect())
    }

    /// Non-missing values of a numeric column, in row order.
    pub fn numeric_values(&self, header: &str) -> Option<Vec<f64>> {
        let column = self.column(header)?;
        Some((0..column.len()).filter_map(|row| column.number(row)).collect())
    }
}

fn pad(column: Column, len: usize) -> Column {
    match column {
        Column::Text(mut v) => {
            v.resize(len, None);
            Column::Text(v)
        }
        Column::Numeric(mut v) => {
            v.resize(len, None);
            Column::Numeric(v)
        }
    }
}
