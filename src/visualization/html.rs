use std::path::{Path, PathBuf};

use crate::error::DashboardError;
use crate::models::MetricKind;

/// File name of the dashboard page inside the output directory.
pub const INDEX_FILE_NAME: &str = "index.html";

const STYLE: &str = r#"    body { font-family: Arial, Helvetica, sans-serif; margin: 20px; background: #f7f7f7; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px; max-width: 1100px; margin: 0 auto; }
    .card { background: white; padding: 12px; border-radius: 6px; box-shadow: 0 1px 6px rgba(0,0,0,0.06); }
    img { max-width: 100%; height: auto; display: block; margin: 0 auto; }
    h1 { text-align: center; font-size: 20px; }
"#;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Build the dashboard page: one card per chart, each image referenced by its
/// bare file name so the page works wherever the output directory is served from.
pub fn compose_index(charts: &[MetricKind]) -> String {
    let mut cards = String::new();
    for kind in charts {
        let heading = escape(kind.heading());
        cards.push_str(&format!(
            "    <div class=\"card\"><h3>{heading}</h3><img src=\"{src}\" alt=\"{alt}\"></div>\n",
            src = escape(&kind.file_name()),
            alt = heading.to_lowercase(),
        ));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Shipping Dashboard</title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <style>
{STYLE}  </style>
</head>
<body>
  <h1>Shipping Dashboard</h1>
  <div class="grid">
{cards}  </div>
  <footer style="text-align:center; margin-top:14px; color:#666;">Generated by shipping-dashboard</footer>
</body>
</html>
"#
    )
}

/// Write the dashboard page into `output_dir`, replacing any previous version.
pub fn write_index(output_dir: &Path, charts: &[MetricKind]) -> Result<PathBuf, DashboardError> {
    let path = output_dir.join(INDEX_FILE_NAME);
    std::fs::write(&path, compose_index(charts))?;
    Ok(path)
}
