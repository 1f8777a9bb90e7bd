use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::io::default_candidates;

/// Chart rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of bins for the weight histogram
    pub histogram_bins: usize,
    /// TrueType fonts tried in order for chart text before the bundled one
    pub font_paths: Vec<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        // 6 x 4.5 inches at 150 dpi
        Self {
            width: 900,
            height: 675,
            histogram_bins: 30,
            font_paths: default_font_paths(),
        }
    }
}

fn default_font_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Settings for a dashboard run. Every field defaults to the fixed layout:
/// input searched in `data/`, `files/input/` and `.`, output written to `docs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Input files tried in order; the first that exists is used
    pub input_candidates: Vec<PathBuf>,
    /// Directory receiving the charts and `index.html`
    pub output_dir: PathBuf,
    pub chart: ChartConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_candidates: default_candidates(),
            output_dir: PathBuf::from("docs"),
            chart: ChartConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, DashboardError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}
