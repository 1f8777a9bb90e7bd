use std::path::PathBuf;
use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

use crate::error::DashboardError;

/// Family name every chart text style refers to.
pub const FONT_FAMILY: &str = "sans-serif";

/// DejaVu Sans, used when none of the configured fonts loads.
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Where the registered chart font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Bundled,
}

static REGISTERED: OnceLock<Result<FontSource, String>> = OnceLock::new();

/// Register the first loadable font of `paths` under [`FONT_FAMILY`], falling
/// back to the bundled font.
///
/// Registration happens once per process; later calls report the first
/// outcome.
pub fn ensure_font(paths: &[PathBuf]) -> Result<&'static FontSource, DashboardError> {
    REGISTERED
        .get_or_init(|| register_first(paths))
        .as_ref()
        .map_err(|e| DashboardError::Render(e.clone()))
}

fn register_first(paths: &[PathBuf]) -> Result<FontSource, String> {
    for path in paths {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        // plotters keeps registered font data for the life of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                tracing::debug!("registered chart font {}", path.display());
                return Ok(FontSource::File(path.clone()));
            }
            Err(_) => tracing::debug!("skipping unreadable font {}", path.display()),
        }
    }
    tracing::debug!("no configured font loaded; using bundled DejaVu Sans");
    register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT)
        .map(|()| FontSource::Bundled)
        .map_err(|_| "bundled chart font could not be loaded".to_string())
}
