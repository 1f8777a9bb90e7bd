use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building the shipping dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Input file not found; searched: {}", display_paths(.searched))]
    MissingInput { searched: Vec<PathBuf> },

    #[error("Render error: {0}")]
    Render(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for DashboardError
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        DashboardError::Render(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DashboardError::from(io_err);
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_missing_input_lists_searched_paths() {
        let err = DashboardError::MissingInput {
            searched: vec![
                PathBuf::from("data/shipping-data.csv"),
                PathBuf::from("shipping-data.csv"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Input file not found; searched: data/shipping-data.csv, shipping-data.csv"
        );
    }

    #[test]
    fn test_render_error_display() {
        let err = DashboardError::Render("backend gone".to_string());
        assert_eq!(err.to_string(), "Render error: backend gone");
    }

    #[test]
    fn test_config_error_from_conversion() {
        let result: Result<toml::Value, _> = toml::from_str("output_dir = ");
        let err: DashboardError = result.unwrap_err().into();
        assert!(matches!(err, DashboardError::Config(_)));
        assert!(err.to_string().starts_with("Config error"));
    }

    #[test]
    fn test_json_error_from_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("not valid json{{{");
        let err: DashboardError = result.unwrap_err().into();
        assert!(matches!(err, DashboardError::Json(_)));
    }

    #[test]
    fn test_error_is_debug() {
        let err = DashboardError::Render("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Render"));
    }
}
