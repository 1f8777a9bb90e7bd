use std::path::{Path, PathBuf};

use crate::error::DashboardError;

/// File name searched for in every candidate directory.
pub const INPUT_FILE_NAME: &str = "shipping-data.csv";

/// Default search order: `data/`, `files/input/`, then the working directory.
pub fn default_candidates() -> Vec<PathBuf> {
    vec![
        Path::new("data").join(INPUT_FILE_NAME),
        Path::new("files").join("input").join(INPUT_FILE_NAME),
        PathBuf::from(INPUT_FILE_NAME),
    ]
}

/// Return the first candidate that exists.
pub fn locate_input(candidates: &[PathBuf]) -> Result<PathBuf, DashboardError> {
    match candidates.iter().find(|p| p.exists()) {
        Some(found) => {
            tracing::debug!("using input file {}", found.display());
            Ok(found.clone())
        }
        None => Err(DashboardError::MissingInput {
            searched: candidates.to_vec(),
        }),
    }
}
