mod csv_io;
mod locate;

pub use csv_io::{read_csv, read_csv_from_bytes};
pub use locate::{default_candidates, locate_input, INPUT_FILE_NAME};
