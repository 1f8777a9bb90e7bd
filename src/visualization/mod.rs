mod charts;
mod fonts;
mod html;
mod tables;

pub use charts::{ChartLabels, ChartRenderer, RenderMode};
pub use fonts::{ensure_font, FontSource, FONT_FAMILY};
pub use html::{compose_index, write_index, INDEX_FILE_NAME};
pub use tables::{
    format_dataset_summary, format_metric_table, format_weight_histogram, print_dataset_summary,
    print_metric_table, print_weight_histogram,
};
