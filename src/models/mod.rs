mod metric;
mod table;

pub use metric::{
    MetricKind, MetricOutcome, MetricResult, Series, CUSTOMER_RATING, MODE_OF_SHIPMENT,
    WAREHOUSE_BLOCK, WEIGHT_IN_GMS,
};
pub use table::{coerce_number, format_value, is_na, Column, ShippingTable, NA_VALUES};
