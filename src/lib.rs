// Estate Insights - Core Library
// Exposes the load → clean → aggregate → chart pipeline for the CLI and tests

pub mod aggregate;
pub mod charts;
pub mod cleaning;
pub mod record;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use aggregate::{
    correlation_matrix, property_type_totals, residential_breakdown, restrict_to_towns,
    top_towns, town_counts, town_mean_ratio, town_sale_totals, yearly_totals,
    CorrelationMatrix, ResidentialBreakdown, YearlySales, TOP_PROPERTY_TYPES, TOP_TOWNS,
};
pub use charts::{render_all, ChartData, COMPLETE_DASHBOARD};
pub use cleaning::{clean, is_valid, CleanReport, Sale, MILLION, OUTLIER_Z_LIMIT};
pub use record::{load_csv, RawSale};
pub use report::DatasetOverview;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
