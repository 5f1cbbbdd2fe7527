// =============================================================================
// Market data module — daily bar series model
// =============================================================================

pub mod series;

pub use series::{Bar, BarSeries};
