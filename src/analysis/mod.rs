//! Statistics computed from a [`Subset`](crate::data::model::Subset):
//! per-field summaries, the Pearson correlation matrix and the ranking of
//! its strongest pairs. Everything here works at full precision; rounding
//! happens only when the report is formatted.

pub mod correlation;
pub mod ranking;
pub mod stats;
