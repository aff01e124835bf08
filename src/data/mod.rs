/// Data layer: core types, generation, and window selection.
///
/// Architecture:
/// ```text
///   AnalysisConfig (seed, distributions)
///        │
///        ▼
///   ┌───────────┐
///   │ generator │  seeded normal draws → clamped Dataset
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Record>, immutable, recency ordered
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  subset  │  last N rows (clamped) → owned Subset
///   └──────────┘
/// ```

pub mod generator;
pub mod model;
pub mod subset;
