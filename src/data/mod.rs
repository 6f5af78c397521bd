/// Data layer: core types, loading, and column extraction.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → StatDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ StatDataset  │  Vec<Row>, column index
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  two named columns → aligned numeric vectors
///   └──────────┘
/// ```

pub mod extract;
pub mod loader;
pub mod model;
