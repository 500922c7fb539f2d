/// Data layer: reading types and the CSV loader.
///
/// Architecture:
/// ```text
///   humidity.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  field 1 of every row → i64
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ ReadingSequence  │  row order = x axis
///   └─────────────────┘
/// ```

pub mod loader;
pub mod model;
