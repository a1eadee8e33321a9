/// Data layer: core types, loading, selection, filtering and aggregation.
///
/// Architecture:
/// ```text
///  cleaned_growth_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → GrowthDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ GrowthDataset  │  Vec<GrowthRow>, indicator index, year bounds
///   └───────────────┘
///        │            ◄── selection: raw picks → validated Selection
///        ▼
///   ┌──────────┐
///   │  filter   │  indicator set + inclusive years → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary  │  group by indicator → mean / max / min
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod selection;
pub mod summary;
