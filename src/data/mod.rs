/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  HTTP GET / .json file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  one request, JSON → Dataset (or LoadError)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  baseTemperature + Vec<Observation>, immutable
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
