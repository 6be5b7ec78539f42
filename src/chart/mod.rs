/// Chart layer: scales applied to a dataset, and the ways it is drawn.
///
/// ```text
///   Dataset
///      │
///      ▼
///   ┌──────────────┐
///   │    layout     │  band/threshold/linear scales → cells, axes, legend
///   └──────────────┘
///      │        │
///      ▼        ▼
///   ui::heatmap  svg      egui canvas with hover, or static HTML/SVG page
///      │
///      ▼
///   tooltip               hover state shared by both
/// ```

pub mod layout;
pub mod svg;
pub mod tooltip;
