pub mod heatmap;
pub mod panels;
