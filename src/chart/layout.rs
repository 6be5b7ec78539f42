use palette::Srgb;

use crate::color::ColorMap;
use crate::data::model::Dataset;
use crate::scale::{BandScale, LinearScale};

// ---------------------------------------------------------------------------
// Canvas geometry
// ---------------------------------------------------------------------------

pub const WIDTH: f64 = 1500.0;
pub const HEIGHT: f64 = 600.0;
pub const PADDING: f64 = 100.0;

pub const LEGEND_DOMAIN: (f64, f64) = (1.7, 13.8);
pub const LEGEND_WIDTH: f64 = 250.0;
pub const LEGEND_SWATCH_HEIGHT: f64 = 15.0;

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

// ---------------------------------------------------------------------------
// Chart elements
// ---------------------------------------------------------------------------

/// One heat-map rectangle (`rect.cell`).
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
    /// `variance + baseTemperature`, exposed as `data-temp`.
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Srgb<u8>,
}

impl Cell {
    /// Zero-based month, exposed as `data-month`.
    pub fn data_month(&self) -> u32 {
        self.month.saturating_sub(1)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Offset along the axis, in the axis group's coordinates.
    pub position: f64,
    pub label: String,
}

/// An axis group: domain line, tick marks and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: Option<&'static str>,
    pub orient: Orient,
    /// Group translation.
    pub translate: (f64, f64),
    /// Extent of the domain line along the axis.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// Temperature interval this swatch stands for.
    pub extent: (f64, f64),
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Srgb<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub axis: Axis,
    pub swatches: Vec<Swatch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Headings {
    pub title: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// ChartLayout – everything the backends draw
// ---------------------------------------------------------------------------

/// The computed chart, independent of how it is drawn.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub headings: Headings,
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

impl ChartLayout {
    pub fn build(dataset: &Dataset) -> Self {
        let base = dataset.base_temperature;
        let colors = ColorMap::default();

        let x_scale = BandScale::new(dataset.distinct_years(), (PADDING, WIDTH - PADDING));
        let y_scale = BandScale::new(1..=12u32, (PADDING, HEIGHT - PADDING)).rounded();
        let legend_scale = LinearScale::new(LEGEND_DOMAIN, (PADDING, PADDING + LEGEND_WIDTH));

        let cells: Vec<Cell> = dataset
            .monthly_variance
            .iter()
            .filter_map(|o| {
                let x = x_scale.apply(&o.year)?;
                let Some(y) = y_scale.apply(&o.month) else {
                    log::warn!("skipping {}-{}: month out of range", o.year, o.month);
                    return None;
                };
                let temperature = o.temperature(base);
                Some(Cell {
                    year: o.year,
                    month: o.month,
                    variance: o.variance,
                    temperature,
                    x,
                    y,
                    width: x_scale.step(),
                    height: y_scale.step(),
                    fill: colors.color_for(temperature),
                })
            })
            .collect();

        log::debug!(
            "layout: {} cells, months {:?}, {} year bands of {:.2}px, month bands of {}px",
            cells.len(),
            dataset.month_extent(),
            x_scale.domain().len(),
            x_scale.step(),
            y_scale.step()
        );

        ChartLayout {
            width: WIDTH,
            height: HEIGHT,
            headings: headings(dataset),
            cells,
            x_axis: year_axis(&x_scale),
            y_axis: month_axis(&y_scale),
            legend: legend(&colors, &legend_scale),
        }
    }

    /// Topmost cell under a canvas point.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        self.cells.iter().rev().find(|c| c.contains(x, y))
    }
}

fn headings(dataset: &Dataset) -> Headings {
    let base = dataset.base_temperature;
    let description = match dataset.year_extent() {
        Some((min, max)) => format!("{min} - {max}: base temperature {base}℃"),
        None => format!("base temperature {base}℃"),
    };
    Headings {
        title: TITLE.to_string(),
        description,
    }
}

fn year_axis(scale: &BandScale<i32>) -> Axis {
    let ticks = scale
        .domain()
        .iter()
        .filter(|year| year.rem_euclid(10) == 0)
        .filter_map(|year| {
            Some(Tick {
                position: scale.center(year)?,
                label: year.to_string(),
            })
        })
        .collect();
    Axis {
        id: Some("x-axis"),
        orient: Orient::Bottom,
        translate: (0.0, HEIGHT - PADDING),
        extent: scale.range(),
        ticks,
    }
}

fn month_axis(scale: &BandScale<u32>) -> Axis {
    let ticks = scale
        .domain()
        .iter()
        .filter_map(|month| {
            Some(Tick {
                position: scale.center(month)?,
                label: month_name(*month).to_string(),
            })
        })
        .collect();
    Axis {
        id: Some("y-axis"),
        orient: Orient::Left,
        translate: (PADDING, 0.0),
        extent: scale.range(),
        ticks,
    }
}

fn legend(colors: &ColorMap, scale: &LinearScale) -> Legend {
    let threshold = colors.scale();
    let (lo, hi) = scale.domain();

    let ticks = threshold
        .cuts()
        .iter()
        .map(|&cut| Tick {
            position: scale.apply(cut),
            label: format!("{cut:.1}"),
        })
        .collect();

    let swatches = (0..threshold.outputs().len())
        .map(|i| {
            let (d0, d1) = threshold.invert_extent(i);
            let (d0, d1) = (d0.unwrap_or(lo), d1.unwrap_or(hi));
            Swatch {
                extent: (d0, d1),
                x: scale.apply(d0),
                width: scale.apply(d1) - scale.apply(d0),
                height: LEGEND_SWATCH_HEIGHT,
                fill: colors.color_for(d0),
            }
        })
        .collect();

    Legend {
        axis: Axis {
            id: None,
            orient: Orient::Bottom,
            translate: (0.0, LEGEND_SWATCH_HEIGHT),
            extent: scale.range(),
            ticks,
        },
        swatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{TEMPERATURE_COLORS, TEMPERATURE_CUTS};
    use crate::data::model::Observation;

    fn dataset(base: f64, obs: &[(i32, u32, f64)]) -> Dataset {
        Dataset {
            base_temperature: base,
            monthly_variance: obs
                .iter()
                .map(|&(year, month, variance)| Observation { year, month, variance })
                .collect(),
        }
    }

    fn full_years(from: i32, to: i32) -> Dataset {
        let obs: Vec<_> = (from..=to)
            .flat_map(|y| (1..=12u32).map(move |m| (y, m, (m as f64 - 6.0) * 0.3)))
            .collect();
        dataset(8.66, &obs)
    }

    #[test]
    fn single_observation_scenario() {
        let layout = ChartLayout::build(&dataset(8.0, &[(2000, 1, -0.5)]));
        assert_eq!(layout.cells.len(), 1);
        let cell = &layout.cells[0];
        assert_eq!(cell.temperature, 7.5);
        assert_eq!(cell.data_month(), 0);
        assert_eq!(cell.fill, TEMPERATURE_COLORS[5]);
        assert_eq!(cell.x, PADDING);
        assert_eq!(cell.width, WIDTH - 2.0 * PADDING);
        assert_eq!(cell.y, 102.0);
        assert_eq!(cell.height, 33.0);
    }

    #[test]
    fn one_cell_per_observation_with_exact_temperature() {
        let ds = full_years(1753, 1770);
        let layout = ChartLayout::build(&ds);
        assert_eq!(layout.cells.len(), ds.len());
        for (cell, obs) in layout.cells.iter().zip(&ds.monthly_variance) {
            assert_eq!(cell.temperature, obs.variance + ds.base_temperature);
            assert_eq!(cell.year, obs.year);
            assert_eq!(cell.data_month(), obs.month - 1);
        }
    }

    #[test]
    fn cells_share_band_sizes() {
        let layout = ChartLayout::build(&full_years(1753, 2015));
        let step = (WIDTH - 2.0 * PADDING) / 263.0;
        assert!(layout.cells.iter().all(|c| (c.width - step).abs() < 1e-9));
        assert!(layout.cells.iter().all(|c| c.height == 33.0));
    }

    #[test]
    fn headings_report_year_range_and_base() {
        let layout = ChartLayout::build(&full_years(1753, 2015));
        assert_eq!(layout.headings.title, TITLE);
        assert_eq!(
            layout.headings.description,
            "1753 - 2015: base temperature 8.66℃"
        );
    }

    #[test]
    fn year_axis_ticks_only_decades() {
        let layout = ChartLayout::build(&full_years(1753, 2015));
        let labels: Vec<&str> = layout.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"1760"));
        assert_eq!(labels.last(), Some(&"2010"));
        assert_eq!(labels.len(), 26);
        assert_eq!(layout.x_axis.translate, (0.0, HEIGHT - PADDING));
    }

    #[test]
    fn month_axis_lists_month_names() {
        let layout = ChartLayout::build(&full_years(2000, 2001));
        let labels: Vec<&str> = layout.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "January");
        assert_eq!(labels[11], "December");
        assert_eq!(layout.y_axis.ticks[0].position, 102.0 + 16.5);
    }

    #[test]
    fn legend_swatches_tile_the_legend_range() {
        let layout = ChartLayout::build(&full_years(2000, 2000));
        let swatches = &layout.legend.swatches;
        assert_eq!(swatches.len(), 11);
        assert_eq!(swatches[0].extent, (LEGEND_DOMAIN.0, TEMPERATURE_CUTS[0]));
        assert_eq!(swatches[10].extent, (TEMPERATURE_CUTS[9], LEGEND_DOMAIN.1));
        assert_eq!(swatches[0].x, PADDING);
        for (i, pair) in swatches.windows(2).enumerate() {
            assert!((pair[0].x + pair[0].width - pair[1].x).abs() < 1e-9, "gap after {i}");
        }
        let last = &swatches[10];
        assert!((last.x + last.width - (PADDING + LEGEND_WIDTH)).abs() < 1e-9);
        for (swatch, color) in swatches.iter().zip(TEMPERATURE_COLORS) {
            assert_eq!(swatch.fill, color);
        }
    }

    #[test]
    fn legend_ticks_sit_on_cut_points() {
        let layout = ChartLayout::build(&full_years(2000, 2000));
        let labels: Vec<&str> = layout.legend.axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            ["2.8", "3.9", "5.0", "6.1", "7.2", "8.3", "9.4", "10.5", "11.6", "12.7"]
        );
    }

    #[test]
    fn cell_at_hits_the_cell_under_the_point() {
        let layout = ChartLayout::build(&dataset(8.0, &[(2000, 1, 0.0), (2001, 3, 1.0)]));
        let second = &layout.cells[1];
        let hit = layout.cell_at(second.x + 1.0, second.y + 1.0).unwrap();
        assert_eq!((hit.year, hit.month), (2001, 3));
        assert!(layout.cell_at(5.0, 5.0).is_none());
    }

    #[test]
    fn out_of_range_month_is_skipped() {
        let layout = ChartLayout::build(&dataset(8.0, &[(2000, 13, 0.0), (2000, 1, 0.0)]));
        assert_eq!(layout.cells.len(), 1);
    }

    #[test]
    fn month_names_cover_the_calendar() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(9), "September");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
