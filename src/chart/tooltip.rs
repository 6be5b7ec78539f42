use super::layout::{Cell, month_name};

/// Text lines shown when hovering `cell`.
pub fn tooltip_lines(cell: &Cell) -> [String; 3] {
    [
        format!("{} - {}", cell.year, month_name(cell.month)),
        format!("{}℃", one_decimal(cell.temperature)),
        format!("{}℃", signed(one_decimal(cell.variance))),
    ]
}

/// One decimal place, with exact halves rounded away from zero.
///
/// `{:.1}` already rounds the exact binary value correctly; it only differs on
/// true ties, where it picks the even digit. A double sits exactly halfway
/// between two tenths only when it is an odd multiple of 0.25.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value.abs() * 10.0).ceil();
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

fn signed(text: String) -> String {
    if text.starts_with('-') {
        text
    } else {
        format!("+{text}")
    }
}

/// Hover tooltip (`#tooltip`). The only mutable part of a rendered chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    left: f64,
    top: f64,
    data_year: Option<i32>,
    lines: Vec<String>,
}

impl Tooltip {
    /// Mouse entered `cell`: fill in its text and pin the tooltip to it.
    pub fn show(&mut self, cell: &Cell) {
        self.lines = tooltip_lines(cell).into();
        self.left = cell.x;
        self.top = cell.y;
        self.data_year = Some(cell.year);
        self.visible = true;
    }

    /// Mouse left the cell. Content is kept, only visibility changes.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `(left, top)` in canvas pixels.
    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    pub fn data_year(&self) -> Option<i32> {
        self.data_year
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TEMPERATURE_COLORS;

    fn cell(variance: f64) -> Cell {
        Cell {
            year: 1815,
            month: 4,
            variance,
            temperature: 8.66 + variance,
            x: 320.5,
            y: 201.0,
            width: 4.9,
            height: 33.0,
            fill: TEMPERATURE_COLORS[3],
        }
    }

    #[test]
    fn starts_hidden() {
        let tooltip = Tooltip::default();
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.data_year(), None);
    }

    #[test]
    fn hover_shows_year_and_month_name() {
        let mut tooltip = Tooltip::default();
        tooltip.show(&cell(-2.345));
        assert!(tooltip.is_visible());
        assert_eq!(tooltip.data_year(), Some(1815));
        assert_eq!(tooltip.position(), (320.5, 201.0));
        let text = tooltip.text();
        assert!(text.contains("1815"));
        assert!(text.contains("April"));
        assert_eq!(text, "1815 - April\n6.3℃\n-2.3℃");
    }

    #[test]
    fn positive_variance_is_signed() {
        let lines = tooltip_lines(&cell(0.44));
        assert_eq!(lines[2], "+0.4℃");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        let lines = tooltip_lines(&Cell { variance: -0.25, temperature: 7.75, ..cell(0.0) });
        assert_eq!(lines[1], "7.8℃");
        assert_eq!(lines[2], "-0.3℃");
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(-1.75), "-1.8");
    }

    #[test]
    fn near_halves_follow_stored_value() {
        // 0.35 is stored just below 0.35
        assert_eq!(one_decimal(0.35), "0.3");
        assert_eq!(one_decimal(6.315), "6.3");
        assert_eq!(one_decimal(2.0), "2.0");
        let lines = tooltip_lines(&Cell { variance: 0.35, temperature: 9.01, ..cell(0.0) });
        assert_eq!(lines[2], "+0.3℃");
    }

    #[test]
    fn hover_exit_hides() {
        let mut tooltip = Tooltip::default();
        tooltip.show(&cell(0.0));
        tooltip.hide();
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.data_year(), Some(1815));
    }
}
