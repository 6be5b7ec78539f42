use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2, pos2, vec2,
};

use crate::chart::layout::{Axis, ChartLayout, Orient};
use crate::color::to_color32;
use crate::state::AppState;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
const AXIS_FONT: f32 = 10.0;

// ---------------------------------------------------------------------------
// Heat-map canvas (central panel)
// ---------------------------------------------------------------------------

/// Render the headings and the chart canvas, and track hover.
pub fn heatmap(ui: &mut Ui, state: &mut AppState) {
    let Some(chart) = &state.chart else {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.heading(format!("Loading {} …", state.source));
            } else {
                ui.heading("No chart. Reload, or open a dataset (File → Open…)");
            }
        });
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.headings.title);
        ui.label(&chart.headings.description);
    });
    ui.add_space(8.0);

    let size = vec2(chart.width as f32, chart.height as f32);
    let pointer = egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::hover());
            let origin = response.rect.min;
            let text_color = ui.visuals().text_color();

            paint_chart(&painter, origin, chart, text_color);

            response
                .hover_pos()
                .map(|p| ((p.x - origin.x) as f64, (p.y - origin.y) as f64))
                .map(|local| (origin, local))
        })
        .inner;

    state.hover(pointer.map(|(_, local)| local));

    if let Some((origin, _)) = pointer {
        paint_tooltip(ui, origin, state);
    }
}

fn paint_chart(painter: &Painter, origin: Pos2, chart: &ChartLayout, text_color: Color32) {
    let at = |x: f64, y: f64| origin + vec2(x as f32, y as f32);

    for cell in &chart.cells {
        let rect = Rect::from_min_size(at(cell.x, cell.y), vec2(cell.width as f32, cell.height as f32));
        painter.rect_filled(rect, 0.0, to_color32(cell.fill));
    }

    paint_axis(painter, origin, &chart.x_axis, text_color);
    paint_axis(painter, origin, &chart.y_axis, text_color);

    for swatch in &chart.legend.swatches {
        let rect = Rect::from_min_size(at(swatch.x, 0.0), vec2(swatch.width as f32, swatch.height as f32));
        painter.rect_filled(rect, 0.0, to_color32(swatch.fill));
    }
    paint_axis(painter, origin, &chart.legend.axis, text_color);
}

fn paint_axis(painter: &Painter, origin: Pos2, axis: &Axis, color: Color32) {
    let stroke = Stroke::new(1.0, color);
    let font = FontId::proportional(AXIS_FONT);
    let base = origin + vec2(axis.translate.0 as f32, axis.translate.1 as f32);
    let (a0, a1) = (axis.extent.0 as f32, axis.extent.1 as f32);

    match axis.orient {
        Orient::Bottom => {
            painter.line_segment([base + vec2(a0, 0.0), base + vec2(a1, 0.0)], stroke);
            for tick in &axis.ticks {
                let p = base + vec2(tick.position as f32, 0.0);
                painter.line_segment([p, p + vec2(0.0, TICK_SIZE)], stroke);
                painter.text(
                    p + vec2(0.0, TICK_SIZE + TICK_PADDING),
                    Align2::CENTER_TOP,
                    &tick.label,
                    font.clone(),
                    color,
                );
            }
        }
        Orient::Left => {
            painter.line_segment([base + vec2(0.0, a0), base + vec2(0.0, a1)], stroke);
            for tick in &axis.ticks {
                let p = base + vec2(0.0, tick.position as f32);
                painter.line_segment([p, p - vec2(TICK_SIZE, 0.0)], stroke);
                painter.text(
                    p - vec2(TICK_SIZE + TICK_PADDING, 0.0),
                    Align2::RIGHT_CENTER,
                    &tick.label,
                    font.clone(),
                    color,
                );
            }
        }
    }
}

fn paint_tooltip(ui: &Ui, origin: Pos2, state: &AppState) {
    if !state.tooltip.is_visible() {
        return;
    }
    let (left, top) = state.tooltip.position();
    let painter = ui.ctx().layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new(("heatmap_tooltip", state.tooltip.data_year())),
    ));
    let galley = painter.layout_no_wrap(
        state.tooltip.text(),
        FontId::proportional(12.0),
        Color32::WHITE,
    );
    let margin = Vec2::splat(6.0);
    let min = origin + vec2(left as f32, top as f32) + vec2(12.0, 12.0);
    let rect = Rect::from_min_size(min, galley.size() + margin * 2.0);
    painter.rect_filled(rect, 4.0, Color32::from_black_alpha(200));
    painter.galley(pos2(min.x + margin.x, min.y + margin.y), galley, Color32::WHITE);
}
