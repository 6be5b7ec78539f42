//! Static HTML/SVG export of a [`ChartLayout`].
//!
//! The document keeps the element ids, classes and `data-*` attributes of the
//! interactive chart so it can be inspected by external tooling. A small
//! inline script wires the hover tooltip.

use std::path::Path;

use anyhow::{Context, Result};

use super::layout::{Axis, Cell, ChartLayout, Orient};
use super::tooltip::tooltip_lines;
use crate::color::to_hex;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Write the full HTML page to `path`.
pub fn write_document(path: &Path, layout: &ChartLayout) -> Result<()> {
    std::fs::write(path, render_document(layout))
        .with_context(|| format!("writing chart to {}", path.display()))?;
    log::info!("Exported {} cells to {}", layout.cells.len(), path.display());
    Ok(())
}

/// Render a self-contained HTML page.
pub fn render_document(layout: &ChartLayout) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<div id="chart-container">
    <div id="headings-container">
        <h1 id="title">{title}</h1>
        <h3 id="description">{description}</h3>
    </div>
    <div id="svg-container" style="position: relative;">
{svg}
        <div id="tooltip" class="bar" style="visibility: hidden;"></div>
    </div>
</div>
<script>{js}</script>
</body>
</html>
"#,
        title = escape(&layout.headings.title),
        description = escape(&layout.headings.description),
        css = INLINE_CSS,
        js = INLINE_JS,
        svg = render_svg(layout),
    )
}

/// Render only the `<svg>` element.
pub fn render_svg(layout: &ChartLayout) -> String {
    let mut out = String::with_capacity(layout.cells.len() * 220 + 4096);
    push_line(&mut out, &format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        layout.width, layout.height
    ));

    for cell in &layout.cells {
        render_cell(&mut out, cell);
    }

    render_axis(&mut out, &layout.x_axis);
    render_axis(&mut out, &layout.y_axis);

    out.push_str("<g id=\"legend\">\n");
    render_axis(&mut out, &layout.legend.axis);
    for swatch in &layout.legend.swatches {
        push_line(&mut out, &format!(
            r#"<rect height="{}" width="{}" x="{}" fill="{}"><title>{:.1} – {:.1}℃</title></rect>"#,
            swatch.height,
            swatch.width,
            swatch.x,
            to_hex(swatch.fill),
            swatch.extent.0,
            swatch.extent.1,
        ));
    }
    out.push_str("</g>\n</svg>");
    out
}

fn render_cell(out: &mut String, cell: &Cell) {
    let lines = tooltip_lines(cell);
    push_line(out, &format!(
        r#"<rect class="cell" data-month="{}" data-year="{}" data-temp="{}" width="{}" height="{}" x="{}" y="{}" fill="{}" data-tooltip="{}"><title>{}</title></rect>"#,
        cell.data_month(),
        cell.year,
        cell.temperature,
        cell.width,
        cell.height,
        cell.x,
        cell.y,
        to_hex(cell.fill),
        escape(&lines.join("<br>")),
        escape(&lines.join("\n")),
    ));
}

fn render_axis(out: &mut String, axis: &Axis) {
    let (tx, ty) = axis.translate;
    let id = axis.id.map(|id| format!(r#" id="{id}""#)).unwrap_or_default();
    let (x0, x1) = axis.extent;
    let (anchor, domain) = match axis.orient {
        Orient::Bottom => ("middle", format!("M{x0},{TICK_SIZE}V0H{x1}V{TICK_SIZE}")),
        Orient::Left => ("end", format!("M-{TICK_SIZE},{x0}H0V{x1}H-{TICK_SIZE}")),
    };
    push_line(out, &format!(
        r#"<g transform="translate({tx}, {ty})"{id} fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#
    ));
    push_line(out, &format!(
        r#"<path class="domain" stroke="currentColor" d="{domain}"></path>"#
    ));
    let label_offset = TICK_SIZE + TICK_PADDING;
    for tick in &axis.ticks {
        let pos = tick.position;
        let label = escape(&tick.label);
        let markup = match axis.orient {
            Orient::Bottom => format!(
                r#"<g class="tick" transform="translate({pos},0)"><line stroke="currentColor" y2="{TICK_SIZE}"></line><text fill="currentColor" y="{label_offset}" dy="0.71em">{label}</text></g>"#
            ),
            Orient::Left => format!(
                r#"<g class="tick" transform="translate(0,{pos})"><line stroke="currentColor" x2="-{TICK_SIZE}"></line><text fill="currentColor" x="-{label_offset}" dy="0.32em">{label}</text></g>"#
            ),
        };
        push_line(out, &markup);
    }
    out.push_str("</g>\n");
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INLINE_CSS: &str = r#"
body { font-family: sans-serif; }
#headings-container { text-align: center; }
#tooltip { position: absolute; padding: 6px 8px; background: rgba(0, 0, 0, 0.75);
  color: #fff; border-radius: 4px; font-size: 12px; pointer-events: none; }
.cell:hover { stroke: #000; stroke-width: 1; }
"#;

const INLINE_JS: &str = r#"
const tooltip = document.getElementById('tooltip');
document.querySelectorAll('#svg-container rect.cell').forEach((cell) => {
  cell.addEventListener('mouseover', () => {
    tooltip.innerHTML = cell.dataset.tooltip;
    tooltip.style.top = cell.getAttribute('y') + 'px';
    tooltip.style.left = cell.getAttribute('x') + 'px';
    tooltip.setAttribute('data-year', cell.dataset.year);
    tooltip.style.visibility = 'visible';
  });
  cell.addEventListener('mouseout', () => {
    tooltip.style.visibility = 'hidden';
  });
});
"#;
