//! Monthly bar chart
//!
//! Drawn straight onto a canvas whenever the buckets change. The layout math
//! is kept apart from the drawing calls.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use almazara::format::format_number;
use almazara::stats::MonthBucket;

const BAR_COLOR: &str = "#84a93a";
const BACKGROUND: &str = "#1f2937";
const GRID_COLOR: &str = "#374151";
const LABEL_COLOR: &str = "#9ca3af";

/// One bar per month
#[component]
pub fn BarChart(
    #[prop(into)]
    title: String,
    #[prop(into)]
    buckets: Signal<Vec<MonthBucket>>,
    /// Unit appended to the axis labels, e.g. "€" or "kg"
    #[prop(default = "")]
    unit: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let buckets = buckets.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &buckets, unit);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-6 border border-gray-700">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-64 rounded-lg"
            />
        </div>
    }
}

/// Plot area inside the canvas, leaving room for the axis labels
#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    const GUTTER_LEFT: f64 = 80.0;
    const GUTTER_RIGHT: f64 = 20.0;
    const GUTTER_TOP: f64 = 20.0;
    const GUTTER_BOTTOM: f64 = 40.0;
    const GRID_STEPS: usize = 4;

    fn inside(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            left: Self::GUTTER_LEFT,
            top: Self::GUTTER_TOP,
            width: (canvas_width - Self::GUTTER_LEFT - Self::GUTTER_RIGHT).max(0.0),
            height: (canvas_height - Self::GUTTER_TOP - Self::GUTTER_BOTTOM).max(0.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// `(x, y, w, h)` of bar `index` out of `count`, scaled against `max`
    fn bar(&self, index: usize, count: usize, value: f64, max: f64) -> (f64, f64, f64, f64) {
        let slot = self.width / count as f64;
        let w = slot * 0.6;
        let h = if max > 0.0 { (value / max).clamp(0.0, 1.0) * self.height } else { 0.0 };
        let x = self.left + index as f64 * slot + (slot - w) / 2.0;
        (x, self.bottom() - h, w, h)
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, buckets: &[MonthBucket], unit: &str) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let (canvas_w, canvas_h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let plot = Plot::inside(canvas_w, canvas_h);

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, canvas_w, canvas_h);

    let max = buckets.iter().map(|b| b.total).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("15px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data in the last 12 months", canvas_w / 2.0, canvas_h / 2.0);
        ctx.set_text_align("start");
        return;
    }

    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_font("12px sans-serif");
    for step in 0..=Plot::GRID_STEPS {
        let share = step as f64 / Plot::GRID_STEPS as f64;
        let y = plot.top + share * plot.height;
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.left + plot.width, y);
        ctx.stroke();

        ctx.set_fill_style(&LABEL_COLOR.into());
        let label = format!("{} {}", format_number(max * (1.0 - share), 0), unit);
        let _ = ctx.fill_text(label.trim_end(), 5.0, y + 4.0);
    }

    for (i, bucket) in buckets.iter().enumerate() {
        let (x, y, w, h) = plot.bar(i, buckets.len(), bucket.total, max);
        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x, y, w, h);

        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&bucket.label, x, plot.bottom() + 25.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_leaves_gutters() {
        let plot = Plot::inside(800.0, 320.0);
        assert_eq!(plot.left, 80.0);
        assert_eq!(plot.width, 700.0);
        assert_eq!(plot.height, 260.0);
        assert_eq!(plot.bottom(), 280.0);
    }

    #[test]
    fn test_tallest_bar_fills_plot() {
        let plot = Plot::inside(800.0, 320.0);
        let (_, y, _, h) = plot.bar(3, 12, 50.0, 50.0);
        assert_eq!(h, plot.height);
        assert_eq!(y, plot.top);

        let (_, _, _, half) = plot.bar(4, 12, 25.0, 50.0);
        assert_eq!(half, plot.height / 2.0);
    }

    #[test]
    fn test_bars_do_not_overlap() {
        let plot = Plot::inside(800.0, 320.0);
        let (x0, _, w0, _) = plot.bar(0, 12, 1.0, 1.0);
        let (x1, _, _, _) = plot.bar(1, 12, 1.0, 1.0);
        assert!(x0 >= plot.left);
        assert!(x0 + w0 < x1);
    }
}
