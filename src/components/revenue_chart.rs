use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::data::{REVENUE_CEILING, REVENUE_DATA, REVENUE_SERIES};

#[function_component(RevenueChart)]
pub fn revenue_chart() -> Html {
    let canvas_ref = use_node_ref();

    // Draw once at mount; the projection table is static.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let _ = draw_projection(canvas);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="revenue-chart">
            <canvas
                ref={canvas_ref}
                width="900"
                height="480"
                style="max-width: 100%;"
            />
        </div>
    }
}

/// Stacked area chart of the four revenue series. Best-effort: any backend
/// failure aborts the draw and leaves the canvas blank.
fn draw_projection(canvas: HtmlCanvasElement) -> Option<()> {
    let context = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()?;
    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    canvas.set_width(900);
    canvas.set_height(480);

    let backend = CanvasBackend::with_canvas_object(canvas)?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).ok()?;

    let last = (REVENUE_DATA.len() - 1) as f64;
    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..last, 0f64..REVENUE_CEILING)
        .ok()?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(RGBColor(240, 240, 240))
        .x_labels(REVENUE_DATA.len())
        .x_label_formatter(&|x| {
            REVENUE_DATA
                .get(x.round() as usize)
                .map(|point| point.period.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("€{}M", *y as i64))
        .draw()
        .ok()?;

    // Draw cumulative layers top-down so each band keeps its series color.
    for (idx, series) in REVENUE_SERIES.iter().enumerate().rev() {
        let (r, g, b) = series.color;
        let color = RGBColor(r, g, b);
        let points: Vec<(f64, f64)> = REVENUE_DATA
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.revenue[..=idx].iter().sum::<f64>()))
            .collect();
        chart
            .draw_series(
                AreaSeries::new(points, 0.0, color.mix(0.8)).border_style(color.stroke_width(3)),
            )
            .ok()?;
    }

    root.present().ok()
}
