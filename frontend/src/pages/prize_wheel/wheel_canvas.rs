use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use wheel_core::collaborators::WheelRenderer;
use wheel_core::geometry::slice_arc;
use wheel_core::slices::Slice;

// Wedge palette: the payout sign picks the family, the highlight state
// picks the variant.
const RED_BASE: &str = "#d00000";
const RED_HIGHLIGHT: &str = "#ff5f5f";
const GOLD_BASE: &str = "#ffca28";
const GOLD_HIGHLIGHT: &str = "#ffe066";
const POINTER_COLOR: &str = "#ffc600";

fn wedge_color(slice: &Slice, is_highlight: bool) -> &'static str {
    let negative = slice.payout.is_some_and(|amount| amount < 0);
    match (negative, is_highlight) {
        (true, true) => RED_HIGHLIGHT,
        (true, false) => RED_BASE,
        (false, true) => GOLD_HIGHLIGHT,
        (false, false) => GOLD_BASE,
    }
}

/// `WheelRenderer` that paints onto the page's canvas element. Rendering
/// before the canvas mounts is a silent no-op; the mount effect repaints.
pub struct CanvasRenderer {
    canvas: NodeRef,
}

impl CanvasRenderer {
    pub fn new(canvas: NodeRef) -> Self {
        Self { canvas }
    }

    fn context(&self) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let canvas = self.canvas.cast::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some((canvas, context))
    }
}

impl WheelRenderer for CanvasRenderer {
    fn render(&mut self, angle: f64, slices: &[Slice], highlighted: usize) {
        let Some((canvas, ctx)) = self.context() else {
            return;
        };
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let outside_radius = width / 2.0 - 10.0;

        ctx.clear_rect(0.0, 0.0, width, height);

        let arc = slice_arc(slices.len());
        for (index, slice) in slices.iter().enumerate() {
            let wedge_start = angle + index as f64 * arc;

            ctx.set_fill_style_str(wedge_color(slice, index == highlighted));
            ctx.begin_path();
            ctx.move_to(center_x, center_y);
            let _ = ctx.arc(center_x, center_y, outside_radius, wedge_start, wedge_start + arc);
            ctx.line_to(center_x, center_y);
            ctx.fill();

            ctx.set_stroke_style_str("black");
            ctx.set_line_width(1.0);
            ctx.stroke();

            // Label along the wedge's bisector, rotated to read outward.
            ctx.save();
            let text_angle = wedge_start + arc / 2.0;
            let text_radius = outside_radius * 0.68;
            let _ = ctx.translate(
                center_x + text_angle.cos() * text_radius,
                center_y + text_angle.sin() * text_radius,
            );
            let _ = ctx.rotate(text_angle);
            let font_size = (outside_radius / 7.0).floor();
            ctx.set_font(&format!("600 {font_size}px Poppins, Arial"));
            ctx.set_fill_style_str(if slice.payout.is_some_and(|amount| amount < 0) {
                "#ffffff"
            } else {
                "#000000"
            });
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            let _ = ctx.fill_text(&slice.label, 0.0, 0.0);
            ctx.restore();
        }

        // Fixed pointer at the top of the wheel.
        ctx.set_fill_style_str(POINTER_COLOR);
        ctx.begin_path();
        ctx.move_to(center_x - 10.0, center_y - (outside_radius + 10.0));
        ctx.line_to(center_x + 10.0, center_y - (outside_radius + 10.0));
        ctx.line_to(center_x, center_y - (outside_radius - 5.0));
        ctx.close_path();
        ctx.fill();
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub canvas_ref: NodeRef,
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    html! {
        <canvas
            ref={props.canvas_ref.clone()}
            width="450"
            height="450"
            onclick={props.onclick.clone()}
            class="w-full max-w-[450px] h-auto rounded-full cursor-pointer transition-all duration-300"
            style={if props.is_spinning {
                "filter: drop-shadow(0px 5px 20px rgba(255, 198, 0, 0.45));"
            } else {
                "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.35));"
            }}
        />
    }
}
