use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{FONT, Scene, Shape};
use super::state::GraphEditorState;

const DASH: f64 = 6.0;
const GAP: f64 = 4.0;

pub fn render(state: &GraphEditorState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.set_font(FONT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for shape in &Scene::build(state).shapes {
		draw_shape(shape, ctx);
	}
}

fn draw_shape(shape: &Shape, ctx: &CanvasRenderingContext2d) {
	match shape {
		Shape::Circle {
			center,
			radius,
			fill,
			stroke,
		} => {
			ctx.begin_path();
			let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(fill);
			ctx.fill();
			ctx.set_line_width(1.0);
			ctx.set_stroke_style_str(stroke);
			ctx.stroke();
		}
		Shape::DashedRing {
			center,
			radius,
			stroke,
		} => {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(DASH),
				&JsValue::from_f64(GAP),
			));
			ctx.begin_path();
			let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
			ctx.set_line_width(2.0);
			ctx.set_stroke_style_str(stroke);
			ctx.stroke();
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
		Shape::Line {
			from,
			to,
			stroke,
			width,
		} => {
			ctx.begin_path();
			ctx.move_to(from.x, from.y);
			ctx.line_to(to.x, to.y);
			ctx.set_stroke_style_str(stroke);
			ctx.set_line_width(*width);
			ctx.stroke();
		}
		Shape::Arc {
			center,
			radius,
			start,
			end,
			stroke,
			width,
		} => {
			ctx.begin_path();
			let _ = ctx.arc(center.x, center.y, *radius, *start, *end);
			ctx.set_stroke_style_str(stroke);
			ctx.set_line_width(*width);
			ctx.stroke();
		}
		Shape::Triangle { points, fill } => {
			let [tip, left, right] = points;
			ctx.begin_path();
			ctx.move_to(tip.x, tip.y);
			ctx.line_to(left.x, left.y);
			ctx.line_to(right.x, right.y);
			ctx.close_path();
			ctx.set_fill_style_str(fill);
			ctx.fill();
		}
		Shape::Label { at, text, fill } => {
			ctx.set_fill_style_str(fill);
			let _ = ctx.fill_text(text, at.x, at.y);
		}
	}
}
