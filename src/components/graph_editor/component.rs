use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::error::EditorError;
use super::matrix::{AdjacencyMatrix, format_value};
use super::render;
use super::state::GraphEditorState;
use super::types::{ClickOutcome, EdgeForm, PendingEdge};

type ListenerSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Shared store plus the 2d context it is painted on once the canvas mounts.
#[derive(Clone, Default)]
struct EditorHandle {
	state: Rc<RefCell<GraphEditorState>>,
	ctx: Rc<RefCell<Option<CanvasRenderingContext2d>>>,
}

impl EditorHandle {
	fn apply<R>(&self, f: impl FnOnce(&mut GraphEditorState) -> R) -> R {
		f(&mut self.state.borrow_mut())
	}

	fn redraw(&self) {
		if let Some(ref ctx) = *self.ctx.borrow() {
			render::render(&self.state.borrow(), ctx);
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
enum MatrixView {
	Placeholder,
	Empty,
	Table(AdjacencyMatrix),
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Sizes the backing store to the explicit dimensions or the element's layout box.
fn fit_canvas(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let (w, h) = (
		width.unwrap_or_else(|| rect.width()),
		height.unwrap_or_else(|| rect.height()),
	);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

fn listen(window: &Window, event: &str, slot: &ListenerSlot, cb: impl FnMut() + 'static) {
	*slot.borrow_mut() = Some(Closure::new(cb));
	if let Some(ref cb) = *slot.borrow() {
		let _ = window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
	}
}

fn attach(
	canvas: HtmlCanvasElement,
	handle: &EditorHandle,
	size: (Option<f64>, Option<f64>),
	resize_cb: &ListenerSlot,
	mouseup_cb: &ListenerSlot,
) -> Result<(), EditorError> {
	let window = web_sys::window().ok_or(EditorError::NoWindow)?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(EditorError::NoCanvasContext)?
		.dyn_into()
		.map_err(|_| EditorError::NoCanvasContext)?;

	let (w, h) = fit_canvas(&canvas, size.0, size.1);
	handle.apply(|s| s.resize(w, h));
	*handle.ctx.borrow_mut() = Some(ctx);
	info!("graph editor attached to {w}x{h} canvas");

	let handle_resize = handle.clone();
	listen(&window, "resize", resize_cb, move || {
		let (nw, nh) = fit_canvas(&canvas, size.0, size.1);
		handle_resize.apply(|s| s.resize(nw, nh));
		handle_resize.redraw();
	});

	// released outside the canvas still ends the drag
	let handle_up = handle.clone();
	listen(&window, "mouseup", mouseup_cb, move || {
		handle_up.apply(|s| s.pointer_up());
	});

	handle.redraw();
	Ok(())
}

#[component]
fn MatrixTable(matrix: AdjacencyMatrix) -> impl IntoView {
	let header = matrix
		.ids
		.iter()
		.map(|id| view! { <th>{id.to_string()}</th> })
		.collect_view();
	let rows = matrix
		.cells
		.iter()
		.enumerate()
		.map(|(i, row)| {
			let cells = row
				.iter()
				.map(|value| view! { <td>{format_value(*value)}</td> })
				.collect_view();
			view! {
				<tr>
					<th>{i.to_string()}</th>
					{cells}
				</tr>
			}
		})
		.collect_view();

	view! {
		<table>
			<tr>
				<th></th>
				{header}
			</tr>
			{rows}
		</table>
	}
}

/// Canvas graph editor with its edge form, matrix report and clear button.
#[component]
pub fn GraphEditor(
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handle = EditorHandle::default();
	let resize_cb: ListenerSlot = Rc::new(RefCell::new(None));
	let mouseup_cb: ListenerSlot = Rc::new(RefCell::new(None));

	let (pending, set_pending) = signal(None::<PendingEdge>);
	let (directed, set_directed) = signal(String::new());
	let (weight, set_weight) = signal(String::new());
	let (matrix, set_matrix) = signal(MatrixView::Placeholder);

	let handle_init = handle.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Err(err) = attach(
			canvas.into(),
			&handle_init,
			(width, height),
			&resize_cb,
			&mouseup_cb,
		) {
			error!("graph editor setup failed: {err}");
		}
	});

	let handle_dc = handle.clone();
	let on_dblclick = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if handle_dc.apply(|s| s.double_click(x, y)).is_some() {
			handle_dc.redraw();
		}
	};

	let handle_cl = handle.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		match handle_cl.apply(|s| s.click(x, y)) {
			ClickOutcome::Ignored => return,
			ClickOutcome::Selected(id) => debug!("vertex {id} selected"),
			ClickOutcome::EdgeRequested(edge) => {
				set_directed.set(String::new());
				set_weight.set(String::new());
				set_pending.set(Some(edge));
			}
		}
		handle_cl.redraw();
	};

	let handle_md = handle.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		handle_md.apply(|s| s.pointer_down(x, y));
	};

	let handle_mm = handle.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if handle_mm.apply(|s| s.pointer_move(x, y)) {
			handle_mm.redraw();
		}
	};

	let handle_commit = handle.clone();
	let on_commit = move |_: MouseEvent| {
		let form = EdgeForm {
			directed: directed.get_untracked(),
			weight: weight.get_untracked(),
		};
		if let Err(err) = handle_commit.apply(|s| s.commit_edge(&form)) {
			warn!("edge not created: {err}");
		}
		set_pending.set(None);
		handle_commit.redraw();
	};

	let handle_cancel = handle.clone();
	let on_cancel = move |_: MouseEvent| {
		handle_cancel.apply(|s| s.cancel_edge());
		set_pending.set(None);
		handle_cancel.redraw();
	};

	let handle_matrix = handle.clone();
	let on_matrix = move |_: MouseEvent| {
		let report = handle_matrix.apply(|s| AdjacencyMatrix::build(s));
		debug!("adjacency matrix:\n{report}");
		set_matrix.set(if report.is_empty() {
			MatrixView::Empty
		} else {
			MatrixView::Table(report)
		});
	};

	let handle_clear = handle.clone();
	let on_clear = move |_: MouseEvent| {
		handle_clear.apply(|s| s.reset());
		set_pending.set(None);
		set_matrix.set(MatrixView::Placeholder);
		handle_clear.redraw();
	};

	view! {
		<div class="graph-editor">
			<div class="toolbar">
				<button id="btnMatriz" type="button" on:click=on_matrix>
					"Adjacency matrix"
				</button>
				<button id="btnLimpiar" type="button" on:click=on_clear>
					"Clear graph"
				</button>
			</div>

			<canvas
				id="canvasGrafo"
				node_ref=canvas_ref
				on:dblclick=on_dblclick
				on:click=on_click
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				style="display: block; width: 100%; height: 70vh; cursor: pointer;"
			/>

			<div
				class="edge-form"
				style:display=move || { if pending.get().is_some() { "flex" } else { "none" } }
			>
				<span>
					{move || {
						pending
							.get()
							.map(|edge| format!("Edge {} -> {}", edge.from, edge.to))
							.unwrap_or_default()
					}}
				</span>
				<label>
					"Is it directed? (si/no) "
					<input
						type="text"
						prop:value=move || directed.get()
						on:input=move |ev| set_directed.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Enter the weight: "
					<input
						type="text"
						prop:value=move || weight.get()
						on:input=move |ev| set_weight.set(event_target_value(&ev))
					/>
				</label>
				<button type="button" on:click=on_commit>
					"Add"
				</button>
				<button type="button" on:click=on_cancel>
					"Cancel"
				</button>
			</div>

			<div id="matrizContainer" class="matrix-container">
				{move || match matrix.get() {
					MatrixView::Placeholder => {
						view! { <p class="placeholder">"The matrix will appear here"</p> }
							.into_any()
					}
					MatrixView::Empty => {
						view! { <p class="placeholder">"No vertices yet"</p> }.into_any()
					}
					MatrixView::Table(report) => view! { <MatrixTable matrix=report /> }.into_any(),
				}}
			</div>
		</div>
	}
}
