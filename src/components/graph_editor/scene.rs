use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use super::state::GraphEditorState;
use super::types::{Edge, Vertex};

pub const VERTEX_FILL: &str = "#1C4C7C";
pub const VERTEX_STROKE: &str = "black";
pub const VERTEX_LABEL: &str = "white";
pub const EDGE_STROKE: &str = "#4DA3FF";
pub const ARROW_FILL: &str = "#66CCFF";
pub const WEIGHT_LABEL: &str = "#00E0FF";
pub const SELECTION_STROKE: &str = "#FFD166";
pub const FONT: &str = "16px Arial";

pub const EDGE_WIDTH: f64 = 2.0;
/// Perpendicular shift applied to each edge of an anti-parallel pair.
pub const TWIN_SEPARATION: f64 = 15.0;
pub const ARROW_LENGTH: f64 = 20.0;
pub const LOOP_RADIUS: f64 = 40.0;
/// Height of the loop centre above the top of its vertex.
pub const LOOP_LIFT: f64 = 20.0;
pub const LOOP_START: f64 = 0.7 * PI;
pub const LOOP_END: f64 = 2.3 * PI;
pub const LOOP_ARROW_LENGTH: f64 = 15.0;
pub const LOOP_LABEL_GAP: f64 = 10.0;
pub const SELECTION_GAP: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	fn offset(self, angle: f64, distance: f64) -> Self {
		Self::new(self.x + distance * angle.cos(), self.y + distance * angle.sin())
	}

	fn midpoint(self, other: Point) -> Self {
		Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// One drawing primitive, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	Circle {
		center: Point,
		radius: f64,
		fill: &'static str,
		stroke: &'static str,
	},
	DashedRing {
		center: Point,
		radius: f64,
		stroke: &'static str,
	},
	Line {
		from: Point,
		to: Point,
		stroke: &'static str,
		width: f64,
	},
	/// Clockwise arc from `start` to `end` (radians).
	Arc {
		center: Point,
		radius: f64,
		start: f64,
		end: f64,
		stroke: &'static str,
		width: f64,
	},
	Triangle {
		points: [Point; 3],
		fill: &'static str,
	},
	Label {
		at: Point,
		text: String,
		fill: &'static str,
	},
}

/// Everything needed to paint one frame: edges first, vertices on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub shapes: Vec<Shape>,
}

impl Scene {
	pub fn build(state: &GraphEditorState) -> Self {
		let mut scene = Scene::default();
		for (index, edge) in state.edges().iter().enumerate() {
			let (Some(from), Some(to)) = (state.vertex(edge.from), state.vertex(edge.to)) else {
				continue;
			};
			if edge.is_loop() {
				scene.push_loop(edge, from);
			} else {
				scene.push_edge(edge, from, to, state.has_twin(index));
			}
		}
		for vertex in state.vertices() {
			scene.push_vertex(vertex, state.selected() == Some(vertex.id));
		}
		scene
	}

	fn push_vertex(&mut self, vertex: &Vertex, selected: bool) {
		let center = Point::new(vertex.x, vertex.y);
		self.shapes.push(Shape::Circle {
			center,
			radius: vertex.radius,
			fill: VERTEX_FILL,
			stroke: VERTEX_STROKE,
		});
		if selected {
			self.shapes.push(Shape::DashedRing {
				center,
				radius: vertex.radius + SELECTION_GAP,
				stroke: SELECTION_STROKE,
			});
		}
		self.shapes.push(Shape::Label {
			at: center,
			text: vertex.id.to_string(),
			fill: VERTEX_LABEL,
		});
	}

	fn push_edge(&mut self, edge: &Edge, from: &Vertex, to: &Vertex, has_twin: bool) {
		let angle = (to.y - from.y).atan2(to.x - from.x);
		let mut start = Point::new(from.x, from.y).offset(angle, from.radius);
		let mut end = Point::new(to.x, to.y).offset(angle, -to.radius);

		if has_twin {
			// the twin's angle is reversed, so its shift lands on the other side
			let shift = angle + FRAC_PI_2;
			start = start.offset(shift, TWIN_SEPARATION);
			end = end.offset(shift, TWIN_SEPARATION);
		}

		self.shapes.push(Shape::Line {
			from: start,
			to: end,
			stroke: EDGE_STROKE,
			width: EDGE_WIDTH,
		});
		if edge.directed {
			self.shapes.push(arrowhead(end, angle, ARROW_LENGTH));
		}
		self.shapes.push(Shape::Label {
			at: start.midpoint(end),
			text: edge.weight.clone(),
			fill: WEIGHT_LABEL,
		});
	}

	fn push_loop(&mut self, edge: &Edge, vertex: &Vertex) {
		let center = Point::new(vertex.x, vertex.y - vertex.radius - LOOP_LIFT);
		self.shapes.push(Shape::Arc {
			center,
			radius: LOOP_RADIUS,
			start: LOOP_START,
			end: LOOP_END,
			stroke: EDGE_STROKE,
			width: EDGE_WIDTH,
		});
		self.shapes.push(Shape::Label {
			at: Point::new(center.x, center.y - LOOP_RADIUS - LOOP_LABEL_GAP),
			text: edge.weight.clone(),
			fill: WEIGHT_LABEL,
		});
		if edge.directed {
			let tip = center.offset(LOOP_END, LOOP_RADIUS);
			self.shapes.push(arrowhead(tip, LOOP_END + FRAC_PI_2, LOOP_ARROW_LENGTH));
		}
	}
}

/// Triangle with its tip at `tip`, pointing along `angle`.
fn arrowhead(tip: Point, angle: f64, length: f64) -> Shape {
	Shape::Triangle {
		points: [
			tip,
			tip.offset(angle - FRAC_PI_6, -length),
			tip.offset(angle + FRAC_PI_6, -length),
		],
		fill: ARROW_FILL,
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::graph_editor::types::VertexId;

	const EPS: f64 = 1e-9;

	fn close(a: Point, b: Point) -> bool {
		(a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
	}

	fn lines(scene: &Scene) -> Vec<(Point, Point)> {
		scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Line { from, to, .. } => Some((*from, *to)),
				_ => None,
			})
			.collect()
	}

	fn count(scene: &Scene, pred: impl Fn(&Shape) -> bool) -> usize {
		scene.shapes.iter().filter(|s| pred(s)).count()
	}

	#[test]
	fn empty_graph_has_empty_scene() {
		assert_eq!(Scene::build(&GraphEditorState::default()), Scene::default());
	}

	#[test]
	fn edge_meets_vertex_boundaries() {
		let mut state = GraphEditorState::default();
		let a = state.add_vertex(100.0, 100.0);
		let b = state.add_vertex(300.0, 100.0);
		state.add_edge(a, b, "5", false).unwrap();

		let scene = Scene::build(&state);
		let drawn = lines(&scene);
		assert_eq!(drawn.len(), 1);
		let (start, end) = drawn[0];
		assert!(close(start, Point::new(130.0, 100.0)));
		assert!(close(end, Point::new(270.0, 100.0)));
		assert_eq!(count(&scene, |s| matches!(s, Shape::Triangle { .. })), 0);
		assert!(scene.shapes.contains(&Shape::Label {
			at: Point::new(200.0, 100.0),
			text: "5".into(),
			fill: WEIGHT_LABEL,
		}));
	}

	#[test]
	fn vertices_are_painted_after_edges() {
		let mut state = GraphEditorState::default();
		let a = state.add_vertex(100.0, 100.0);
		let b = state.add_vertex(300.0, 100.0);
		state.add_edge(a, b, "1", true).unwrap();

		let scene = Scene::build(&state);
		let first_circle = scene
			.shapes
			.iter()
			.position(|s| matches!(s, Shape::Circle { .. }))
			.unwrap();
		let last_edge_shape = scene
			.shapes
			.iter()
			.rposition(|s| matches!(s, Shape::Line { .. } | Shape::Triangle { .. }))
			.unwrap();
		assert!(last_edge_shape < first_circle);
	}

	#[test]
	fn directed_edge_gets_arrowhead_at_end() {
		let mut state = GraphEditorState::default();
		let a = state.add_vertex(100.0, 100.0);
		let b = state.add_vertex(300.0, 100.0);
		state.add_edge(a, b, "3", true).unwrap();

		let scene = Scene::build(&state);
		let tips: Vec<_> = scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Triangle { points, .. } => Some(points[0]),
				_ => None,
			})
			.collect();
		assert_eq!(tips.len(), 1);
		assert!(close(tips[0], Point::new(270.0, 100.0)));
	}

	#[test]
	fn anti_parallel_edges_are_separated() {
		let mut state = GraphEditorState::default();
		let a = state.add_vertex(100.0, 100.0);
		let b = state.add_vertex(300.0, 100.0);
		state.add_edge(a, b, "1", true).unwrap();
		state.add_edge(b, a, "2", true).unwrap();

		let scene = Scene::build(&state);
		let drawn = lines(&scene);
		assert_eq!(drawn.len(), 2);
		// a -> b points along +x, so its shift is +y; b -> a is shifted to -y
		assert!(close(drawn[0].0, Point::new(130.0, 115.0)));
		assert!(close(drawn[0].1, Point::new(270.0, 115.0)));
		assert!(close(drawn[1].0, Point::new(270.0, 85.0)));
		assert!(close(drawn[1].1, Point::new(130.0, 85.0)));
	}

	#[test]
	fn parallel_duplicates_are_not_separated() {
		let mut state = GraphEditorState::default();
		let a = state.add_vertex(100.0, 100.0);
		let b = state.add_vertex(300.0, 100.0);
		state.add_edge(a, b, "1", false).unwrap();
		state.add_edge(a, b, "2", false).unwrap();

		let drawn = lines(&Scene::build(&state));
		assert_eq!(drawn[0], drawn[1]);
	}

	#[test]
	fn directed_self_loop_is_an_open_arc_with_arrow() {
		let mut state = GraphEditorState::default();
		let a = state.add_vertex(100.0, 200.0);
		state.add_edge(a, a, "2", true).unwrap();

		let scene = Scene::build(&state);
		assert!(lines(&scene).is_empty());

		let arc = scene
			.shapes
			.iter()
			.find_map(|s| match s {
				Shape::Arc {
					center, start, end, ..
				} => Some((*center, *start, *end)),
				_ => None,
			})
			.unwrap();
		assert!(close(arc.0, Point::new(100.0, 150.0)));
		assert!(arc.2 - arc.1 < 2.0 * PI, "loop must leave a gap");
		assert_eq!(count(&scene, |s| matches!(s, Shape::Triangle { .. })), 1);
		assert!(scene.shapes.contains(&Shape::Label {
			at: Point::new(100.0, 100.0),
			text: "2".into(),
			fill: WEIGHT_LABEL,
		}));
	}

	#[test]
	fn selected_vertex_gets_ring() {
		let mut state = GraphEditorState::default();
		state.add_vertex(100.0, 100.0);
		state.add_vertex(300.0, 100.0);
		state.click(300.0, 100.0);

		let scene = Scene::build(&state);
		let rings: Vec<_> = scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::DashedRing { center, .. } => Some(*center),
				_ => None,
			})
			.collect();
		assert_eq!(rings, vec![Point::new(300.0, 100.0)]);
		assert_eq!(state.selected(), Some(VertexId(1)));
	}
}
