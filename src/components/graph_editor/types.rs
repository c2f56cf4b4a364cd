use std::fmt;

/// Display radius shared by every vertex.
pub const VERTEX_RADIUS: f64 = 30.0;

/// Answer to the "directed?" question that marks an edge as directed.
pub const AFFIRMATIVE: &str = "si";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	pub id: VertexId,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
}

impl Vertex {
	pub fn new(id: VertexId, x: f64, y: f64) -> Self {
		Self {
			id,
			x,
			y,
			radius: VERTEX_RADIUS,
		}
	}

	/// Circular hit-test, inclusive of the boundary.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		let (dx, dy) = (x - self.x, y - self.y);
		(dx * dx + dy * dy).sqrt() <= self.radius
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub from: VertexId,
	pub to: VertexId,
	/// Free-form text as entered; only the matrix coerces it to a number.
	pub weight: String,
	pub directed: bool,
}

impl Edge {
	pub fn is_loop(&self) -> bool {
		self.from == self.to
	}
}

/// Endpoints chosen by two clicks, waiting for the edge form to be
/// committed or cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingEdge {
	pub from: VertexId,
	pub to: VertexId,
}

/// Values collected by the inline edge form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeForm {
	pub directed: String,
	pub weight: String,
}

impl EdgeForm {
	pub fn is_directed(&self) -> bool {
		is_affirmative(&self.directed)
	}
}

pub fn is_affirmative(answer: &str) -> bool {
	answer.trim().eq_ignore_ascii_case(AFFIRMATIVE)
}

/// What a click on the canvas did to the edge workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
	Ignored,
	Selected(VertexId),
	EdgeRequested(PendingEdge),
}
