use log::debug;

use super::error::EditorError;
use super::types::{ClickOutcome, Edge, EdgeForm, PendingEdge, Vertex, VertexId};

/// Owned graph plus the transient pointer state of the editor.
#[derive(Clone, Debug, Default)]
pub struct GraphEditorState {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
	next_id: usize,
	selected: Option<VertexId>,
	dragging: Option<VertexId>,
	pending_edge: Option<PendingEdge>,
	pub width: f64,
	pub height: f64,
}

impl GraphEditorState {
	#[cfg(test)]
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
		self.vertices.iter().find(|v| v.id == id)
	}

	pub fn selected(&self) -> Option<VertexId> {
		self.selected
	}

	#[cfg(test)]
	pub fn dragging(&self) -> Option<VertexId> {
		self.dragging
	}

	#[cfg(test)]
	pub fn pending_edge(&self) -> Option<PendingEdge> {
		self.pending_edge
	}

	pub fn add_vertex(&mut self, x: f64, y: f64) -> VertexId {
		let id = VertexId(self.next_id);
		self.next_id += 1;
		self.vertices.push(Vertex::new(id, x, y));
		debug!("vertex {id} added at ({x:.1}, {y:.1})");
		id
	}

	pub fn add_edge(
		&mut self,
		from: VertexId,
		to: VertexId,
		weight: impl Into<String>,
		directed: bool,
	) -> Result<(), EditorError> {
		for id in [from, to] {
			if self.vertex(id).is_none() {
				return Err(EditorError::UnknownVertex(id));
			}
		}
		let weight = weight.into();
		debug!("edge {from} -> {to} added (weight {weight:?}, directed {directed})");
		self.edges.push(Edge {
			from,
			to,
			weight,
			directed,
		});
		Ok(())
	}

	/// Drops every vertex and edge and restarts ids at 0.
	pub fn reset(&mut self) {
		self.vertices.clear();
		self.edges.clear();
		self.next_id = 0;
		self.selected = None;
		self.dragging = None;
		self.pending_edge = None;
		debug!("graph cleared");
	}

	/// First vertex in creation order whose circle contains the point.
	pub fn vertex_at_position(&self, x: f64, y: f64) -> Option<VertexId> {
		self.vertices.iter().find(|v| v.contains(x, y)).map(|v| v.id)
	}

	/// Whether another edge runs between the same endpoints in reverse.
	pub fn has_twin(&self, index: usize) -> bool {
		let Some(edge) = self.edges.get(index) else {
			return false;
		};
		self.edges
			.iter()
			.enumerate()
			.any(|(i, e)| i != index && e.from == edge.to && e.to == edge.from)
	}

	pub fn double_click(&mut self, x: f64, y: f64) -> Option<VertexId> {
		if self.pending_edge.is_some() || self.vertex_at_position(x, y).is_some() {
			return None;
		}
		Some(self.add_vertex(x, y))
	}

	pub fn click(&mut self, x: f64, y: f64) -> ClickOutcome {
		if self.dragging.is_some() || self.pending_edge.is_some() {
			return ClickOutcome::Ignored;
		}
		let Some(hit) = self.vertex_at_position(x, y) else {
			return ClickOutcome::Ignored;
		};
		match self.selected {
			None => {
				self.selected = Some(hit);
				ClickOutcome::Selected(hit)
			}
			Some(from) => {
				let pending = PendingEdge { from, to: hit };
				self.pending_edge = Some(pending);
				ClickOutcome::EdgeRequested(pending)
			}
		}
	}

	/// Creates the pending edge from the form values and clears the selection.
	pub fn commit_edge(&mut self, form: &EdgeForm) -> Result<(), EditorError> {
		let pending = self.pending_edge.take();
		self.selected = None;
		match pending {
			Some(PendingEdge { from, to }) => {
				self.add_edge(from, to, form.weight.clone(), form.is_directed())
			}
			None => Ok(()),
		}
	}

	pub fn cancel_edge(&mut self) {
		if let Some(PendingEdge { from, to }) = self.pending_edge.take() {
			debug!("edge {from} -> {to} cancelled");
		}
		self.selected = None;
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<VertexId> {
		if self.pending_edge.is_some() {
			return None;
		}
		let hit = self.vertex_at_position(x, y)?;
		self.dragging = Some(hit);
		Some(hit)
	}

	/// Moves the dragged vertex to the pointer. Returns `true` if anything moved.
	pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
		let Some(id) = self.dragging else {
			return false;
		};
		match self.vertices.iter_mut().find(|v| v.id == id) {
			Some(vertex) => {
				vertex.x = x;
				vertex.y = y;
				true
			}
			None => false,
		}
	}

	pub fn pointer_up(&mut self) {
		self.dragging = None;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
