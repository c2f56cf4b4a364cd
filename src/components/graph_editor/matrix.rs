use std::fmt;

use super::state::GraphEditorState;
use super::types::VertexId;

/// Adjacency matrix indexed directly by vertex id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdjacencyMatrix {
	pub ids: Vec<VertexId>,
	pub cells: Vec<Vec<f64>>,
}

/// Numeric value of an edge weight; anything that is not a non-zero
/// number counts as 1.
pub fn numeric_weight(weight: &str) -> f64 {
	match parse_number(weight.trim()) {
		Some(value) if value != 0.0 && !value.is_nan() => value,
		_ => 1.0,
	}
}

/// Number literal grammar of the browser's `Number(text)`: decimal with
/// optional sign and exponent, `Infinity`, or unsigned `0x`/`0o`/`0b` integers.
fn parse_number(text: &str) -> Option<f64> {
	match text {
		"" => return Some(0.0),
		"Infinity" | "+Infinity" => return Some(f64::INFINITY),
		"-Infinity" => return Some(f64::NEG_INFINITY),
		_ => {}
	}
	let radix = match text.get(..2) {
		Some("0x" | "0X") => 16,
		Some("0o" | "0O") => 8,
		Some("0b" | "0B") => 2,
		_ => 10,
	};
	if radix != 10 {
		let digits = &text[2..];
		if digits.is_empty() {
			return None;
		}
		return digits.chars().try_fold(0.0, |acc, c| {
			c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
		});
	}
	// f64::from_str also takes inf/nan words, which are not numbers here
	if !text
		.chars()
		.all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
	{
		return None;
	}
	text.parse().ok()
}

/// Formats a cell value the way the browser prints numbers: exponent form
/// outside `1e-6..1e21`, `Infinity` for infinities.
pub fn format_value(value: f64) -> String {
	if value.is_nan() {
		return "NaN".into();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
	}
	let magnitude = value.abs();
	if value == 0.0 || (1e-6..1e21).contains(&magnitude) {
		return value.to_string();
	}
	let text = format!("{value:e}");
	match text.split_once('e') {
		Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
		_ => text,
	}
}

impl AdjacencyMatrix {
	pub fn build(state: &GraphEditorState) -> Self {
		let n = state.vertices().len();
		let mut cells = vec![vec![0.0; n]; n];

		for edge in state.edges() {
			let (i, j) = (edge.from.0, edge.to.0);
			if i >= n || j >= n {
				continue;
			}
			let value = numeric_weight(&edge.weight);
			cells[i][j] = value;
			if !edge.directed {
				cells[j][i] = value;
			}
		}

		Self {
			ids: state.vertices().iter().map(|v| v.id).collect(),
			cells,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	#[cfg(test)]
	pub fn get(&self, from: VertexId, to: VertexId) -> Option<f64> {
		self.cells.get(from.0)?.get(to.0).copied()
	}

	#[cfg(test)]
	pub fn is_symmetric(&self) -> bool {
		self.cells
			.iter()
			.enumerate()
			.all(|(i, row)| row.iter().enumerate().all(|(j, v)| self.cells[j][i] == *v))
	}
}

/// Plain-text rendering, one row per line, used for logging.
impl fmt::Display for AdjacencyMatrix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in &self.cells {
			let line: Vec<String> = row.iter().copied().map(format_value).collect();
			writeln!(f, "{}", line.join(" "))?;
		}
		Ok(())
	}
}
