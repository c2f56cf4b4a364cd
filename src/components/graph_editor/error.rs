use thiserror::Error;
use wasm_bindgen::JsValue;

use super::types::VertexId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
	#[error("vertex {0} is not in the graph")]
	UnknownVertex(VertexId),
	#[error("no browser window available")]
	NoWindow,
	#[error("canvas has no 2d context")]
	NoCanvasContext,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for EditorError {
	fn from(value: JsValue) -> Self {
		EditorError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
