mod component;
mod error;
mod matrix;
mod render;
mod scene;
mod state;
mod types;

pub use component::GraphEditor;
