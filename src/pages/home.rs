use leptos::prelude::*;

use crate::components::graph_editor::GraphEditor;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="editor-page">
				<div class="graph-overlay">
					<h1>"Graph Editor"</h1>
					<p class="subtitle">
						"Double-click to add a vertex. Click two vertices to connect them. Drag vertices to move them."
					</p>
				</div>
				<GraphEditor />
			</div>
		</ErrorBoundary>
	}
}
