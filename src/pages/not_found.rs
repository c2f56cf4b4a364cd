use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<h1>"Nothing here"</h1>
		<p>
			<a href="/">"Back to the editor"</a>
		</p>
	}
}
