use leptos::prelude::*;

use crate::theme::{Theme, toggle_theme};

/// Round button that flips between the light and dark theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = use_context::<RwSignal<Theme>>();
	let current = move || theme.map(|t| t.get()).unwrap_or_default();
	let toggle = move |_| {
		if let Some(theme) = theme {
			toggle_theme(theme);
		}
	};

	view! {
		<button
			class="theme-toggle"
			type="button"
			aria-label=move || {
				if current().is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
			}
			on:click=toggle
		>
			{move || if current().is_dark() { "\u{2600}" } else { "\u{263E}" }}
		</button>
	}
}
