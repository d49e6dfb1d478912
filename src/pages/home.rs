use leptos::prelude::*;

use crate::components::particle_field::ParticlesBackground;
use crate::components::theme_toggle::ThemeToggle;

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

			<ParticlesBackground />
			<main class="hero">
				<h1>"Hi, I build things for the web."</h1>
				<p class="subtitle">"Move the pointer around; the particles follow it."</p>
			</main>
			<div class="theme-fab">
				<ThemeToggle />
			</div>
		</ErrorBoundary>
	}
}
