//! Light/dark theme shared through Leptos context.

use leptos::prelude::*;
use log::{debug, warn};

use crate::error::SurfaceError;

const STORAGE_KEY: &str = "portfolio-theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The site colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Dark ink on a light page.
	#[default]
	Light,
	/// Light ink on a dark page.
	Dark,
}

impl Theme {
	/// Whether this is the dark scheme.
	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}

	/// The other scheme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Name used for `data-theme` and storage.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Parse a stored theme name.
	pub fn parse(name: &str) -> Option<Self> {
		match name.trim() {
			"light" => Some(Theme::Light),
			"dark" => Some(Theme::Dark),
			_ => None,
		}
	}
}

fn stored_theme() -> Option<Theme> {
	let storage = web_sys::window()?.local_storage().ok()??;
	storage.get_item(STORAGE_KEY).ok()?.as_deref().and_then(Theme::parse)
}

fn system_theme() -> Option<Theme> {
	let query = web_sys::window()?.match_media(DARK_QUERY).ok()??;
	Some(if query.matches() { Theme::Dark } else { Theme::Light })
}

fn persist(theme: Theme) {
	let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
		return;
	};
	if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
		warn!("could not persist theme: {}", SurfaceError::from(err));
	}
}

/// A choice the user made wins over the system preference.
fn resolve(stored: Option<Theme>, system: impl FnOnce() -> Option<Theme>) -> Theme {
	stored.or_else(system).unwrap_or_default()
}

/// Create the theme signal, seed it from storage or the system preference,
/// and put it in context. Nothing is stored until the user picks a theme.
pub fn provide_theme() -> RwSignal<Theme> {
	let initial = resolve(stored_theme(), system_theme);
	debug!("initial theme: {}", initial.as_str());
	let theme = RwSignal::new(initial);
	provide_context(theme);
	theme
}

/// Flip the theme as an explicit user choice and remember it.
pub fn toggle_theme(theme: RwSignal<Theme>) {
	let next = theme.get_untracked().toggled();
	theme.set(next);
	persist(next);
}

/// Read-only view of the current theme; `Light` when no provider exists.
pub fn use_theme() -> Signal<Theme> {
	use_context::<RwSignal<Theme>>()
		.map(Signal::from)
		.unwrap_or_else(|| Signal::stored(Theme::default()))
}
