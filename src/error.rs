//! Errors raised while attaching to the browser.

use wasm_bindgen::{JsCast, JsValue};

/// Failure to acquire something the particle canvas needs from the page.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
	/// No global `window` (not running in a browser main thread).
	#[error("no global window")]
	NoWindow,
	/// The canvas refused to hand out a 2D context.
	#[error("canvas has no 2d context")]
	ContextUnavailable,
	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		let message = match value.dyn_ref::<js_sys::Error>() {
			Some(err) => String::from(err.message()),
			None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
		};
		Self::Js(message)
	}
}
