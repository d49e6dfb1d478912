use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::error::SurfaceError;

/// A DOM event listener that is removed when dropped.
pub struct EventListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	pub fn new(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, SurfaceError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let _ = self.target.remove_event_listener_with_callback(
			self.event,
			self.callback.as_ref().unchecked_ref(),
		);
	}
}
