use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::render::{self, DrawSurface};
use super::state::ParticleField;
use crate::error::SurfaceError;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
	#[default]
	Stopped,
	Running,
}

/// Drives one step + render per frame while running.
///
/// A scheduler belongs to a single mount; once stopped it is not restarted.
/// It may start before the field is seeded; those frames only clear.
#[derive(Debug, Default)]
pub struct FrameScheduler {
	state: SchedulerState,
	frames: u64,
}

impl FrameScheduler {
	pub fn state(&self) -> SchedulerState {
		self.state
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}

	pub fn start(&mut self) {
		self.state = SchedulerState::Running;
	}

	pub fn stop(&mut self) {
		self.state = SchedulerState::Stopped;
	}

	/// Run a frame if running. Returns whether another frame should be
	/// requested.
	pub fn run_frame<S: DrawSurface + ?Sized>(
		&mut self,
		field: &mut ParticleField,
		theme: Theme,
		surface: &mut S,
	) -> bool {
		if self.state == SchedulerState::Stopped {
			return false;
		}
		field.step();
		render::render(field, theme, surface);
		self.frames += 1;
		true
	}
}

struct LoopInner {
	window: Window,
	handle: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
	fn request(&self) -> Result<(), SurfaceError> {
		if let Some(ref cb) = *self.callback.borrow() {
			let id = self
				.window
				.request_animation_frame(cb.as_ref().unchecked_ref())?;
			self.handle.set(Some(id));
		}
		Ok(())
	}

	fn cancel(&self) {
		if let Some(id) = self.handle.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
	}
}

/// A `requestAnimationFrame` loop. Keeps re-requesting while `on_frame`
/// returns `true`; the pending request is cancelled when dropped.
pub struct AnimationLoop {
	inner: Rc<LoopInner>,
}

impl AnimationLoop {
	pub fn start(mut on_frame: impl FnMut() -> bool + 'static) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let inner = Rc::new(LoopInner {
			window,
			handle: Cell::new(None),
			callback: RefCell::new(None),
		});

		let weak: Weak<LoopInner> = Rc::downgrade(&inner);
		*inner.callback.borrow_mut() = Some(Closure::new(move || {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			inner.handle.set(None);
			if on_frame() {
				if let Err(err) = inner.request() {
					warn!("failed to request animation frame: {err}");
				}
			}
		}));
		inner.request()?;
		Ok(Self { inner })
	}

	pub fn is_pending(&self) -> bool {
		self.inner.handle.get().is_some()
	}

	pub fn cancel(&self) {
		self.inner.cancel();
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		self.inner.cancel();
		self.inner.callback.borrow_mut().take();
	}
}
