use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::listener::EventListener;
use super::scheduler::{AnimationLoop, FrameScheduler};
use super::state::ParticleField;
use super::types::{FieldConfig, Vec2};
use crate::error::SurfaceError;
use crate::theme::{Theme, use_theme};

/// Everything a mounted canvas holds on to. Dropping it cancels the pending
/// frame and removes the listeners.
struct MountedField {
	scheduler: Rc<RefCell<FrameScheduler>>,
	frames: AnimationLoop,
	_listeners: [EventListener; 2],
}

impl MountedField {
	fn attach(
		canvas: HtmlCanvasElement,
		config: FieldConfig,
		theme: Signal<Theme>,
	) -> Result<Self, SurfaceError> {
		let window: Window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let mut ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into()
			.map_err(|_| SurfaceError::ContextUnavailable)?;

		let field = Rc::new(RefCell::new(ParticleField::new(config)));
		fit_to_container(&window, &canvas, &mut field.borrow_mut());

		let (window_rs, canvas_rs, field_rs) = (window.clone(), canvas.clone(), field.clone());
		let on_resize = EventListener::new(&window, "resize", move |_| {
			fit_to_container(&window_rs, &canvas_rs, &mut field_rs.borrow_mut());
		})?;

		// The canvas ignores pointer events, so track the pointer on the window
		// and translate into canvas space.
		let (canvas_mm, field_mm) = (canvas.clone(), field.clone());
		let on_pointer = EventListener::new(&window, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let rect = canvas_mm.get_bounding_client_rect();
			field_mm.borrow_mut().set_pointer(Some(Vec2::new(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			)));
		})?;

		let scheduler = Rc::new(RefCell::new(FrameScheduler::default()));
		scheduler.borrow_mut().start();
		let (scheduler_anim, field_anim) = (scheduler.clone(), field.clone());
		let frames = AnimationLoop::start(move || {
			let theme = theme.try_get_untracked().unwrap_or_default();
			scheduler_anim
				.borrow_mut()
				.run_frame(&mut field_anim.borrow_mut(), theme, &mut ctx)
		})?;

		let vp = field.borrow().viewport();
		info!("particle field mounted at {}x{}", vp.width, vp.height);
		Ok(Self {
			scheduler,
			frames,
			_listeners: [on_resize, on_pointer],
		})
	}

	fn detach(self) {
		self.scheduler.borrow_mut().stop();
		self.frames.cancel();
		debug_assert!(!self.frames.is_pending());
		info!(
			"particle field detached after {} frames",
			self.scheduler.borrow().frames()
		);
	}
}

/// Size the canvas to its container (or the window when it has none) and
/// let the field adopt the new bounds.
fn fit_to_container(window: &Window, canvas: &HtmlCanvasElement, field: &mut ParticleField) {
	let (w, h) = match canvas.parent_element() {
		Some(parent) => (parent.client_width() as f64, parent.client_height() as f64),
		None => (
			window
				.inner_width()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(0.0),
			window
				.inner_height()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(0.0),
		),
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	field.resize(w, h, &mut rand::thread_rng());
}

/// Full-viewport animated particle backdrop. Sits behind the page and never
/// intercepts pointer events.
#[component]
pub fn ParticlesBackground(#[prop(optional)] config: Option<FieldConfig>) -> impl IntoView {
	let theme = use_theme();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<MountedField>>> = Rc::new(RefCell::new(None));
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted_init.borrow().is_some() {
			return;
		}
		match MountedField::attach(canvas.into(), config.unwrap_or_default(), theme) {
			Ok(field) => *mounted_init.borrow_mut() = Some(field),
			Err(err) => error!("particle field failed to mount: {err}"),
		}
	});

	let mounted = SendWrapper::new(mounted);
	on_cleanup(move || {
		if let Some(field) = mounted.borrow_mut().take() {
			field.detach();
		}
	});

	view! {
		<div
			class="particles-background"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		>
			<canvas
				node_ref=canvas_ref
				style="display: block; width: 100%; height: 100%; opacity: 0.5; pointer-events: none;"
			/>
		</div>
	}
}
