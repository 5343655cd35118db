//! Browser plumbing shared by the canvas components: the drawing surface,
//! window listeners, the animation-frame loop and one-shot timeouts.
//!
//! Every handle here releases its browser registration when dropped, so a
//! mount that bails out halfway leaves nothing behind.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::types::{Point, Viewport};

/// Current window inner size in CSS pixels.
pub fn window_viewport() -> Option<Viewport> {
	let window = web_sys::window()?;
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some(Viewport::new(width, height))
}

/// Device pixel ratio, falling back to 1.
pub fn pixel_ratio() -> f64 {
	web_sys::window()
		.map(|w| w.device_pixel_ratio())
		.filter(|r| *r > 0.0)
		.unwrap_or(1.0)
}

/// Client coordinates of a mouse event or of the first active touch.
pub fn event_point(ev: &Event) -> Option<Point> {
	if let Some(mouse) = ev.dyn_ref::<MouseEvent>() {
		return Some(Point::new(mouse.client_x() as f64, mouse.client_y() as f64));
	}
	let touch = ev.dyn_ref::<TouchEvent>()?.touches().get(0)?;
	Some(Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

/// A canvas with its 2d context.
pub struct Surface {
	canvas: HtmlCanvasElement,
	pub ctx: CanvasRenderingContext2d,
	pub pixel_ratio: f64,
}

impl Surface {
	/// `None` when the browser refuses a 2d context.
	pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
			_ => {
				warn!("node-network: 2d context unavailable");
				return None;
			}
		};
		Some(Self {
			canvas,
			ctx,
			pixel_ratio: pixel_ratio(),
		})
	}

	/// Size the backing store to `viewport` at device resolution.
	pub fn fit(&self, viewport: Viewport) {
		self.canvas
			.set_width((viewport.width * self.pixel_ratio).round() as u32);
		self.canvas
			.set_height((viewport.height * self.pixel_ratio).round() as u32);
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", viewport.width));
		let _ = style.set_property("height", &format!("{}px", viewport.height));
	}

	/// Whether `ev` was dispatched at this canvas rather than something
	/// layered over it.
	pub fn is_target(&self, ev: &Event) -> bool {
		ev.target()
			.is_some_and(|t| t.dyn_ref::<HtmlCanvasElement>() == Some(&self.canvas))
	}

	pub fn set_cursor(&self, cursor: &str) {
		let _ = self.canvas.style().set_property("cursor", cursor);
	}
}

/// Event listeners registered on one target, removed together.
pub struct Listeners {
	target: EventTarget,
	registered: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl Listeners {
	pub fn new(target: EventTarget) -> Self {
		Self {
			target,
			registered: Vec::new(),
		}
	}

	/// Listen on the window.
	pub fn on_window() -> Option<Self> {
		Some(Self::new(web_sys::window()?.into()))
	}

	pub fn listen(&mut self, event: &'static str, handler: impl FnMut(Event) + 'static) {
		let cb = Closure::<dyn FnMut(Event)>::new(handler);
		match self
			.target
			.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
		{
			Ok(()) => self.registered.push((event, cb)),
			Err(e) => warn!("node-network: could not listen for {event}: {e:?}"),
		}
	}

	pub fn len(&self) -> usize {
		self.registered.len()
	}

	/// Remove every listener and drop its closure.
	pub fn clear(&mut self) {
		for (event, cb) in self.registered.drain(..) {
			let _ = self
				.target
				.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
		}
	}
}

impl Drop for Listeners {
	fn drop(&mut self) {
		self.clear();
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be stopped.
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl FrameLoop {
	/// Call `step` once per animation frame until [`FrameLoop::stop`].
	pub fn start(mut step: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let running = Rc::new(Cell::new(true));
		let pending = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));

		let (running_inner, pending_inner, callback_inner) =
			(running.clone(), pending.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if !running_inner.get() {
				return;
			}
			step();
			if let (Some(win), Some(cb)) = (web_sys::window(), callback_inner.borrow().as_ref()) {
				pending_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(cb) = callback.borrow().as_ref() {
			pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		Some(Self {
			running,
			pending,
			callback,
		})
	}

	/// Cancel the pending frame and release the loop closure.
	pub fn stop(&self) {
		self.running.set(false);
		if let (Some(win), Some(handle)) = (web_sys::window(), self.pending.take()) {
			let _ = win.cancel_animation_frame(handle);
		}
		// The closure holds a clone of `callback`; dropping it breaks the cycle.
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

/// A one-shot `setTimeout`, cancelled on drop if it has not fired.
pub struct Timeout {
	handle: i32,
	_callback: Closure<dyn FnMut()>,
}

impl Timeout {
	pub fn start(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::once(f);
		let handle = window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				delay_ms,
			)
			.ok()?;
		Some(Self {
			handle,
			_callback: callback,
		})
	}
}

impl Drop for Timeout {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			window.clear_timeout_with_handle(self.handle);
		}
	}
}
