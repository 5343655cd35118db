//! Page-wide decorative network behind the content.
//!
//! The canvas ignores pointer events so page content stays clickable. The
//! network listens on the window instead: the pointer repels nodes, and a
//! press near a node picks it up until release.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::HtmlCanvasElement;

use super::drift::{DriftNetwork, DriftParams};
use super::render;
use super::surface::{FrameLoop, Listeners, Surface, event_point, window_viewport};
use super::theme::Theme;

/// Number of backdrop nodes.
const BACKDROP_NODES: usize = 35;

struct BackdropSession {
	frames: FrameLoop,
	listeners: Listeners,
}

impl BackdropSession {
	fn mount(canvas: HtmlCanvasElement) -> Option<Self> {
		let surface = Rc::new(Surface::acquire(canvas)?);
		let viewport = window_viewport()?;
		surface.fit(viewport);

		let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64 ^ 0x9e37_79b9);
		let net = DriftNetwork::scattered(viewport, BACKDROP_NODES, DriftParams::backdrop(), &mut rng);
		let net = Rc::new(RefCell::new(net));
		let rng = Rc::new(RefCell::new(rng));

		let mut listeners = Listeners::on_window()?;
		for event in ["mousemove", "touchmove"] {
			let net = net.clone();
			listeners.listen(event, move |ev| {
				if let Some(p) = event_point(&ev) {
					net.borrow_mut().pointer_move(p);
				}
			});
		}
		for event in ["mousedown", "touchstart"] {
			let net = net.clone();
			listeners.listen(event, move |ev| {
				if let Some(p) = event_point(&ev) {
					net.borrow_mut().pointer_down(p);
				}
			});
		}
		for event in ["mouseup", "touchend"] {
			let (net, rng) = (net.clone(), rng.clone());
			listeners.listen(event, move |_| {
				net.borrow_mut().pointer_up(&mut *rng.borrow_mut());
			});
		}
		{
			let (net, surface) = (net.clone(), surface.clone());
			listeners.listen("resize", move |_| {
				if let Some(viewport) = window_viewport() {
					surface.fit(viewport);
					net.borrow_mut().resize(viewport);
				}
			});
		}

		let theme = Theme::default();
		let frames = FrameLoop::start(move || {
			let mut n = net.borrow_mut();
			n.step();
			render::render_backdrop(&n, &surface.ctx, surface.pixel_ratio, &theme);
		})?;

		info!("node-network: backdrop mounted");
		Some(Self { frames, listeners })
	}

	fn teardown(self) {
		self.frames.stop();
		drop(self.listeners);
	}
}

/// Fixed network drawn behind the page. Its nodes can be picked up and
/// dragged from anywhere on the page.
#[component]
pub fn BackgroundNetwork() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session = StoredValue::new_local(None::<BackdropSession>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(old) = session.try_update_value(|s| s.take()).flatten() {
			old.teardown();
		}
		session.set_value(BackdropSession::mount(canvas.into()));
	});

	on_cleanup(move || {
		if let Some(s) = session.try_update_value(|s| s.take()).flatten() {
			s.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="background-network-canvas"
			style="position: fixed; top: 0; left: 0; z-index: -1; pointer-events: none; opacity: 0.6;"
		/>
	}
}
