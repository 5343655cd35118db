//! Full-screen navigation overlay: the six sections as a drifting network.
//!
//! The canvas only exists while the overlay is open, so opening mounts a
//! fresh session and closing tears it down.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use super::drift::{DriftNetwork, DriftParams};
use super::render;
use super::surface::{FrameLoop, Listeners, Surface, event_point, window_viewport};
use super::theme::Theme;
use super::types::Section;

struct OverlaySession {
	frames: FrameLoop,
	listeners: Listeners,
}

impl OverlaySession {
	fn mount(
		canvas: HtmlCanvasElement,
		current: Signal<Section>,
		on_navigate: Callback<String>,
		on_close: Callback<()>,
	) -> Option<Self> {
		let surface = Rc::new(Surface::acquire(canvas)?);
		let viewport = window_viewport()?;
		surface.fit(viewport);

		let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
		let net = DriftNetwork::ring(viewport, &Section::ALL, DriftParams::overlay(), &mut rng);
		let net = Rc::new(RefCell::new(net));

		let mut listeners = Listeners::on_window()?;
		{
			let (net, surface) = (net.clone(), surface.clone());
			listeners.listen("mousemove", move |ev| {
				let Some(p) = event_point(&ev) else {
					return;
				};
				let hovering = {
					let mut n = net.borrow_mut();
					n.pointer_move(p);
					n.hovered.is_some()
				};
				surface.set_cursor(if hovering { "pointer" } else { "default" });
			});
		}
		for event in ["mousedown", "touchstart"] {
			let (net, surface) = (net.clone(), surface.clone());
			listeners.listen(event, move |ev| {
				let Some(p) = event_point(&ev).filter(|_| surface.is_target(&ev)) else {
					return;
				};
				let picked = net.borrow().section_at(p);
				if let Some(section) = picked {
					on_navigate.run(section.id().to_string());
					on_close.run(());
				}
			});
		}
		listeners.listen("keydown", move |ev| {
			let escape = ev
				.dyn_ref::<KeyboardEvent>()
				.is_some_and(|k| k.key() == "Escape");
			if escape {
				on_close.run(());
			}
		});
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
			let section = current.get_untracked();
			render::render_overlay(&n, &surface.ctx, surface.pixel_ratio, &theme, section);
		})?;

		info!("node-network: navigation overlay opened");
		Some(Self { frames, listeners })
	}

	fn teardown(self) {
		self.frames.stop();
		drop(self.listeners);
		info!("node-network: navigation overlay closed");
	}
}

#[component]
fn OverlayCanvas(
	current: Signal<Section>,
	on_navigate: Callback<String>,
	on_close: Callback<()>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session = StoredValue::new_local(None::<OverlaySession>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(old) = session.try_update_value(|s| s.take()).flatten() {
			old.teardown();
		}
		session.set_value(OverlaySession::mount(
			canvas.into(),
			current,
			on_navigate,
			on_close,
		));
	});

	on_cleanup(move || {
		if let Some(s) = session.try_update_value(|s| s.take()).flatten() {
			s.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="navigation-overlay-canvas"
			style="display: block; position: absolute; top: 0; left: 0;"
		/>
	}
}

/// Section picker shown over the page while `open` is true.
///
/// Clicking a node calls `on_navigate` with its section id and then
/// `on_close`. Escape and the close button call `on_close` only.
#[component]
pub fn NavigationOverlay(
	#[prop(into)] open: Signal<bool>,
	#[prop(into)] current: Signal<Section>,
	#[prop(into)] on_navigate: Callback<String>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	view! {
		<Show when=move || open.get()>
			<div
				class="navigation-overlay"
				style="position: fixed; inset: 0; z-index: 50;"
			>
				<OverlayCanvas current=current on_navigate=on_navigate on_close=on_close />
				<button
					class="navigation-overlay-close"
					aria-label="Close navigation"
					style="position: absolute; top: 1.5rem; right: 1.5rem; z-index: 1;"
					on:click=move |_| on_close.run(())
				>
					"Close"
				</button>
			</div>
		</Show>
	}
}
