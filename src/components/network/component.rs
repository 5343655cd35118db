//! Leptos component wrapping the hero network canvas.
//!
//! The component mounts a full-viewport canvas, seeds a [`NetworkState`] and
//! drives it from a `requestAnimationFrame` loop. Pointer input is read from
//! window listeners so the canvas never swallows page scrolling. Everything
//! the component registers is released in `on_cleanup`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::HtmlCanvasElement;

use super::config::NetworkConfig;
use super::render;
use super::state::NetworkState;
use super::surface::{FrameLoop, Listeners, Surface, Timeout, event_point, window_viewport};
use super::theme::Theme;
use super::types::{Interaction, Mode, NodeDetails};

/// Host callbacks a pointer interaction can trigger.
#[derive(Clone, Copy)]
struct HeroCallbacks {
	navigate: Callback<String>,
	details: Option<Callback<NodeDetails>>,
}

impl HeroCallbacks {
	/// Must be called with no borrow of the state outstanding.
	fn dispatch(&self, interaction: Interaction) {
		match interaction {
			Interaction::None => {}
			Interaction::Navigate(section) => self.navigate.run(section.id().to_string()),
			Interaction::ShowDetails(details) => {
				if let Some(cb) = self.details {
					cb.run(details);
				}
			}
		}
	}
}

/// Everything one mounted hero owns in the browser.
struct HeroSession {
	frames: FrameLoop,
	listeners: Listeners,
	loader: Option<Timeout>,
}

impl HeroSession {
	fn mount(
		canvas: HtmlCanvasElement,
		config: &NetworkConfig,
		callbacks: HeroCallbacks,
		on_loaded: Option<Callback<()>>,
	) -> Option<Self> {
		let surface = Rc::new(Surface::acquire(canvas)?);
		let viewport = window_viewport()?;
		let mode = Mode::from_width(viewport.width);
		surface.fit(viewport);

		let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
		let state = NetworkState::new(viewport, mode, surface.pixel_ratio, config, &mut rng);
		info!(
			"node-network: hero seeded {} nodes ({:?}, {}x{})",
			state.nodes.len(),
			mode,
			viewport.width,
			viewport.height
		);
		let state = Rc::new(RefCell::new(state));

		let mut listeners = Listeners::on_window()?;
		for event in ["mousemove", "touchmove"] {
			let (state, surface) = (state.clone(), surface.clone());
			listeners.listen(event, move |ev| {
				let Some(p) = event_point(&ev) else {
					return;
				};
				let cursor = {
					let mut s = state.borrow_mut();
					s.pointer_move(p);
					s.cursor()
				};
				surface.set_cursor(cursor);
			});
		}
		for event in ["mousedown", "touchstart"] {
			let (state, surface) = (state.clone(), surface.clone());
			listeners.listen(event, move |ev| {
				let Some(p) = event_point(&ev).filter(|_| surface.is_target(&ev)) else {
					return;
				};
				let interaction = state.borrow_mut().pointer_down(p);
				callbacks.dispatch(interaction);
			});
		}
		{
			let (state, surface) = (state.clone(), surface.clone());
			listeners.listen("click", move |ev| {
				let Some(p) = event_point(&ev).filter(|_| surface.is_target(&ev)) else {
					return;
				};
				let interaction = state.borrow().click(p);
				callbacks.dispatch(interaction);
			});
		}
		for event in ["mouseup", "touchend"] {
			let state = state.clone();
			listeners.listen(event, move |_| state.borrow_mut().pointer_up());
		}
		{
			let (state, surface) = (state.clone(), surface.clone());
			listeners.listen("resize", move |_| {
				let Some(viewport) = window_viewport() else {
					return;
				};
				surface.fit(viewport);
				state.borrow_mut().resize(viewport);
				debug!(
					"node-network: hero resized to {}x{}",
					viewport.width, viewport.height
				);
			});
		}

		let loader = Timeout::start(config.loader_delay_ms, move || {
			if let Some(cb) = on_loaded {
				cb.run(());
			}
		});

		let theme = Theme::default();
		let frames = FrameLoop::start(move || {
			let now = js_sys::Date::now() / 1000.0;
			let mut s = state.borrow_mut();
			s.tick(now, &mut rng);
			render::render(&s, &surface.ctx, &theme);
		})?;

		info!(
			"node-network: hero mounted with {} listeners",
			listeners.len()
		);
		Some(Self {
			frames,
			listeners,
			loader,
		})
	}

	fn teardown(self) {
		self.frames.stop();
		drop(self.listeners);
		drop(self.loader);
		info!("node-network: hero torn down");
	}
}

/// Full-viewport hero animation with five navigable section nodes.
///
/// `on_navigate` receives a section id when a nav node is clicked or its
/// label is pressed. `on_details` receives a detail card for clicked
/// background nodes. `on_loaded` fires once, shortly after mounting. Display
/// copy comes from a [`NetworkConfig`] in context, or the defaults.
#[component]
pub fn HeroNetwork(
	#[prop(into)] on_navigate: Callback<String>,
	#[prop(optional, into)] on_details: Option<Callback<NodeDetails>>,
	#[prop(optional, into)] on_loaded: Option<Callback<()>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session = StoredValue::new_local(None::<HeroSession>);
	let config = use_context::<NetworkConfig>().unwrap_or_default();
	let callbacks = HeroCallbacks {
		navigate: on_navigate,
		details: on_details,
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let previous = session.try_update_value(|s| s.take()).flatten();
		if let Some(old) = previous {
			old.teardown();
		}
		let mounted = HeroSession::mount(canvas, &config, callbacks, on_loaded);
		session.set_value(mounted);
	});

	on_cleanup(move || {
		if let Some(s) = session.try_update_value(|s| s.take()).flatten() {
			s.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="hero-network-canvas"
			style="display: block; position: absolute; top: 0; left: 0; z-index: 0; touch-action: none;"
		/>
	}
}
