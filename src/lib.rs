//! node-network: animated node-network navigation for a single-page portfolio.
//!
//! This crate provides WASM canvas components: a hero network whose nodes
//! navigate between page sections, a full-screen navigation overlay, and a
//! decorative background network.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::network::{
	BackgroundNetwork, HeroNetwork, NavigationOverlay, NetworkConfig, NetworkLoader, NodeDetails,
	NodeDetailsDialog, Section,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("node-network: logging initialized");
}

/// Load display copy from a script element with id="network-config".
/// Expected format: JSON object matching [`NetworkConfig`]; every field is
/// optional.
fn load_config() -> Option<NetworkConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("network-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match NetworkConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"node-network: loaded config for {} ({} skills)",
				config.owner_name,
				config.skills.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("node-network: failed to parse config: {}", e);
			None
		}
	}
}

/// Placeholder page for a non-home section.
#[component]
fn SectionPanel(
	#[prop(into)] section: Signal<Section>,
	#[prop(into)] on_home: Callback<()>,
) -> impl IntoView {
	view! {
		<section
			class="section-panel"
			id=move || section.get().id()
			style="min-height: 100vh; padding: 6rem 2rem; position: relative; z-index: 1;"
		>
			<h2>{move || section.get().label()}</h2>
			<button class="section-panel-home" on:click=move |_| on_home.run(())>
				"Back to network"
			</button>
		</section>
	}
}

/// Main application component.
/// Loads display copy from the DOM, then shows the hero on the home section
/// and a section panel everywhere else.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let title = format!("{} | {}", config.owner_name, config.owner_title);
	let (owner_name, owner_title) = (config.owner_name.clone(), config.owner_title.clone());
	provide_context(config);

	let (section, set_section) = signal(Section::Home);
	let (menu_open, set_menu_open) = signal(false);
	let (loading, set_loading) = signal(true);
	let (details, set_details) = signal(None::<NodeDetails>);

	let navigate = Callback::new(move |id: String| match Section::from_id(&id) {
		Some(target) => {
			info!("node-network: navigating to {}", target.id());
			set_details.set(None);
			set_section.set(target);
		}
		None => warn!("node-network: unknown section id {id:?}"),
	});
	let go_home = move |_: ()| set_section.set(Section::Home);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<NetworkLoader loading=loading />
		<BackgroundNetwork />

		<button
			class="menu-button"
			aria-label="Open navigation"
			style="position: fixed; top: 1.5rem; left: 1.5rem; z-index: 40;"
			on:click=move |_| set_menu_open.set(true)
		>
			"Menu"
		</button>

		<Show
			when=move || section.get() == Section::Home
			fallback=move || view! { <SectionPanel section=section on_home=go_home /> }
		>
			<div class="hero" style="position: relative; width: 100vw; height: 100vh; overflow: hidden;">
				<HeroNetwork
					on_navigate=navigate
					on_details=move |d: NodeDetails| set_details.set(Some(d))
					on_loaded=move |_: ()| set_loading.set(false)
				/>
				<div
					class="hero-intro"
					style="position: absolute; bottom: 3rem; left: 0; right: 0; text-align: center; pointer-events: none;"
				>
					<h1>{owner_name.clone()}</h1>
					<p>{owner_title.clone()}</p>
				</div>
			</div>
		</Show>

		<NavigationOverlay
			open=menu_open
			current=section
			on_navigate=navigate
			on_close=move |_: ()| set_menu_open.set(false)
		/>
		<NodeDetailsDialog details=details on_close=move |_: ()| set_details.set(None) />
	}
}
