//! Loading overlay shown until the hero reports it is ready.

use leptos::prelude::*;

use super::config::NetworkConfig;

/// Covers the page with the owner's name and title while `loading` is true,
/// then fades out and stops intercepting pointer input.
#[component]
pub fn NetworkLoader(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
	let config = use_context::<NetworkConfig>().unwrap_or_default();
	let class = move || {
		if loading.get() {
			"network-loader"
		} else {
			"network-loader network-loader--done"
		}
	};
	let style = move || {
		let (opacity, events) = if loading.get() { (1, "auto") } else { (0, "none") };
		format!(
			"position: fixed; inset: 0; z-index: 100; display: flex; flex-direction: column; \
			 align-items: center; justify-content: center; background: #ffffff; \
			 transition: opacity 0.5s ease; opacity: {opacity}; pointer-events: {events};"
		)
	};

	view! {
		<div class=class style=style aria-hidden=move || (!loading.get()).to_string()>
			<h1 class="network-loader-name">{config.owner_name}</h1>
			<p class="network-loader-title">{config.owner_title}</p>
		</div>
	}
}
