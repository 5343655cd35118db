//! Modal card for a clicked background node.

use leptos::prelude::*;

use super::types::NodeDetails;

/// Shows `details` while it is `Some`. Clicking the backdrop or the close
/// button calls `on_close`.
#[component]
pub fn NodeDetailsDialog(
	#[prop(into)] details: Signal<Option<NodeDetails>>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	move || {
		details.get().map(|d| {
			let bullets = d
				.bullet_points
				.into_iter()
				.map(|point| view! { <li>{point}</li> })
				.collect_view();
			let tags = d
				.tags
				.into_iter()
				.map(|tag| view! { <span class="node-details-tag">{tag}</span> })
				.collect_view();

			view! {
				<div
					class="node-details-backdrop"
					style="position: fixed; inset: 0; z-index: 60; background: rgba(15, 23, 42, 0.4); \
					       display: flex; align-items: center; justify-content: center;"
					on:click=move |_| on_close.run(())
				>
					<div
						class="node-details"
						role="dialog"
						aria-labelledby="node-details-title"
						style="background: #ffffff; border-radius: 1rem; padding: 2rem; max-width: 28rem;"
						on:click=|ev| ev.stop_propagation()
					>
						<span class="node-details-category">{d.category}</span>
						<h2 id="node-details-title">{d.label}</h2>
						<p class="node-details-description">{d.description}</p>
						<h3>"Key Points"</h3>
						<ul class="node-details-points">{bullets}</ul>
						<div class="node-details-tags">{tags}</div>
						<button class="node-details-close" on:click=move |_| on_close.run(())>
							"Close"
						</button>
					</div>
				</div>
			}
		})
	}
}
