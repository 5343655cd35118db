//! Animated node-network components for a single-page portfolio.
//!
//! Three canvases share one set of primitives:
//! - [`HeroNetwork`]: the landing animation. Background nodes drift under a
//!   pointer lift, five section nodes navigate, labels follow the pointer
//!   and particles run along edges.
//! - [`NavigationOverlay`]: a full-screen section picker.
//! - [`BackgroundNetwork`]: a pointer-transparent backdrop.
//!
//! The simulation ([`state`], [`drift`]) is plain Rust with no browser
//! dependency, so it is unit-tested natively. Components own the browser
//! side: canvas sizing, window listeners and the frame loop.
//!
//! # Example
//!
//! ```ignore
//! use node_network::{HeroNetwork, NetworkLoader};
//!
//! let (loading, set_loading) = signal(true);
//! view! {
//!     <NetworkLoader loading=loading />
//!     <HeroNetwork
//!         on_navigate=move |id: String| log::info!("go to {id}")
//!         on_loaded=move |_| set_loading.set(false)
//!     />
//! }
//! ```

mod background;
mod component;
pub mod config;
mod details;
pub mod drift;
pub mod graph;
pub mod layout;
mod loader;
mod overlay;
pub mod particles;
mod render;
pub mod scale;
pub mod state;
pub mod surface;
pub mod theme;
pub mod types;

pub use background::BackgroundNetwork;
pub use component::HeroNetwork;
pub use config::NetworkConfig;
pub use details::NodeDetailsDialog;
pub use loader::NetworkLoader;
pub use overlay::NavigationOverlay;
pub use theme::Theme;
pub use types::{NodeDetails, Section};
