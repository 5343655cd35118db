//! Mode-dependent tuning for the hero network.
//!
//! Every size, radius and rate the animator uses lives here so the desktop
//! and mobile presets can be compared side by side. Distances are in CSS
//! pixels; rates are per frame.

use super::types::Mode;

/// How the initial layout is seeded.
#[derive(Clone, Debug)]
pub struct LayoutScale {
	/// Total node count, nav nodes included (labels are extra).
	pub node_count: usize,
	/// Network radius as a fraction of `min(width, height) / 2`.
	pub network_fraction: f64,
	/// Background disk radius as a fraction of the network radius.
	pub background_spread: f64,
	/// Nav ring radius as a fraction of the network radius.
	pub nav_ring: f64,
	pub background_radius: f64,
	pub nav_radius: f64,
	/// Distance from a nav node to its label along the ring angle.
	pub label_offset: f64,
	/// Minimum distance between a label anchor and the viewport edge.
	pub label_margin: f64,
}

/// Pointer-driven motion.
#[derive(Clone, Debug)]
pub struct MotionScale {
	pub lift_radius: f64,
	/// Lift at zero distance from the pointer.
	pub lift_amplitude: f64,
	pub lift_smoothing: f64,
	/// Pointer distance within which labels lean toward it.
	pub label_capture_radius: f64,
	/// Maximum fraction of the anchor-to-pointer vector a label leans by.
	pub label_pull: f64,
	pub label_smoothing: f64,
}

/// Edge formation.
#[derive(Clone, Debug)]
pub struct EdgeScale {
	pub max_distance: f64,
	/// Multiplier on `max_distance` for flickering edges.
	pub dynamic_reach: f64,
	pub min_alpha: f64,
	pub max_alpha: f64,
	pub line_width: f64,
}

/// Traveling particles.
#[derive(Clone, Debug)]
pub struct ParticleScale {
	/// Frames between spawns.
	pub spawn_interval: u32,
	pub speed_min: f64,
	pub speed_jitter: f64,
	pub size_min: f64,
	pub size_jitter: f64,
	pub opacity: f64,
}

/// Hit-testing slack and overlay sizes.
#[derive(Clone, Debug)]
pub struct HitScale {
	/// Extra radius added to every node when testing pointer hits.
	pub touch_radius: f64,
	/// Base hit radius for labels (before `touch_radius`).
	pub label_radius: f64,
	/// Whether a pointer disk is drawn under the cursor.
	pub pointer_indicator: bool,
	pub pointer_radius: f64,
	pub label_font_px: f64,
}

/// Complete tuning for one mode.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub layout: LayoutScale,
	pub motion: MotionScale,
	pub edge: EdgeScale,
	pub particle: ParticleScale,
	pub hit: HitScale,
}

impl ScaleConfig {
	pub fn for_mode(mode: Mode) -> Self {
		match mode {
			Mode::Desktop => Self::desktop(),
			Mode::Mobile => Self::mobile(),
		}
	}

	pub fn desktop() -> Self {
		Self {
			layout: LayoutScale {
				node_count: 120,
				network_fraction: 0.8,
				background_spread: 0.8,
				nav_ring: 0.65,
				background_radius: 2.0,
				nav_radius: 4.0,
				label_offset: 60.0,
				label_margin: 30.0,
			},
			motion: MotionScale {
				lift_radius: 150.0,
				lift_amplitude: 20.0,
				lift_smoothing: 0.1,
				label_capture_radius: 200.0,
				label_pull: 0.15,
				label_smoothing: 0.15,
			},
			edge: EdgeScale {
				max_distance: 120.0,
				dynamic_reach: 1.2,
				min_alpha: 0.15,
				max_alpha: 0.35,
				line_width: 1.2,
			},
			particle: ParticleScale {
				spawn_interval: 25,
				speed_min: 0.003,
				speed_jitter: 0.002,
				size_min: 2.0,
				size_jitter: 2.0,
				opacity: 0.8,
			},
			hit: HitScale {
				touch_radius: 20.0,
				label_radius: 40.0,
				pointer_indicator: true,
				pointer_radius: 10.0,
				label_font_px: 24.0,
			},
		}
	}

	pub fn mobile() -> Self {
		let desktop = Self::desktop();
		Self {
			layout: LayoutScale {
				node_count: 40,
				network_fraction: 0.5,
				label_offset: 40.0,
				..desktop.layout
			},
			motion: MotionScale {
				lift_radius: 100.0,
				..desktop.motion
			},
			particle: ParticleScale {
				spawn_interval: 30,
				..desktop.particle
			},
			hit: HitScale {
				touch_radius: 30.0,
				pointer_indicator: false,
				label_font_px: 11.0,
				..desktop.hit
			},
			edge: desktop.edge,
		}
	}

	/// Edge opacity for a given edge length: fades with distance, floored.
	pub fn edge_alpha(&self, distance: f64) -> f64 {
		let fade = (1.0 - distance / self.edge.max_distance) * self.edge.max_alpha;
		fade.max(self.edge.min_alpha)
	}

	pub fn label_font(&self) -> String {
		format!("bold {}px Inter, sans-serif", self.hit.label_font_px)
	}
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self::desktop()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mobile_is_smaller() {
		let (d, m) = (ScaleConfig::desktop(), ScaleConfig::mobile());
		assert!(m.layout.node_count < d.layout.node_count);
		assert!(m.layout.network_fraction < d.layout.network_fraction);
		assert!(m.motion.lift_radius < d.motion.lift_radius);
		assert!(m.hit.touch_radius > d.hit.touch_radius);
		assert!(!m.hit.pointer_indicator);
	}

	#[test]
	fn edge_alpha_is_floored_and_capped() {
		let cfg = ScaleConfig::desktop();
		assert!((cfg.edge_alpha(0.0) - 0.35).abs() < 1e-12);
		assert_eq!(cfg.edge_alpha(119.0), 0.15);
		// Label edges carry half their length, never more than the cap.
		assert!(cfg.edge_alpha(30.0) <= 0.35);
	}
}
