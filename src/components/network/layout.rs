//! Initial placement of the hero network.
//!
//! Background nodes fill a disk around the viewport centre; one nav node per
//! section sits on a ring inside it, each followed by its label node pushed
//! further out along the same angle.

use std::f64::consts::TAU;

use rand::Rng;

use super::scale::ScaleConfig;
use super::types::{Node, NodeIdx, NodeRole, Point, Section, Viewport};

/// Network radius for a viewport: a fraction of the shorter half-dimension.
pub fn network_radius(viewport: Viewport, scale: &ScaleConfig) -> f64 {
	viewport.width.min(viewport.height) / 2.0 * scale.layout.network_fraction
}

/// Where a label wants to sit given its owner's rest point.
pub fn label_anchor(rest: Point, angle: f64, viewport: Viewport, scale: &ScaleConfig) -> Point {
	let offset = scale.layout.label_offset;
	viewport.clamp(
		Point::new(rest.x + angle.cos() * offset, rest.y + angle.sin() * offset),
		scale.layout.label_margin,
	)
}

/// Seed the node arena. `skills` labels background nodes round-robin.
pub fn seed<R: Rng>(
	viewport: Viewport,
	scale: &ScaleConfig,
	skills: &[String],
	rng: &mut R,
) -> Vec<Node> {
	let center = viewport.center();
	let max_radius = network_radius(viewport, scale);
	let background_count = scale.layout.node_count.saturating_sub(Section::HERO.len());
	let mut nodes = Vec::with_capacity(background_count + Section::HERO.len() * 2);

	for i in 0..background_count {
		let angle = rng.random::<f64>() * TAU;
		let distance = rng.random::<f64>() * max_radius * scale.layout.background_spread;
		let pos = Point::new(
			center.x + angle.cos() * distance,
			center.y + angle.sin() * distance,
		);
		let label = if skills.is_empty() {
			String::new()
		} else {
			skills[i % skills.len()].clone()
		};
		nodes.push(Node {
			id: format!("node-{i}"),
			label,
			pos,
			anchor: pos,
			lift: 0.0,
			radius: scale.layout.background_radius,
			role: NodeRole::Background,
		});
	}

	let ring = max_radius * scale.layout.nav_ring;
	for (k, section) in Section::HERO.into_iter().enumerate() {
		let angle = k as f64 / Section::HERO.len() as f64 * TAU;
		let pos = Point::new(center.x + angle.cos() * ring, center.y + angle.sin() * ring);
		let owner = NodeIdx::new(nodes.len());
		nodes.push(Node {
			id: section.id().to_string(),
			label: section.label().to_string(),
			pos,
			anchor: pos,
			lift: 0.0,
			radius: scale.layout.nav_radius,
			role: NodeRole::Nav { section },
		});

		let label_pos = label_anchor(pos, angle, viewport, scale);
		nodes.push(Node {
			id: format!("label-{}", section.id()),
			label: section.label().to_string(),
			pos: label_pos,
			anchor: label_pos,
			lift: 0.0,
			radius: 0.0,
			role: NodeRole::Label {
				section,
				owner,
				angle,
			},
		});
	}

	nodes
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn skills() -> Vec<String> {
		["Python", "SQL", "R"].iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn labels_stay_inside_margins() {
		let viewports = [
			Viewport::new(1920.0, 1080.0),
			Viewport::new(375.0, 667.0),
			Viewport::new(800.0, 200.0),
			Viewport::new(200.0, 900.0),
		];
		for (i, vp) in viewports.into_iter().enumerate() {
			for scale in [ScaleConfig::desktop(), ScaleConfig::mobile()] {
				let mut rng = SmallRng::seed_from_u64(i as u64);
				let nodes = seed_nodes(vp, &scale, &mut rng);
				let margin = scale.layout.label_margin;
				for node in nodes.iter().filter(|n| n.is_label()) {
					assert!(node.pos.x >= margin && node.pos.x <= vp.width - margin);
					assert!(node.pos.y >= margin && node.pos.y <= vp.height - margin);
				}
			}
		}
	}

	fn seed_nodes(vp: Viewport, scale: &ScaleConfig, rng: &mut SmallRng) -> Vec<Node> {
		seed(vp, scale, &skills(), rng)
	}

	#[test]
	fn every_nav_node_owns_exactly_one_label() {
		let mut rng = SmallRng::seed_from_u64(7);
		let nodes = seed_nodes(Viewport::new(1280.0, 800.0), &ScaleConfig::desktop(), &mut rng);

		let navs: Vec<usize> = (0..nodes.len()).filter(|&i| nodes[i].is_nav()).collect();
		assert_eq!(navs.len(), Section::HERO.len());
		for nav in navs {
			let owned = nodes
				.iter()
				.filter(|n| matches!(n.role, NodeRole::Label { owner, .. } if owner.index() == nav))
				.count();
			assert_eq!(owned, 1);
		}
		for node in nodes.iter().filter(|n| n.is_label()) {
			let NodeRole::Label { owner, section, .. } = node.role else {
				unreachable!()
			};
			assert_eq!(nodes[owner.index()].role, NodeRole::Nav { section });
		}
	}

	#[test]
	fn node_counts_follow_mode() {
		let mut rng = SmallRng::seed_from_u64(1);
		let vp = Viewport::new(1280.0, 800.0);
		let desktop = seed_nodes(vp, &ScaleConfig::desktop(), &mut rng);
		let mobile = seed_nodes(vp, &ScaleConfig::mobile(), &mut rng);
		assert_eq!(desktop.iter().filter(|n| !n.is_label()).count(), 120);
		assert_eq!(mobile.iter().filter(|n| !n.is_label()).count(), 40);
	}

	#[test]
	fn background_fills_a_disk() {
		let mut rng = SmallRng::seed_from_u64(3);
		let vp = Viewport::new(1000.0, 600.0);
		let scale = ScaleConfig::desktop();
		let nodes = seed_nodes(vp, &scale, &mut rng);
		let limit = network_radius(vp, &scale) * scale.layout.background_spread;
		let background: Vec<&Node> = nodes.iter().filter(|n| n.is_background()).collect();
		assert!(background.iter().all(|n| n.pos.distance(vp.center()) <= limit));
		// A ring would leave the middle empty.
		assert!(background.iter().any(|n| n.pos.distance(vp.center()) < limit / 2.0));
		assert_eq!(background[4].label, "SQL");
	}
}
