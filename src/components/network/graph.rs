//! Per-frame edge computation.
//!
//! Edges are derived from node positions only and rebuilt from scratch each
//! frame. Pairs are visited with `i < j`, so an edge is never stored twice
//! and never loops back to its own node.

use super::scale::ScaleConfig;
use super::types::{Connection, EdgeKind, Node, NodeIdx, NodeRole};

/// Deterministic hash of a float into `[0, 1)`.
pub fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

/// Time bucket length for flicker draws, in seconds.
const FLICKER_PERIOD: f64 = 0.25;

/// Whether the flickering edge between background nodes `i` and `j` is
/// visible at `time` (seconds). A slow sinusoid gates which pairs may show,
/// and a hash of the pair and the current time bucket picks roughly one in
/// twenty of those.
pub fn flickers(i: usize, j: usize, time: f64) -> bool {
	let wave = (time + i as f64 * 0.5 + j as f64 * 0.3).sin() * 0.5 + 0.5;
	if wave <= 0.4 {
		return false;
	}
	let bucket = (time / FLICKER_PERIOD).floor();
	let seed = i as f64 * 131.0 + j as f64 * 17.0 + bucket * 0.618;
	pseudo_random(seed) > 0.95
}

/// Rebuild `out` with every edge present at `time`.
pub fn rebuild(out: &mut Vec<Connection>, nodes: &[Node], scale: &ScaleConfig, time: f64) {
	out.clear();
	let max = scale.edge.max_distance;
	let reach = max * scale.edge.dynamic_reach;

	for (i, a) in nodes.iter().enumerate() {
		if a.is_label() {
			continue;
		}
		for (j, b) in nodes.iter().enumerate().skip(i + 1) {
			if b.is_label() {
				continue;
			}
			let distance = a.pos.distance(b.pos);
			let kind = if distance < max {
				EdgeKind::Proximity
			} else if distance < reach
				&& a.is_background()
				&& b.is_background()
				&& flickers(i, j, time)
			{
				EdgeKind::Dynamic
			} else {
				continue;
			};
			out.push(Connection {
				from: NodeIdx::new(i),
				to: NodeIdx::new(j),
				distance,
				kind,
			});
		}
	}

	for (j, label) in nodes.iter().enumerate() {
		let NodeRole::Label { owner, .. } = label.role else {
			continue;
		};
		let Some(nav) = nodes.get(owner.index()) else {
			continue;
		};
		let (from, to) = if owner.index() < j {
			(owner, NodeIdx::new(j))
		} else {
			(NodeIdx::new(j), owner)
		};
		out.push(Connection {
			from,
			to,
			distance: nav.pos.distance(label.pos) * 0.5,
			kind: EdgeKind::Label,
		});
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::layout;
	use super::super::types::{Point, Viewport};
	use super::*;

	fn background(x: f64, y: f64) -> Node {
		Node {
			id: String::new(),
			label: String::new(),
			pos: Point::new(x, y),
			anchor: Point::new(x, y),
			lift: 0.0,
			radius: 2.0,
			role: NodeRole::Background,
		}
	}

	#[test]
	fn edges_are_unique_and_never_self_loops() {
		let mut rng = SmallRng::seed_from_u64(11);
		let scale = ScaleConfig::desktop();
		let nodes = layout::seed(Viewport::new(1280.0, 800.0), &scale, &[], &mut rng);
		let mut edges = Vec::new();

		for step in 0..40 {
			rebuild(&mut edges, &nodes, &scale, step as f64 * 0.37);
			let mut seen = HashSet::new();
			for e in &edges {
				assert!(e.from < e.to);
				assert!(seen.insert((e.from, e.to)), "duplicate edge {e:?}");
			}
		}
	}

	#[test]
	fn proximity_threshold_is_strict() {
		let scale = ScaleConfig::desktop();
		let nodes = vec![
			background(0.0, 0.0),
			background(119.0, 0.0),
			background(0.0, 500.0),
		];
		let mut edges = Vec::new();
		rebuild(&mut edges, &nodes, &scale, 0.0);
		let proximity: Vec<_> = edges
			.iter()
			.filter(|e| e.kind == EdgeKind::Proximity)
			.collect();
		assert_eq!(proximity.len(), 1);
		assert_eq!((proximity[0].from.index(), proximity[0].to.index()), (0, 1));
		assert!((proximity[0].distance - 119.0).abs() < 1e-9);
	}

	#[test]
	fn label_tether_is_half_length() {
		let mut rng = SmallRng::seed_from_u64(5);
		let scale = ScaleConfig::desktop();
		let nodes = layout::seed(Viewport::new(1280.0, 800.0), &scale, &[], &mut rng);
		let mut edges = Vec::new();
		rebuild(&mut edges, &nodes, &scale, 0.0);

		let tethers: Vec<_> = edges.iter().filter(|e| e.kind == EdgeKind::Label).collect();
		assert_eq!(tethers.len(), 5);
		for e in tethers {
			let full = nodes[e.from.index()].pos.distance(nodes[e.to.index()].pos);
			assert!((e.distance - full * 0.5).abs() < 1e-9);
		}
	}

	#[test]
	fn flicker_is_a_pure_function_of_pair_and_time() {
		for t in [0.0, 1.3, 42.0] {
			assert_eq!(flickers(3, 9, t), flickers(3, 9, t));
		}
		// Over a long window some pairs must show up and most must not.
		let hits = (0..2000)
			.filter(|k| flickers(k % 50, 50 + k % 37, *k as f64 * 0.1))
			.count();
		assert!(hits > 0 && hits < 400);
	}

	#[test]
	fn dynamic_edges_only_link_background_nodes_in_the_outer_band() {
		let scale = ScaleConfig::desktop();
		let nodes: Vec<Node> = (0..60).map(|i| background(i as f64 * 130.0, 0.0)).collect();
		let mut edges = Vec::new();
		let mut saw_dynamic = false;
		for step in 0..400 {
			rebuild(&mut edges, &nodes, &scale, step as f64 * 0.25);
			for e in edges.iter().filter(|e| e.kind == EdgeKind::Dynamic) {
				saw_dynamic = true;
				assert!(e.distance >= 120.0 && e.distance < 144.0);
			}
		}
		assert!(saw_dynamic);
	}
}
