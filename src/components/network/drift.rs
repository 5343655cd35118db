//! Free-drifting networks for the navigation overlay and page backdrop.
//!
//! Unlike the hero, these nodes have velocities: a slow sinusoidal drift,
//! repulsion away from the pointer and damping, with either bouncing or
//! wrapping at the viewport edges.

use std::f64::consts::TAU;

use rand::Rng;

use super::types::{Connection, EdgeKind, NodeIdx, Point, Section, Viewport};

/// What happens when a node reaches the viewport edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
	/// Clamp inside and reflect velocity with the given restitution.
	Bounce { restitution: f64 },
	/// Teleport to the opposite side once `margin` pixels outside.
	Wrap { margin: f64 },
}

/// Motion and edge parameters for a drifting network.
#[derive(Clone, Debug)]
pub struct DriftParams {
	/// Angular rate of the drift sinusoids, per second of animation time.
	pub drift_rate: f64,
	/// Velocity added per frame by the drift.
	pub drift_strength: f64,
	pub interaction_radius: f64,
	/// Velocity added per frame at zero pointer distance.
	pub repel_strength: f64,
	pub damping: f64,
	pub max_distance: f64,
	pub boundary: Boundary,
	/// Extra hit radius around each node.
	pub hit_slack: f64,
	pub min_alpha: f64,
	pub max_alpha: f64,
	/// Animation seconds per frame.
	pub time_step: f64,
}

impl DriftParams {
	/// Full-screen section picker.
	pub fn overlay() -> Self {
		Self {
			drift_rate: 0.15,
			drift_strength: 0.008,
			interaction_radius: 250.0,
			repel_strength: 0.2,
			damping: 0.92,
			max_distance: 200.0,
			boundary: Boundary::Bounce { restitution: 0.5 },
			hit_slack: 15.0,
			min_alpha: 0.1,
			max_alpha: 0.25,
			time_step: 0.016,
		}
	}

	/// Page-wide decorative backdrop.
	pub fn backdrop() -> Self {
		Self {
			drift_rate: 0.2,
			drift_strength: 0.01,
			interaction_radius: 200.0,
			repel_strength: 0.25,
			damping: 0.93,
			max_distance: 180.0,
			boundary: Boundary::Wrap { margin: 50.0 },
			hit_slack: 10.0,
			min_alpha: 0.15,
			max_alpha: 0.35,
			time_step: 0.016,
		}
	}

	pub fn edge_alpha(&self, distance: f64) -> f64 {
		((1.0 - distance / self.max_distance) * self.max_alpha).max(self.min_alpha)
	}
}

/// A node with velocity.
#[derive(Clone, Debug)]
pub struct DriftNode {
	pub pos: Point,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Set for overlay nodes that stand for a section.
	pub section: Option<Section>,
}

/// State for one drifting network.
pub struct DriftNetwork {
	pub nodes: Vec<DriftNode>,
	pub connections: Vec<Connection>,
	pub pointer: Option<Point>,
	pub hovered: Option<NodeIdx>,
	/// Node pinned to the pointer, if any.
	pub dragged: Option<NodeIdx>,
	pub viewport: Viewport,
	pub params: DriftParams,
	time: f64,
}

impl DriftNetwork {
	fn with_nodes(nodes: Vec<DriftNode>, viewport: Viewport, params: DriftParams) -> Self {
		Self {
			nodes,
			connections: Vec::new(),
			pointer: None,
			hovered: None,
			dragged: None,
			viewport,
			params,
			time: 0.0,
		}
	}

	/// One node per section, evenly spaced on a ring of radius
	/// `min(width, height) / 3`.
	pub fn ring<R: Rng>(
		viewport: Viewport,
		sections: &[Section],
		params: DriftParams,
		rng: &mut R,
	) -> Self {
		let center = viewport.center();
		let radius = viewport.width.min(viewport.height) / 3.0;
		let nodes = sections
			.iter()
			.enumerate()
			.map(|(k, &section)| {
				let angle = k as f64 / sections.len() as f64 * TAU;
				DriftNode {
					pos: Point::new(
						center.x + angle.cos() * radius,
						center.y + angle.sin() * radius,
					),
					vx: (rng.random::<f64>() - 0.5) * 0.3,
					vy: (rng.random::<f64>() - 0.5) * 0.3,
					radius: 3.5,
					section: Some(section),
				}
			})
			.collect();
		Self::with_nodes(nodes, viewport, params)
	}

	/// `count` nodes scattered uniformly over the viewport.
	pub fn scattered<R: Rng>(
		viewport: Viewport,
		count: usize,
		params: DriftParams,
		rng: &mut R,
	) -> Self {
		let nodes = (0..count)
			.map(|_| DriftNode {
				pos: Point::new(
					rng.random::<f64>() * viewport.width,
					rng.random::<f64>() * viewport.height,
				),
				vx: (rng.random::<f64>() - 0.5) * 0.4,
				vy: (rng.random::<f64>() - 0.5) * 0.4,
				radius: 2.0 + rng.random::<f64>() * 1.5,
				section: None,
			})
			.collect();
		Self::with_nodes(nodes, viewport, params)
	}

	/// Advance physics by one frame and rebuild edges.
	pub fn step(&mut self) {
		let p = &self.params;
		let (pointer, dragged, vp, t) = (self.pointer, self.dragged, self.viewport, self.time);

		for (i, node) in self.nodes.iter_mut().enumerate() {
			if dragged == Some(NodeIdx::new(i)) {
				continue;
			}
			let phase = t * p.drift_rate;
			node.vx += (phase + i as f64).sin() * p.drift_strength;
			node.vy += (phase + i as f64 * 0.5).cos() * p.drift_strength;

			if let Some(ptr) = pointer {
				let (dx, dy) = (node.pos.x - ptr.x, node.pos.y - ptr.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < p.interaction_radius {
					let force = (p.interaction_radius - distance) / p.interaction_radius
						* p.repel_strength;
					let angle = dy.atan2(dx);
					node.vx += angle.cos() * force;
					node.vy += angle.sin() * force;
				}
			}

			node.vx *= p.damping;
			node.vy *= p.damping;
			node.pos.x += node.vx;
			node.pos.y += node.vy;
			apply_boundary(node, vp, p.boundary);
		}

		self.connections.clear();
		for i in 0..self.nodes.len() {
			for j in (i + 1)..self.nodes.len() {
				let distance = self.nodes[i].pos.distance(self.nodes[j].pos);
				if distance < p.max_distance {
					self.connections.push(Connection {
						from: NodeIdx::new(i),
						to: NodeIdx::new(j),
						distance,
						kind: EdgeKind::Proximity,
					});
				}
			}
		}

		self.time += p.time_step;
	}

	pub fn node(&self, idx: NodeIdx) -> Option<&DriftNode> {
		self.nodes.get(idx.index())
	}

	/// First node whose hit circle contains `p`.
	pub fn node_at(&self, p: Point) -> Option<NodeIdx> {
		let slack = self.params.hit_slack;
		self.nodes
			.iter()
			.position(|n| n.pos.distance(p) <= n.radius + slack)
			.map(NodeIdx::new)
	}

	/// Record the pointer, pin any dragged node to it and refresh hover.
	pub fn pointer_move(&mut self, p: Point) {
		self.pointer = Some(p);
		if let Some(node) = self.dragged.and_then(|idx| self.nodes.get_mut(idx.index())) {
			node.pos = p;
			node.vx = 0.0;
			node.vy = 0.0;
		}
		self.hovered = self.node_at(p);
	}

	/// Capture the node under `p`, if any.
	pub fn pointer_down(&mut self, p: Point) -> Option<NodeIdx> {
		self.dragged = self.node_at(p);
		self.dragged
	}

	/// Let go of the dragged node with a small random nudge.
	pub fn pointer_up<R: Rng>(&mut self, rng: &mut R) {
		if let Some(node) = self.dragged.take().and_then(|idx| self.nodes.get_mut(idx.index())) {
			node.vx = (rng.random::<f64>() - 0.5) * 0.2;
			node.vy = (rng.random::<f64>() - 0.5) * 0.2;
		}
	}

	/// Section of the node under `p`, if any.
	pub fn section_at(&self, p: Point) -> Option<Section> {
		self.node_at(p)
			.and_then(|idx| self.node(idx))
			.and_then(|n| n.section)
	}

	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
	}

	/// Pointer closeness in `[0, 1]`: 1 at the pointer, 0 at or beyond the
	/// interaction radius.
	pub fn pointer_proximity(&self, idx: NodeIdx) -> f64 {
		let (Some(p), Some(node)) = (self.pointer, self.node(idx)) else {
			return 0.0;
		};
		(1.0 - node.pos.distance(p) / self.params.interaction_radius).max(0.0)
	}
}

fn apply_boundary(node: &mut DriftNode, vp: Viewport, boundary: Boundary) {
	match boundary {
		Boundary::Bounce { restitution } => {
			let r = node.radius;
			if node.pos.x < r {
				node.pos.x = r;
				node.vx *= -restitution;
			}
			if node.pos.x > vp.width - r {
				node.pos.x = vp.width - r;
				node.vx *= -restitution;
			}
			if node.pos.y < r {
				node.pos.y = r;
				node.vy *= -restitution;
			}
			if node.pos.y > vp.height - r {
				node.pos.y = vp.height - r;
				node.vy *= -restitution;
			}
		}
		Boundary::Wrap { margin } => {
			if node.pos.x < -margin {
				node.pos.x = vp.width + margin;
			} else if node.pos.x > vp.width + margin {
				node.pos.x = -margin;
			}
			if node.pos.y < -margin {
				node.pos.y = vp.height + margin;
			} else if node.pos.y > vp.height + margin {
				node.pos.y = -margin;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn ring_places_one_node_per_section() {
		let mut rng = SmallRng::seed_from_u64(1);
		let vp = Viewport::new(900.0, 600.0);
		let net = DriftNetwork::ring(vp, &Section::ALL, DriftParams::overlay(), &mut rng);
		assert_eq!(net.nodes.len(), 6);
		for (node, section) in net.nodes.iter().zip(Section::ALL) {
			assert_eq!(node.section, Some(section));
			assert!((node.pos.distance(vp.center()) - 200.0).abs() < 1e-9);
			assert!(node.vx.abs() <= 0.15 && node.vy.abs() <= 0.15);
		}
	}

	#[test]
	fn bounce_keeps_nodes_inside() {
		let mut rng = SmallRng::seed_from_u64(2);
		let vp = Viewport::new(400.0, 300.0);
		let mut net = DriftNetwork::ring(vp, &Section::ALL, DriftParams::overlay(), &mut rng);
		net.pointer_move(vp.center());
		for _ in 0..2000 {
			net.step();
			for n in &net.nodes {
				assert!(n.pos.x >= n.radius && n.pos.x <= vp.width - n.radius);
				assert!(n.pos.y >= n.radius && n.pos.y <= vp.height - n.radius);
			}
		}
	}

	#[test]
	fn wrap_teleports_to_the_far_side() {
		let vp = Viewport::new(400.0, 300.0);
		let mut node = DriftNode {
			pos: Point::new(-51.0, 320.0),
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			section: None,
		};
		apply_boundary(&mut node, vp, Boundary::Wrap { margin: 50.0 });
		assert_eq!(node.pos, Point::new(450.0, 320.0));

		node.pos = Point::new(100.0, 351.0);
		apply_boundary(&mut node, vp, Boundary::Wrap { margin: 50.0 });
		assert_eq!(node.pos, Point::new(100.0, -50.0));
	}

	#[test]
	fn pointer_pushes_nodes_away() {
		let vp = Viewport::new(800.0, 800.0);
		let mut net = DriftNetwork::with_nodes(
			vec![DriftNode {
				pos: Point::new(420.0, 400.0),
				vx: 0.0,
				vy: 0.0,
				radius: 2.0,
				section: None,
			}],
			vp,
			DriftParams {
				drift_strength: 0.0,
				..DriftParams::backdrop()
			},
		);
		net.pointer_move(Point::new(400.0, 400.0));
		net.step();
		assert!(net.nodes[0].vx > 0.0);
		assert!(net.nodes[0].pos.x > 420.0);
		assert!(net.nodes[0].vy.abs() < 1e-9);
	}

	#[test]
	fn hit_test_uses_slack_and_reports_section() {
		let mut rng = SmallRng::seed_from_u64(3);
		let vp = Viewport::new(900.0, 600.0);
		let mut net = DriftNetwork::ring(vp, &Section::ALL, DriftParams::overlay(), &mut rng);
		let about = net.nodes[1].pos;

		assert_eq!(
			net.section_at(Point::new(about.x + 18.0, about.y)),
			Some(Section::About)
		);
		assert_eq!(net.section_at(Point::new(about.x + 19.0, about.y)), None);

		net.pointer_move(about);
		assert_eq!(net.hovered, Some(NodeIdx::new(1)));
		assert!((net.pointer_proximity(NodeIdx::new(1)) - 1.0).abs() < 1e-12);
	}

	#[test]
	fn dragged_node_is_pinned_until_released() {
		let mut rng = SmallRng::seed_from_u64(9);
		let vp = Viewport::new(800.0, 600.0);
		let mut net = DriftNetwork::scattered(vp, 35, DriftParams::backdrop(), &mut rng);
		let grab = net.nodes[7].pos;
		let idx = net
			.pointer_down(Point::new(grab.x + net.nodes[7].radius + 9.0, grab.y))
			.unwrap();
		assert_eq!(net.dragged, Some(idx));

		let target = Point::new(120.0, 80.0);
		net.pointer_move(target);
		for _ in 0..30 {
			net.step();
			let node = net.node(idx).unwrap();
			assert_eq!(node.pos, target);
			assert_eq!((node.vx, node.vy), (0.0, 0.0));
		}

		net.pointer_up(&mut rng);
		assert_eq!(net.dragged, None);
		let node = net.node(idx).unwrap();
		assert!(node.vx.abs() <= 0.1 && node.vy.abs() <= 0.1);
		assert!(node.vx != 0.0 || node.vy != 0.0);

		net.step();
		assert_ne!(net.node(idx).unwrap().pos, target);
	}

	#[test]
	fn pointer_down_on_empty_space_captures_nothing() {
		let vp = Viewport::new(800.0, 600.0);
		let mut net = DriftNetwork::with_nodes(
			vec![DriftNode {
				pos: Point::new(100.0, 100.0),
				vx: 0.0,
				vy: 0.0,
				radius: 2.0,
				section: None,
			}],
			vp,
			DriftParams::backdrop(),
		);
		assert_eq!(net.pointer_down(Point::new(113.0, 100.0)), None);
		assert_eq!(net.dragged, None);
		assert_eq!(net.pointer_down(Point::new(112.0, 100.0)), Some(NodeIdx::new(0)));
	}

	#[test]
	fn edges_respect_max_distance() {
		let mut rng = SmallRng::seed_from_u64(4);
		let mut net = DriftNetwork::scattered(
			Viewport::new(1200.0, 900.0),
			35,
			DriftParams::backdrop(),
			&mut rng,
		);
		net.step();
		for c in &net.connections {
			assert!(c.from < c.to);
			assert!(c.distance < 180.0);
		}
		assert_eq!(net.pointer_proximity(NodeIdx::new(0)), 0.0);
	}
}
