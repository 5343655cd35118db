//! Particles that travel along edges.
//!
//! A particle remembers the two node handles of the edge it was spawned on
//! and re-reads their positions every frame, so it follows endpoints that
//! move underneath it.

use rand::Rng;

use super::scale::ParticleScale;
use super::types::{Connection, Node, NodeIdx, Point};

/// Ease-in-out cubic over `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// A single particle on one edge.
#[derive(Clone, Debug)]
pub struct Particle {
	pub from: NodeIdx,
	pub to: NodeIdx,
	pub pos: Point,
	/// Fraction of the edge travelled, in `[0, 1)` while alive.
	pub progress: f64,
	pub speed: f64,
	pub size: f64,
	pub opacity: f64,
}

/// Live particles plus the spawn cadence counter.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	spawn_timer: u32,
}

impl ParticleSystem {
	/// Count one frame and, once the interval has elapsed, put a particle on
	/// a random edge. Does nothing when there are no edges.
	pub fn maybe_spawn<R: Rng>(
		&mut self,
		edges: &[Connection],
		nodes: &[Node],
		style: &ParticleScale,
		rng: &mut R,
	) {
		self.spawn_timer += 1;
		if self.spawn_timer <= style.spawn_interval {
			return;
		}
		self.spawn_timer = 0;
		if edges.is_empty() {
			return;
		}
		let edge = edges[rng.random_range(0..edges.len())];
		let Some(source) = nodes.get(edge.from.index()) else {
			return;
		};
		self.particles.push(Particle {
			from: edge.from,
			to: edge.to,
			pos: source.pos,
			progress: 0.0,
			speed: style.speed_min + rng.random::<f64>() * style.speed_jitter,
			size: style.size_min + rng.random::<f64>() * style.size_jitter,
			opacity: style.opacity,
		});
	}

	/// Move every particle forward. Finished particles and particles whose
	/// endpoints no longer resolve are dropped.
	pub fn advance(&mut self, nodes: &[Node], style: &ParticleScale) {
		self.particles.retain_mut(|p| {
			p.progress += p.speed;
			if p.progress >= 1.0 {
				return false;
			}
			let (Some(from), Some(to)) = (nodes.get(p.from.index()), nodes.get(p.to.index()))
			else {
				return false;
			};
			p.pos = from.pos.lerp(to.pos, ease_in_out_cubic(p.progress));
			p.opacity = style.opacity * (1.0 - p.progress);
			true
		});
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::scale::ScaleConfig;
	use super::super::types::{EdgeKind, NodeRole};
	use super::*;

	fn node_at(x: f64, y: f64) -> Node {
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

	fn edge(from: usize, to: usize) -> Connection {
		Connection {
			from: NodeIdx::new(from),
			to: NodeIdx::new(to),
			distance: 100.0,
			kind: EdgeKind::Proximity,
		}
	}

	#[test]
	fn easing_hits_endpoints_and_midpoint() {
		assert_eq!(ease_in_out_cubic(0.0), 0.0);
		assert_eq!(ease_in_out_cubic(0.5), 0.5);
		assert_eq!(ease_in_out_cubic(1.0), 1.0);
		let mut last = 0.0;
		for k in 1..=100 {
			let v = ease_in_out_cubic(k as f64 / 100.0);
			assert!(v >= last);
			last = v;
		}
	}

	#[test]
	fn spawn_waits_for_interval() {
		let style = ScaleConfig::desktop().particle;
		let nodes = vec![node_at(0.0, 0.0), node_at(50.0, 0.0)];
		let edges = vec![edge(0, 1)];
		let mut rng = SmallRng::seed_from_u64(1);
		let mut system = ParticleSystem::default();

		for _ in 0..style.spawn_interval {
			system.maybe_spawn(&edges, &nodes, &style, &mut rng);
		}
		assert!(system.is_empty());
		system.maybe_spawn(&edges, &nodes, &style, &mut rng);
		assert_eq!(system.len(), 1);
		assert_eq!(system.particles[0].pos, Point::new(0.0, 0.0));
	}

	#[test]
	fn spawn_with_no_edges_is_a_no_op() {
		let style = ScaleConfig::desktop().particle;
		let mut rng = SmallRng::seed_from_u64(1);
		let mut system = ParticleSystem::default();
		for _ in 0..200 {
			system.maybe_spawn(&[], &[], &style, &mut rng);
		}
		assert!(system.is_empty());
	}

	#[test]
	fn opacity_fades_to_zero_and_finished_particles_vanish() {
		let style = ScaleConfig::desktop().particle;
		let nodes = vec![node_at(0.0, 0.0), node_at(100.0, 0.0)];
		let mut system = ParticleSystem::default();
		system.particles.push(Particle {
			from: NodeIdx::new(0),
			to: NodeIdx::new(1),
			pos: nodes[0].pos,
			progress: 0.0,
			speed: 0.125,
			size: 2.0,
			opacity: style.opacity,
		});

		let mut last = f64::INFINITY;
		for _ in 0..7 {
			system.advance(&nodes, &style);
			let p = &system.particles[0];
			assert!(p.opacity <= last);
			assert!((p.opacity - 0.8 * (1.0 - p.progress)).abs() < 1e-12);
			last = p.opacity;
		}
		system.advance(&nodes, &style);
		assert!(system.is_empty());
	}

	#[test]
	fn particles_track_moving_endpoints() {
		let style = ScaleConfig::desktop().particle;
		let mut nodes = vec![node_at(0.0, 0.0), node_at(100.0, 0.0)];
		let mut system = ParticleSystem::default();
		system.particles.push(Particle {
			from: NodeIdx::new(0),
			to: NodeIdx::new(1),
			pos: nodes[0].pos,
			progress: 0.25,
			speed: 0.25,
			size: 2.0,
			opacity: style.opacity,
		});
		nodes[1].pos = Point::new(0.0, 100.0);
		system.advance(&nodes, &style);
		let p = &system.particles[0];
		assert_eq!(p.pos, Point::new(0.0, 50.0));
	}

	#[test]
	fn stale_endpoints_drop_the_particle() {
		let style = ScaleConfig::desktop().particle;
		let nodes = vec![node_at(0.0, 0.0)];
		let mut system = ParticleSystem::default();
		system.particles.push(Particle {
			from: NodeIdx::new(0),
			to: NodeIdx::new(9),
			pos: nodes[0].pos,
			progress: 0.0,
			speed: 0.01,
			size: 2.0,
			opacity: style.opacity,
		});
		system.advance(&nodes, &style);
		assert!(system.is_empty());
	}
}
