//! Hero network state and the per-frame update step.
//!
//! One [`NetworkState`] value owns everything the hero animation knows: the
//! node arena, this frame's edges, live particles, pointer and drag state.
//! The frame loop calls [`NetworkState::tick`] and then hands the state to
//! the renderer read-only; pointer handlers mutate it between frames and
//! report anything the host must act on as an [`Interaction`].

use rand::Rng;

use super::config::NetworkConfig;
use super::graph;
use super::layout;
use super::particles::ParticleSystem;
use super::scale::ScaleConfig;
use super::types::{
	Connection, Interaction, Mode, Node, NodeDetails, NodeIdx, NodeRole, Point, Section, Viewport,
};

/// Chance per frame that a background node shows a glow ring.
const GLOW_CHANCE: f64 = 0.02;

/// Tracks which nav node the pointer has captured, if any.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node: Option<NodeIdx>,
}

/// Core hero-network state.
pub struct NetworkState {
	pub nodes: Vec<Node>,
	pub connections: Vec<Connection>,
	pub particles: ParticleSystem,
	/// Last known pointer position; `None` until the pointer first moves.
	pub pointer: Option<Point>,
	/// Nav node under the pointer.
	pub hovered: Option<NodeIdx>,
	pub drag: DragState,
	/// Background nodes drawing a glow ring this frame.
	pub glowing: Vec<NodeIdx>,
	pub viewport: Viewport,
	pub mode: Mode,
	pub pixel_ratio: f64,
	pub scale: ScaleConfig,
	/// Seconds, as passed to the latest `tick`.
	pub clock: f64,
	detail_tags: Vec<String>,
}

impl NetworkState {
	pub fn new<R: Rng>(
		viewport: Viewport,
		mode: Mode,
		pixel_ratio: f64,
		config: &NetworkConfig,
		rng: &mut R,
	) -> Self {
		let scale = ScaleConfig::for_mode(mode);
		let nodes = layout::seed(viewport, &scale, &config.skills, rng);
		Self::from_nodes(nodes, viewport, mode, pixel_ratio, config.detail_tags.clone())
	}

	/// Build a state around an existing node arena.
	pub fn from_nodes(
		nodes: Vec<Node>,
		viewport: Viewport,
		mode: Mode,
		pixel_ratio: f64,
		detail_tags: Vec<String>,
	) -> Self {
		Self {
			nodes,
			connections: Vec::new(),
			particles: ParticleSystem::default(),
			pointer: None,
			hovered: None,
			drag: DragState::default(),
			glowing: Vec::new(),
			viewport,
			mode,
			pixel_ratio,
			scale: ScaleConfig::for_mode(mode),
			clock: 0.0,
			detail_tags,
		}
	}

	pub fn node(&self, idx: NodeIdx) -> Option<&Node> {
		self.nodes.get(idx.index())
	}

	/// Advance the animation by one frame. `now` is wall-clock seconds and
	/// only drives the edge flicker and glow pulse.
	pub fn tick<R: Rng>(&mut self, now: f64, rng: &mut R) {
		self.clock = now;
		self.update_lift();
		self.update_labels();
		graph::rebuild(&mut self.connections, &self.nodes, &self.scale, now);
		self.particles
			.maybe_spawn(&self.connections, &self.nodes, &self.scale.particle, rng);
		self.particles.advance(&self.nodes, &self.scale.particle);
		self.pick_glows(rng);
	}

	fn update_lift(&mut self) {
		let motion = &self.scale.motion;
		let (pointer, dragged) = (self.pointer, self.drag.node);

		for (i, node) in self.nodes.iter_mut().enumerate() {
			if node.is_label() || dragged == Some(NodeIdx::new(i)) {
				continue;
			}
			let target = match pointer {
				Some(p) => {
					let d = node.anchor.distance(p);
					if d < motion.lift_radius {
						(1.0 - d / motion.lift_radius) * motion.lift_amplitude
					} else {
						0.0
					}
				}
				None => 0.0,
			};
			node.lift += (target - node.lift) * motion.lift_smoothing;
			node.pos = Point::new(node.anchor.x, node.anchor.y - node.lift);
		}
	}

	fn update_labels(&mut self) {
		let motion = &self.scale.motion;
		let (pointer, dragged) = (self.pointer, self.drag.node);

		for j in 0..self.nodes.len() {
			let NodeRole::Label { owner, angle, .. } = self.nodes[j].role else {
				continue;
			};
			let Some(owner_node) = self.nodes.get(owner.index()) else {
				continue;
			};
			// A dragged owner drags its label's anchor along with it.
			let rest = if dragged == Some(owner) {
				owner_node.pos
			} else {
				owner_node.anchor
			};
			let anchor = layout::label_anchor(rest, angle, self.viewport, &self.scale);

			let target = match pointer {
				Some(p) if p.distance(anchor) < motion.label_capture_radius => {
					let strength =
						(1.0 - p.distance(anchor) / motion.label_capture_radius) * motion.label_pull;
					anchor.lerp(p, strength)
				}
				_ => anchor,
			};

			let label = &mut self.nodes[j];
			label.anchor = anchor;
			label.pos = label.pos.lerp(target, motion.label_smoothing);
		}
	}

	fn pick_glows<R: Rng>(&mut self, rng: &mut R) {
		self.glowing.clear();
		for (i, node) in self.nodes.iter().enumerate() {
			if node.is_background() && rng.random::<f64>() < GLOW_CHANCE {
				self.glowing.push(NodeIdx::new(i));
			}
		}
	}

	fn touch_radius(&self) -> f64 {
		self.scale.hit.touch_radius
	}

	/// First nav node whose hit circle contains `p`.
	pub fn nav_at(&self, p: Point) -> Option<NodeIdx> {
		let slack = self.touch_radius();
		self.find(|n| n.is_nav() && n.pos.distance(p) <= n.radius + slack)
	}

	/// First label whose activation circle contains `p`.
	pub fn label_at(&self, p: Point) -> Option<NodeIdx> {
		let reach = self.scale.hit.label_radius + self.touch_radius();
		self.find(|n| n.is_label() && n.pos.distance(p) <= reach)
	}

	/// First background node whose hit circle contains `p`.
	pub fn background_at(&self, p: Point) -> Option<NodeIdx> {
		let slack = self.touch_radius();
		self.find(|n| n.is_background() && n.pos.distance(p) <= n.radius + slack)
	}

	fn find(&self, pred: impl Fn(&Node) -> bool) -> Option<NodeIdx> {
		self.nodes.iter().position(pred).map(NodeIdx::new)
	}

	/// Record the pointer, carry any dragged node with it and refresh hover.
	pub fn pointer_move(&mut self, p: Point) {
		self.pointer = Some(p);
		if let Some(idx) = self.drag.node {
			if let Some(node) = self.nodes.get_mut(idx.index()) {
				node.pos = p;
			}
		}
		self.hovered = self.nav_at(p);
	}

	/// A press inside a nav node's hit circle starts a drag; otherwise a
	/// press on a label navigates straight away.
	pub fn pointer_down(&mut self, p: Point) -> Interaction {
		if let Some(idx) = self.nav_at(p) {
			self.drag.node = Some(idx);
			return Interaction::None;
		}
		match self.label_at(p).and_then(|idx| self.section_of(idx)) {
			Some(section) => Interaction::Navigate(section),
			None => Interaction::None,
		}
	}

	/// Nav nodes navigate; background nodes open their detail card.
	pub fn click(&self, p: Point) -> Interaction {
		if let Some(section) = self.nav_at(p).and_then(|idx| self.section_of(idx)) {
			return Interaction::Navigate(section);
		}
		match self.background_at(p).and_then(|idx| self.node(idx)) {
			Some(node) => Interaction::ShowDetails(NodeDetails::for_skill(node, &self.detail_tags)),
			None => Interaction::None,
		}
	}

	pub fn pointer_up(&mut self) {
		self.drag.node = None;
	}

	/// Track the new surface size. The layout is not re-seeded; labels are
	/// re-clamped on the next tick.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
	}

	/// CSS cursor for the current hover state.
	pub fn cursor(&self) -> &'static str {
		if self.hovered.is_some() {
			"pointer"
		} else {
			"default"
		}
	}

	fn section_of(&self, idx: NodeIdx) -> Option<Section> {
		self.node(idx).and_then(Node::section)
	}
}
