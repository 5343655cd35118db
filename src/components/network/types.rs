//! Node, edge and interaction types shared by the animators.

/// Viewport width below which the network switches to its mobile preset.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// A navigable portfolio section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
	Home,
	About,
	Skills,
	Experience,
	Projects,
	Contact,
}

impl Section {
	/// Sections reachable from the hero network, in ring order.
	pub const HERO: [Section; 5] = [
		Section::About,
		Section::Skills,
		Section::Experience,
		Section::Projects,
		Section::Contact,
	];

	/// Every section, including the home/root entry used by the overlay.
	pub const ALL: [Section; 6] = [
		Section::Home,
		Section::About,
		Section::Skills,
		Section::Experience,
		Section::Projects,
		Section::Contact,
	];

	pub fn id(self) -> &'static str {
		match self {
			Section::Home => "home",
			Section::About => "about",
			Section::Skills => "skills",
			Section::Experience => "experience",
			Section::Projects => "projects",
			Section::Contact => "contact",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Section::Home => "Home",
			Section::About => "About",
			Section::Skills => "Skills",
			Section::Experience => "Experience",
			Section::Projects => "Projects",
			Section::Contact => "Contact",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.id() == id)
	}
}

/// Layout preset selected once at mount from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	Desktop,
	Mobile,
}

impl Mode {
	pub fn from_width(width: f64) -> Self {
		if width < MOBILE_BREAKPOINT {
			Mode::Mobile
		} else {
			Mode::Desktop
		}
	}
}

/// A position in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	pub fn lerp(self, other: Point, t: f64) -> Point {
		Point::new(
			self.x + (other.x - self.x) * t,
			self.y + (other.y - self.y) * t,
		)
	}
}

/// Drawing surface size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	/// Clamp a point so it stays `margin` pixels inside every edge.
	///
	/// On a viewport narrower than `2 * margin` the point collapses onto the
	/// centre line instead of inverting the range.
	pub fn clamp(&self, p: Point, margin: f64) -> Point {
		let clamp_axis = |v: f64, dim: f64| {
			if dim <= 2.0 * margin {
				dim / 2.0
			} else {
				v.clamp(margin, dim - margin)
			}
		};
		Point::new(clamp_axis(p.x, self.width), clamp_axis(p.y, self.height))
	}
}

/// Stable handle to a node in the network's node arena.
///
/// Nodes are only ever appended at seeding time, so a handle keeps pointing
/// at the same node for the lifetime of the state it came from. Lookups go
/// through [`NetworkState::node`](super::state::NetworkState::node) and
/// return `None` for handles that do not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIdx(usize);

impl NodeIdx {
	pub(crate) const fn new(index: usize) -> Self {
		Self(index)
	}

	pub fn index(self) -> usize {
		self.0
	}
}

/// What a node is for. Decides how it moves, draws and reacts to input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeRole {
	/// Decorative dot; clicking it opens a detail card.
	Background,
	/// Clickable and draggable entry point to a section.
	Nav { section: Section },
	/// Floating text bound to its owning nav node.
	Label {
		section: Section,
		owner: NodeIdx,
		/// Outward offset angle fixed when the layout was seeded.
		angle: f64,
	},
}

/// A point in the animated graph.
#[derive(Clone, Debug)]
pub struct Node {
	pub id: String,
	pub label: String,
	/// Rendered position for the current frame.
	pub pos: Point,
	/// Rest position the node eases back to.
	pub anchor: Point,
	/// Smoothed upward displacement from pointer proximity.
	pub lift: f64,
	pub radius: f64,
	pub role: NodeRole,
}

impl Node {
	pub fn is_label(&self) -> bool {
		matches!(self.role, NodeRole::Label { .. })
	}

	pub fn is_nav(&self) -> bool {
		matches!(self.role, NodeRole::Nav { .. })
	}

	pub fn is_background(&self) -> bool {
		matches!(self.role, NodeRole::Background)
	}

	pub fn section(&self) -> Option<Section> {
		match self.role {
			NodeRole::Nav { section } | NodeRole::Label { section, .. } => Some(section),
			NodeRole::Background => None,
		}
	}
}

/// Why an edge exists this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
	Proximity,
	/// Tether between a nav node and its label.
	Label,
	/// Short-lived edge that flickers in and out over time.
	Dynamic,
}

/// A derived edge. Always stored with `from < to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: NodeIdx,
	pub to: NodeIdx,
	pub distance: f64,
	pub kind: EdgeKind,
}

/// Detail card contents for a background node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetails {
	pub id: String,
	pub label: String,
	pub category: String,
	pub description: String,
	pub bullet_points: Vec<String>,
	pub tags: Vec<String>,
}

impl NodeDetails {
	/// Build the templated card for a skill node.
	pub fn for_skill(node: &Node, tags: &[String]) -> Self {
		Self {
			id: node.id.clone(),
			label: node.label.clone(),
			category: "skill".to_string(),
			description: format!("Explore {}", node.label),
			bullet_points: vec![
				format!("{} is a key skill", node.label),
				"Essential for data science work".to_string(),
				"Used in various applications".to_string(),
			],
			tags: tags.to_vec(),
		}
	}
}

/// Outcome of a pointer event that the host must act on.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
	None,
	Navigate(Section),
	ShowDetails(NodeDetails),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn section_ids_round_trip() {
		for section in Section::ALL {
			assert_eq!(Section::from_id(section.id()), Some(section));
		}
		assert_eq!(Section::from_id("blog"), None);
	}

	#[test]
	fn mode_switches_at_breakpoint() {
		assert_eq!(Mode::from_width(375.0), Mode::Mobile);
		assert_eq!(Mode::from_width(767.9), Mode::Mobile);
		assert_eq!(Mode::from_width(768.0), Mode::Desktop);
	}

	#[test]
	fn clamp_keeps_margin() {
		let vp = Viewport::new(375.0, 667.0);
		let p = vp.clamp(Point::new(-40.0, 900.0), 30.0);
		assert_eq!(p, Point::new(30.0, 637.0));

		let tiny = Viewport::new(40.0, 40.0);
		assert_eq!(tiny.clamp(Point::new(0.0, 100.0), 30.0), Point::new(20.0, 20.0));
	}
}
