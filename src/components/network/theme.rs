//! Visual theming for the network canvases.
//!
//! Provides the colour type and the palette shared by the hero, overlay and
//! background animators.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colours for one network canvas.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Frame clear colour.
	pub background: Color,
	/// Edges, nodes, particles and glows; alpha is set per draw call.
	pub accent: Color,
	/// Label text.
	pub label: Color,
	/// Node opacity at rest and when hovered.
	pub nav_alpha: (f64, f64),
	pub background_node_alpha: f64,
}

impl Theme {
	/// Light portfolio theme (default).
	pub fn portfolio() -> Self {
		Self {
			background: Color::rgb(255, 255, 255),
			accent: Color::rgb(53, 89, 200),
			label: Color::rgb(30, 58, 138),
			nav_alpha: (0.5, 0.7),
			background_node_alpha: 0.35,
		}
	}

	/// Shorthand for the accent colour at a given opacity.
	pub fn accent_css(&self, alpha: f64) -> String {
		self.accent.with_alpha(alpha).to_css()
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::portfolio()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formats() {
		assert_eq!(Color::rgb(30, 58, 138).to_css(), "#1e3a8a");
		assert_eq!(
			Theme::portfolio().accent_css(0.25),
			"rgba(53, 89, 200, 0.25)"
		);
	}
}
