//! Canvas rendering for the network views.
//!
//! Renderers only read state. The hero draws in passes so later layers sit
//! on top:
//! 1. Background, edges and the pointer disk
//! 2. Glow rings, background dots, nav nodes
//! 3. Particles, then labels

use std::f64::consts::{PI, TAU};

use web_sys::CanvasRenderingContext2d;

use super::drift::DriftNetwork;
use super::state::NetworkState;
use super::theme::Theme;
use super::types::{NodeIdx, Section, Viewport};

/// Reset the transform to device pixels and clear the frame.
fn begin_frame(ctx: &CanvasRenderingContext2d, viewport: Viewport, pixel_ratio: f64, fill: &str) {
	let _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
	ctx.set_fill_style_str(fill);
	ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

fn circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, r.max(0.0), 0.0, 2.0 * PI);
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();
}

/// Draws one hero frame.
pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	begin_frame(
		ctx,
		state.viewport,
		state.pixel_ratio,
		&theme.background.to_css(),
	);

	draw_edges(state, ctx, theme);
	if state.scale.hit.pointer_indicator {
		draw_pointer(state, ctx, theme);
	}
	draw_glows(state, ctx, theme);
	draw_nodes(state, ctx, theme);
	draw_particles(state, ctx, theme);
	draw_labels(state, ctx, theme);
}

fn draw_edges(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_line_width(state.scale.edge.line_width);
	for edge in &state.connections {
		let (Some(a), Some(b)) = (state.node(edge.from), state.node(edge.to)) else {
			continue;
		};
		ctx.set_stroke_style_str(&theme.accent_css(state.scale.edge_alpha(edge.distance)));
		line(ctx, a.pos.x, a.pos.y, b.pos.x, b.pos.y);
	}
}

fn draw_pointer(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let Some(p) = state.pointer else {
		return;
	};
	circle(ctx, p.x, p.y, state.scale.hit.pointer_radius);
	ctx.set_fill_style_str(&theme.accent_css(0.1));
	ctx.fill();
	ctx.set_stroke_style_str(&theme.accent_css(0.25));
	ctx.set_line_width(1.5);
	ctx.stroke();
}

fn draw_glows(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let pulse = (state.clock * 2.0) % TAU;
	ctx.set_line_width(2.0);
	for &idx in &state.glowing {
		let Some(node) = state.node(idx) else {
			continue;
		};
		let wave = (pulse + idx.index() as f64).sin();
		let alpha = (wave * 0.2).max(0.0);
		if alpha == 0.0 {
			continue;
		}
		circle(ctx, node.pos.x, node.pos.y, node.radius + 8.0 + wave * 4.0);
		ctx.set_stroke_style_str(&theme.accent_css(alpha));
		ctx.stroke();
	}
}

fn draw_nodes(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let background = theme.accent_css(theme.background_node_alpha);
	for node in state.nodes.iter().filter(|n| n.is_background()) {
		circle(ctx, node.pos.x, node.pos.y, node.radius);
		ctx.set_fill_style_str(&background);
		ctx.fill();
	}

	ctx.set_line_width(2.0);
	for (i, node) in state.nodes.iter().enumerate() {
		if !node.is_nav() {
			continue;
		}
		let style = nav_style(node.radius, state.hovered == Some(NodeIdx::new(i)), theme);

		circle(ctx, node.pos.x, node.pos.y, style.radius);
		ctx.set_fill_style_str(&theme.accent_css(style.alpha));
		ctx.fill();

		if let Some(ring) = style.ring {
			circle(ctx, node.pos.x, node.pos.y, ring);
			ctx.set_stroke_style_str(&theme.accent_css(0.9));
			ctx.stroke();
		}
	}
}

/// How one dot is filled and whether it gets an outline ring.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DotStyle {
	radius: f64,
	alpha: f64,
	/// Outline ring radius, only for highlighted dots.
	ring: Option<f64>,
}

/// Nav nodes grow, brighten and gain an outline ring while hovered.
fn nav_style(radius: f64, hovered: bool, theme: &Theme) -> DotStyle {
	let (rest, hot) = theme.nav_alpha;
	if hovered {
		DotStyle {
			radius: radius + 2.0,
			alpha: hot,
			ring: Some(radius + 4.0),
		}
	} else {
		DotStyle {
			radius,
			alpha: rest,
			ring: None,
		}
	}
}

/// Backdrop dots brighten and gain a ring while held by the pointer.
fn backdrop_style(radius: f64, dragged: bool, theme: &Theme) -> DotStyle {
	if dragged {
		DotStyle {
			radius,
			alpha: 0.8,
			ring: Some(radius + 2.0),
		}
	} else {
		DotStyle {
			radius,
			alpha: theme.background_node_alpha,
			ring: None,
		}
	}
}

fn draw_particles(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_line_width(1.0);
	for p in &state.particles.particles {
		circle(ctx, p.pos.x, p.pos.y, p.size);
		ctx.set_fill_style_str(&theme.accent_css(p.opacity));
		ctx.fill();

		circle(ctx, p.pos.x, p.pos.y, p.size + 1.0);
		ctx.set_stroke_style_str(&theme.accent_css(p.opacity * 0.5));
		ctx.stroke();
	}
}

fn draw_labels(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_font(&state.scale.label_font());
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(&theme.label.to_css());
	for node in state.nodes.iter().filter(|n| n.is_label()) {
		let _ = ctx.fill_text(&node.label, node.pos.x, node.pos.y);
	}
}

/// Draws one frame of the navigation overlay. `current` is the section the
/// page is showing.
pub fn render_overlay(
	net: &DriftNetwork,
	ctx: &CanvasRenderingContext2d,
	pixel_ratio: f64,
	theme: &Theme,
	current: Section,
) {
	begin_frame(
		ctx,
		net.viewport,
		pixel_ratio,
		&theme.background.with_alpha(0.95).to_css(),
	);
	ctx.set_fill_style_str("rgba(0, 0, 0, 0.02)");
	ctx.fill_rect(0.0, 0.0, net.viewport.width, net.viewport.height);

	draw_drift_edges(net, ctx, theme);

	ctx.set_font("600 14px Inter, sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for (i, node) in net.nodes.iter().enumerate() {
		let idx = NodeIdx::new(i);
		let active = node.section == Some(current);
		let hovered = net.hovered == Some(idx);

		if active || hovered {
			let glow = if hovered { 0.25 } else { 0.15 };
			circle(ctx, node.pos.x, node.pos.y, node.radius + 12.0);
			ctx.set_fill_style_str(&theme.accent_css(glow));
			ctx.fill();
		}
		let radius = if hovered { node.radius + 1.5 } else { node.radius };
		circle(ctx, node.pos.x, node.pos.y, radius);
		ctx.set_fill_style_str(&theme.accent_css(if active { 0.9 } else { 0.6 }));
		ctx.fill();

		if let Some(section) = node.section {
			draw_pill(ctx, theme, section.label(), node.pos.x, node.pos.y - 28.0, hovered);
		}
	}
}

/// Rounded label plate with centred text.
fn draw_pill(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	text: &str,
	x: f64,
	y: f64,
	highlighted: bool,
) {
	let width = ctx
		.measure_text(text)
		.map(|m| m.width())
		.unwrap_or(text.len() as f64 * 8.0)
		+ 24.0;
	let (h, r) = (28.0, 14.0);
	let (left, right) = (x - width / 2.0 + r, x + width / 2.0 - r);

	ctx.begin_path();
	let _ = ctx.arc(left, y, r, PI / 2.0, PI * 1.5);
	ctx.line_to(right, y - h / 2.0);
	let _ = ctx.arc(right, y, r, PI * 1.5, PI / 2.0);
	ctx.close_path();
	ctx.set_fill_style_str(&theme.background.with_alpha(0.9).to_css());
	ctx.fill();
	ctx.set_line_width(1.0);
	ctx.set_stroke_style_str(&theme.accent_css(if highlighted { 0.6 } else { 0.25 }));
	ctx.stroke();

	ctx.set_fill_style_str(&theme.label.to_css());
	let _ = ctx.fill_text(text, x, y);
}

/// Draws one frame of the page backdrop.
pub fn render_backdrop(
	net: &DriftNetwork,
	ctx: &CanvasRenderingContext2d,
	pixel_ratio: f64,
	theme: &Theme,
) {
	let _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
	ctx.clear_rect(0.0, 0.0, net.viewport.width, net.viewport.height);

	draw_drift_edges(net, ctx, theme);

	ctx.set_line_width(1.0);
	for (i, node) in net.nodes.iter().enumerate() {
		let idx = NodeIdx::new(i);
		let near = net.pointer_proximity(idx);
		if near > 0.0 {
			circle(ctx, node.pos.x, node.pos.y, node.radius + 6.0 * near);
			ctx.set_fill_style_str(&theme.accent_css(0.15 * near));
			ctx.fill();
		}
		let style = backdrop_style(node.radius, net.dragged == Some(idx), theme);
		circle(ctx, node.pos.x, node.pos.y, style.radius);
		ctx.set_fill_style_str(&theme.accent_css(style.alpha));
		ctx.fill();
		if let Some(ring) = style.ring {
			circle(ctx, node.pos.x, node.pos.y, ring);
			ctx.set_stroke_style_str(&theme.accent_css(1.0));
			ctx.stroke();
		}
	}
}

fn draw_drift_edges(net: &DriftNetwork, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_line_width(1.0);
	for edge in &net.connections {
		let (Some(a), Some(b)) = (net.node(edge.from), net.node(edge.to)) else {
			continue;
		};
		ctx.set_stroke_style_str(&theme.accent_css(net.params.edge_alpha(edge.distance)));
		line(ctx, a.pos.x, a.pos.y, b.pos.x, b.pos.y);
	}
}
