//! Feedback palette shared with the rendering layer. Components are sRGB
//! bytes stored as `f32` so segment colors can be interpolated directly.

use glam::Vec3;

pub const GREEN: Vec3 = Vec3::new(66.0, 237.0, 1.0);
pub const ORANGE: Vec3 = Vec3::new(249.0, 166.0, 28.0);
pub const RED: Vec3 = Vec3::new(214.0, 30.0, 38.0);
pub const GREY: Vec3 = Vec3::new(51.0, 56.0, 56.0);
pub const BLACK: Vec3 = Vec3::new(5.0, 5.0, 5.0);

/// Interpolates between two palette colors with `t` clamped to [0, 1].
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
	a.lerp(b, t.clamp(0.0, 1.0))
}

/// CSS hex string (`#rrggbb`) for hosts that paint with string colors.
pub fn hex(color: Vec3) -> String {
	let [r, g, b] = color.to_array().map(|c| c.round().clamp(0.0, 255.0) as u8);
	format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_formatting() {
		assert_eq!(hex(GREEN), "#42ed01");
		assert_eq!(hex(RED), "#d61e26");
		assert_eq!(hex(Vec3::ZERO), "#000000");
		assert_eq!(hex(Vec3::splat(255.0)), "#ffffff");
	}

	#[test]
	fn lerp_clamps() {
		assert_eq!(lerp(GREEN, ORANGE, 0.0), GREEN);
		assert_eq!(lerp(GREEN, ORANGE, 1.0), ORANGE);
		assert_eq!(lerp(GREEN, ORANGE, -2.0), GREEN);
		assert_eq!(lerp(GREEN, ORANGE, 5.0), ORANGE);
	}

	#[test]
	fn lerp_midpoint() {
		let mid = lerp(Vec3::ZERO, Vec3::splat(255.0), 0.5);
		assert_eq!(hex(mid), "#808080");
	}
}
