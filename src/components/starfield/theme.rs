//! Visual styling for the starfield.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Fill for every star. Per-star opacity comes from global alpha.
	pub star_color: Color,
	/// CSS filter applied while drawing logos.
	pub logo_filter: &'static str,
}

impl Theme {
	/// White stars with inverted logos, for dark page backgrounds.
	pub fn night() -> Self {
		Self {
			star_color: Color::WHITE,
			logo_filter: "invert(1)",
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::night()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::WHITE.to_css(), "#ffffff");
		assert_eq!(Color::rgb(22, 27, 34).to_css(), "#161b22");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(Color { a: 0.5, ..Color::rgb(10, 20, 30) }.to_css(), "rgba(10, 20, 30, 0.5)");
	}
}
