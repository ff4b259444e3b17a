//! Canvas rendering for the starfield.
//!
//! Draw order is fixed and matters for compositing:
//! 1. Clear the logical viewport
//! 2. Stars, as opaque-colored circles under per-star global alpha
//! 3. Logos, once the sprite image has loaded, each inside its own
//!    save/restore pair so filter, alpha and transform never leak

use super::state::StarfieldState;
use super::surface::{ImageResource, Surface};
use super::theme::Theme;

/// Renders one frame. `logo` is polled every call; until it reports ready the
/// logo pass is skipped.
pub fn render<S: Surface + ?Sized>(
	state: &StarfieldState,
	surface: &S,
	theme: &Theme,
	logo: Option<&S::Image>,
) {
	let vp = &state.viewport;
	surface.clear_rect(0.0, 0.0, vp.width, vp.height);

	draw_stars(state, surface, theme);

	if let Some(image) = logo.filter(|img| img.is_ready()) {
		draw_logos(state, surface, theme, image);
	}

	surface.set_global_alpha(1.0);
}

fn draw_stars<S: Surface + ?Sized>(state: &StarfieldState, surface: &S, theme: &Theme) {
	surface.set_fill_color(&theme.star_color.to_css());
	for s in &state.stars.stars {
		surface.set_global_alpha(s.alpha);
		surface.fill_circle(s.x, s.y, s.r);
	}
}

fn draw_logos<S: Surface + ?Sized>(
	state: &StarfieldState,
	surface: &S,
	theme: &Theme,
	image: &S::Image,
) {
	for l in &state.logos.logos {
		let half = l.size / 2.0;
		surface.save();
		surface.set_global_alpha(l.alpha);
		surface.set_filter(theme.logo_filter);
		surface.translate(l.x, l.y);
		surface.rotate(l.rot);
		surface.draw_image(image, -half, -half, l.size, l.size);
		surface.restore();
	}
}

#[cfg(test)]
mod tests {
	use super::super::config::StarfieldConfig;
	use super::super::surface::recording::{FakeImage, Op, Recorder};
	use super::super::viewport::Viewport;
	use super::*;

	fn state() -> StarfieldState {
		let config = StarfieldConfig {
			star_count: 3,
			logo_count: 2,
			..StarfieldConfig::default()
		};
		StarfieldState::new(config, Viewport::new(3000.0, 2000.0, 1.0), 11)
	}

	#[test]
	fn unloaded_image_skips_logo_pass() {
		let (s, surface) = (state(), Recorder::default());
		let image = FakeImage::default();
		render(&s, &surface, &Theme::default(), Some(&image));

		let ops = surface.take();
		assert_eq!(ops[0], Op::Clear(0.0, 0.0, 3000.0, 2000.0));
		assert_eq!(ops[1], Op::Fill("#ffffff".into()));
		assert_eq!(ops.iter().filter(|op| matches!(op, Op::Circle(..))).count(), 3);
		assert!(!ops.iter().any(|op| matches!(op, Op::Image(..) | Op::Save)));
		assert_eq!(ops.last(), Some(&Op::Alpha(1.0)));
	}

	#[test]
	fn missing_image_skips_logo_pass() {
		let (s, surface) = (state(), Recorder::default());
		render(&s, &surface, &Theme::default(), None);
		assert!(!surface.take().iter().any(|op| matches!(op, Op::Image(..))));
	}

	#[test]
	fn stars_use_their_own_alpha_and_radius() {
		let (s, surface) = (state(), Recorder::default());
		render(&s, &surface, &Theme::default(), None);
		let ops = surface.take();

		for (i, star) in s.stars.stars.iter().enumerate() {
			let at = 2 + i * 2;
			assert_eq!(ops[at], Op::Alpha(star.alpha));
			assert_eq!(ops[at + 1], Op::Circle(star.x, star.y, star.r));
		}
	}

	#[test]
	fn logos_draw_after_stars_with_balanced_transforms() {
		let (s, surface) = (state(), Recorder::default());
		assert_eq!(s.logos.len(), 2);
		let image = FakeImage::default();
		image.ready.set(true);
		render(&s, &surface, &Theme::default(), Some(&image));
		let ops = surface.take();

		let last_circle = ops.iter().rposition(|op| matches!(op, Op::Circle(..)));
		let first_save = ops.iter().position(|op| *op == Op::Save);
		assert!(last_circle < first_save);

		let logo_ops: Vec<&Op> = ops[first_save.unwrap()..ops.len() - 1].iter().collect();
		for (chunk, l) in logo_ops.chunks(7).zip(&s.logos.logos) {
			let half = l.size / 2.0;
			assert_eq!(
				chunk,
				[
					&Op::Save,
					&Op::Alpha(l.alpha),
					&Op::Filter("invert(1)".into()),
					&Op::Translate(l.x, l.y),
					&Op::Rotate(l.rot),
					&Op::Image(-half, -half, l.size, l.size),
					&Op::Restore,
				]
			);
		}
		assert_eq!(logo_ops.len(), 14);
		assert_eq!(ops.last(), Some(&Op::Alpha(1.0)));
	}
}
