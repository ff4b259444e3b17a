//! Simulation context: viewport, pointer, and the live star and logo sets.
//!
//! A single `StarfieldState` is owned by the animation loop. Input handlers
//! overwrite the pointer, the resize handler calls [`StarfieldState::reset`],
//! and each frame calls [`StarfieldState::step`] followed by the renderer.
//! Nothing here touches the browser, so tests drive it frame by frame with a
//! seeded generator.

use log::debug;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::StarfieldConfig;
use super::logos::{LogoField, Placement};
use super::particles::StarField;
use super::viewport::Viewport;

/// Most recent pointer sample in logical coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	pub fn centered(viewport: &Viewport) -> Self {
		let (x, y) = viewport.center();
		Self { x, y }
	}
}

/// Owns everything the stepper and renderer share between frames.
pub struct StarfieldState {
	pub config: StarfieldConfig,
	pub viewport: Viewport,
	pub pointer: Pointer,
	pub stars: StarField,
	pub logos: LogoField,
	/// Result of the most recent logo placement.
	pub placement: Placement,
	rng: Pcg32,
}

impl StarfieldState {
	/// Build the initial populations for `viewport` with the pointer centered.
	///
	/// Invalid config sections are replaced by their defaults first.
	pub fn new(config: StarfieldConfig, viewport: Viewport, seed: u64) -> Self {
		let mut state = Self {
			config: config.sanitized(),
			viewport,
			pointer: Pointer::centered(&viewport),
			stars: StarField::default(),
			logos: LogoField::default(),
			placement: Placement::default(),
			rng: Pcg32::seed_from_u64(seed),
		};
		state.regenerate();
		state
	}

	/// Adopt a new viewport and replace both populations.
	///
	/// The pointer keeps its last position.
	pub fn reset(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.regenerate();
	}

	fn regenerate(&mut self) {
		self.create_stars(self.config.star_count);
		self.create_logos(self.config.logo_count);
		debug!(
			"starfield: {} stars, {} logos for {}x{} @{}",
			self.stars.len(),
			self.logos.len(),
			self.viewport.width,
			self.viewport.height,
			self.viewport.dpr
		);
	}

	/// Replace the star set with exactly `count` fresh stars.
	pub fn create_stars(&mut self, count: usize) {
		self.stars = StarField::generate(&self.config.stars, &self.viewport, count, &mut self.rng);
	}

	/// Replace the logo set with up to `count` non-overlapping logos.
	pub fn create_logos(&mut self, count: usize) -> &Placement {
		let (logos, placement) =
			LogoField::generate(&self.config.logos, &self.viewport, count, &mut self.rng);
		self.logos = logos;
		self.placement = placement;
		&self.placement
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Pointer { x, y };
	}

	/// Advance stars and logos by one frame.
	pub fn step(&mut self) {
		self.stars.update(&self.viewport);
		self.logos
			.update(&self.viewport, &self.pointer, &self.config.physics);
	}
}
