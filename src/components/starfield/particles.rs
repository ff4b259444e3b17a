//! Drifting background stars.

use rand::Rng;

use super::config::{StarConfig, sample_between};
use super::viewport::Viewport;

/// A single star point.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	/// Radius in logical pixels.
	pub r: f64,
	/// Per-frame velocity.
	pub vx: f64,
	pub vy: f64,
	/// Opacity used as global alpha when drawn.
	pub alpha: f64,
}

/// The live star population.
#[derive(Clone, Debug, Default)]
pub struct StarField {
	pub stars: Vec<Star>,
}

impl StarField {
	/// Sample exactly `count` independent stars over the viewport.
	pub fn generate<R: Rng + ?Sized>(
		config: &StarConfig,
		viewport: &Viewport,
		count: usize,
		rng: &mut R,
	) -> Self {
		let stars = (0..count)
			.map(|_| Star {
				x: rng.random::<f64>() * viewport.width,
				y: rng.random::<f64>() * viewport.height,
				r: sample_between(rng, config.radius_min, config.radius_max),
				vx: sample_between(rng, -config.max_speed, config.max_speed),
				vy: sample_between(rng, -config.max_speed, config.max_speed),
				alpha: sample_between(rng, config.alpha_min, config.alpha_max),
			})
			.collect();

		Self { stars }
	}

	/// Advance every star by one frame, wrapping exactly at the viewport edges.
	pub fn update(&mut self, viewport: &Viewport) {
		let (w, h) = (viewport.width, viewport.height);

		for s in &mut self.stars {
			s.x += s.vx;
			s.y += s.vy;

			if s.x < 0.0 {
				s.x = w;
			} else if s.x > w {
				s.x = 0.0;
			}
			if s.y < 0.0 {
				s.y = h;
			} else if s.y > h {
				s.y = 0.0;
			}
		}
	}

	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}
}
