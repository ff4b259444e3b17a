//! Large rotating logo sprites with pointer attraction.
//!
//! Logos are scattered with rejection sampling so that no two start out
//! overlapping, then drift under three per-frame influences: a pull toward the
//! pointer when it is close, a slow sinusoidal flow field, and damping. Once
//! moving they may overlap freely.

use std::f64::consts::TAU;

use log::warn;
use rand::Rng;

use super::config::{LogoConfig, LogoPhysics, sample_between};
use super::state::Pointer;
use super::viewport::Viewport;

/// A single logo sprite.
#[derive(Clone, Debug)]
pub struct Logo {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Rendered edge length, `nominal_size * depth`.
	pub size: f64,
	/// Rotation in radians.
	pub rot: f64,
	/// Angular velocity in radians per frame.
	pub vr: f64,
	pub alpha: f64,
	/// Parallax factor fixed at creation; scales size, speed and spin.
	pub depth: f64,
}

impl Logo {
	/// Magnitude of the velocity vector.
	pub fn speed(&self) -> f64 {
		self.vx.hypot(self.vy)
	}

	/// Steer toward the pointer when it is within the attraction radius.
	///
	/// A pointer exactly on the center has no direction and applies no force.
	pub fn attract(&mut self, pointer: &Pointer, physics: &LogoPhysics) {
		let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
		let dist = dx.hypot(dy);
		if dist <= 0.0 || dist >= physics.attraction_radius {
			return;
		}

		let force = (1.0 - dist / physics.attraction_radius) * physics.attraction_strength;
		self.vx += dx / dist * force;
		self.vy += dy / dist * force;
	}

	/// Perturb velocity with the position-dependent flow field.
	pub fn drift(&mut self, physics: &LogoPhysics) {
		self.vx += (self.y * physics.drift_frequency).sin() * physics.drift_strength;
		self.vy += (self.x * physics.drift_frequency).cos() * physics.drift_strength;
	}

	/// Wrap across the viewport using the logo's size as margin, so it leaves
	/// the screen completely before reappearing on the other side.
	pub fn wrap(&mut self, viewport: &Viewport) {
		let m = self.size;
		if self.x < -m {
			self.x = viewport.width + m;
		} else if self.x > viewport.width + m {
			self.x = -m;
		}
		if self.y < -m {
			self.y = viewport.height + m;
		} else if self.y > viewport.height + m {
			self.y = -m;
		}
	}

	/// Advance one frame: integrate, attract, drift, damp, wrap.
	pub fn step(&mut self, viewport: &Viewport, pointer: &Pointer, physics: &LogoPhysics) {
		self.x += self.vx;
		self.y += self.vy;
		self.rot += self.vr;

		self.attract(pointer, physics);
		self.drift(physics);

		self.vx *= physics.damping;
		self.vy *= physics.damping;

		self.wrap(viewport);
	}
}

/// Outcome of a logo placement pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
	/// Number of logos actually created.
	pub placed: usize,
	/// Slot indices for which no free position was found.
	pub skipped: Vec<usize>,
}

/// The live logo population.
#[derive(Clone, Debug, Default)]
pub struct LogoField {
	pub logos: Vec<Logo>,
}

impl LogoField {
	/// Place up to `count` logos whose centers are at least
	/// `config.min_distance()` apart.
	///
	/// Each slot draws up to `config.max_attempts` candidates; a slot with no
	/// acceptable candidate is skipped and reported rather than retried.
	pub fn generate<R: Rng + ?Sized>(
		config: &LogoConfig,
		viewport: &Viewport,
		count: usize,
		rng: &mut R,
	) -> (Self, Placement) {
		let min_distance = config.min_distance();
		let mut logos: Vec<Logo> = Vec::with_capacity(count);
		let mut skipped = Vec::new();

		for slot in 0..count {
			let candidate = (0..config.max_attempts).find_map(|_| {
				let (x, y) = (
					rng.random::<f64>() * viewport.width,
					rng.random::<f64>() * viewport.height,
				);
				let clear = logos
					.iter()
					.all(|l| (l.x - x).hypot(l.y - y) >= min_distance);
				clear.then_some((x, y))
			});

			match candidate {
				Some((x, y)) => logos.push(Self::spawn(config, x, y, rng)),
				None => {
					warn!("starfield: could not place logo {slot}");
					skipped.push(slot);
				}
			}
		}

		let placement = Placement {
			placed: logos.len(),
			skipped,
		};
		(Self { logos }, placement)
	}

	fn spawn<R: Rng + ?Sized>(config: &LogoConfig, x: f64, y: f64, rng: &mut R) -> Logo {
		let depth = sample_between(rng, config.depth_min, config.depth_max);
		let heading = rng.random::<f64>() * TAU;
		let speed = config.base_speed * depth;

		Logo {
			x,
			y,
			vx: heading.cos() * speed,
			vy: heading.sin() * speed,
			size: config.nominal_size * depth,
			rot: rng.random::<f64>() * TAU,
			vr: sample_between(rng, -config.spin, config.spin) * depth,
			alpha: sample_between(rng, config.alpha_min, config.alpha_max),
			depth,
		}
	}

	pub fn update(&mut self, viewport: &Viewport, pointer: &Pointer, physics: &LogoPhysics) {
		for logo in &mut self.logos {
			logo.step(viewport, pointer, physics);
		}
	}

	pub fn len(&self) -> usize {
		self.logos.len()
	}

	pub fn is_empty(&self) -> bool {
		self.logos.is_empty()
	}
}
