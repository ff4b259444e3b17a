//! Population and physics configuration for the starfield.
//!
//! Every tunable constant lives here so that generation and stepping read from
//! one place. All values are in logical (CSS) pixels and per-frame units; the
//! simulation advances once per display frame with no time scaling.
//!
//! # Loading
//!
//! The page may embed a JSON object in `<script id="starfield-config">`. Any
//! field left out keeps its default, so `{}` and `{"logo_count": 4}` are both
//! valid documents.

use log::warn;
use rand::Rng;
use serde::Deserialize;

/// Default source for the logo sprite.
pub const DEFAULT_LOGO_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/8/8d/42_Logo.svg";

/// Sampling ranges for stars.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StarConfig {
	/// Minimum star radius.
	pub radius_min: f64,
	/// Maximum star radius.
	pub radius_max: f64,
	/// Each velocity component is drawn from `[-max_speed, max_speed]`.
	pub max_speed: f64,
	/// Minimum star opacity.
	pub alpha_min: f64,
	/// Maximum star opacity.
	pub alpha_max: f64,
}

/// A sampling range of strictly positive, finite values.
fn positive_range(min: f64, max: f64) -> bool {
	min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0
}

/// An opacity range inside `(0, 1]`.
fn alpha_range(min: f64, max: f64) -> bool {
	positive_range(min, max) && min <= 1.0 && max <= 1.0
}

impl StarConfig {
	/// Radius and opacity stay strictly positive and every span is finite.
	pub fn is_valid(&self) -> bool {
		positive_range(self.radius_min, self.radius_max)
			&& alpha_range(self.alpha_min, self.alpha_max)
			&& self.max_speed.is_finite()
			&& self.max_speed >= 0.0
			&& (2.0 * self.max_speed).is_finite()
			&& (self.radius_max - self.radius_min).is_finite()
	}
}

impl Default for StarConfig {
	fn default() -> Self {
		Self {
			radius_min: 0.2,
			radius_max: 1.6,
			max_speed: 0.125,
			alpha_min: 0.3,
			alpha_max: 0.9,
		}
	}
}

/// Sampling ranges and placement bounds for logos.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
	/// Logo edge length at depth 1.0. Placement spacing uses this regardless of depth.
	pub nominal_size: f64,
	/// Extra clearance added to `nominal_size` between placed centers.
	pub margin: f64,
	/// Candidate positions tried per slot before the slot is skipped.
	pub max_attempts: usize,
	/// Smallest parallax depth; logos this deep are the smallest and slowest.
	pub depth_min: f64,
	/// Largest parallax depth.
	pub depth_max: f64,
	/// Initial speed at depth 1.0.
	pub base_speed: f64,
	/// Angular velocity is drawn from `[-spin, spin] * depth`.
	pub spin: f64,
	/// Minimum logo opacity.
	pub alpha_min: f64,
	/// Maximum logo opacity.
	pub alpha_max: f64,
}

impl LogoConfig {
	/// Minimum distance between any two logo centers at placement time.
	pub fn min_distance(&self) -> f64 {
		self.nominal_size + self.margin
	}

	/// Size, depth and opacity stay strictly positive and every span is finite.
	pub fn is_valid(&self) -> bool {
		self.nominal_size.is_finite()
			&& self.nominal_size > 0.0
			&& self.margin.is_finite()
			&& self.min_distance().is_finite()
			&& positive_range(self.depth_min, self.depth_max)
			&& (self.depth_max - self.depth_min).is_finite()
			&& (self.nominal_size * self.depth_min.max(self.depth_max)).is_finite()
			&& alpha_range(self.alpha_min, self.alpha_max)
			&& self.base_speed.is_finite()
			&& self.spin.is_finite()
			&& (2.0 * self.spin).is_finite()
	}
}

impl Default for LogoConfig {
	fn default() -> Self {
		Self {
			nominal_size: 480.0,
			margin: 60.0,
			max_attempts: 300,
			depth_min: 0.3,
			depth_max: 1.0,
			base_speed: 0.8,
			spin: 0.002,
			alpha_min: 0.02,
			alpha_max: 0.04,
		}
	}
}

/// Per-frame forces acting on logos.
///
/// Setting `attraction_strength` and `drift_strength` to zero leaves damping
/// as the only force, which is what the damping tests rely on.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LogoPhysics {
	/// Pointer distance below which logos are pulled toward it.
	pub attraction_radius: f64,
	/// Force magnitude when the pointer sits on the logo center.
	pub attraction_strength: f64,
	/// Spatial frequency of the sinusoidal flow field.
	pub drift_frequency: f64,
	/// Amplitude of the flow field.
	pub drift_strength: f64,
	/// Velocity multiplier applied every frame.
	pub damping: f64,
}

impl LogoPhysics {
	/// Only damping remains; pointer and flow field have no effect.
	pub fn damping_only(damping: f64) -> Self {
		Self {
			attraction_strength: 0.0,
			drift_strength: 0.0,
			damping,
			..Self::default()
		}
	}

	/// Every coefficient is finite.
	pub fn is_valid(&self) -> bool {
		[
			self.attraction_radius,
			self.attraction_strength,
			self.drift_frequency,
			self.drift_strength,
			self.damping,
		]
		.iter()
		.all(|v| v.is_finite())
	}
}

impl Default for LogoPhysics {
	fn default() -> Self {
		Self {
			attraction_radius: 300.0,
			attraction_strength: 0.02,
			drift_frequency: 0.002,
			drift_strength: 0.0005,
			damping: 0.995,
		}
	}
}

/// Complete starfield configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
	/// Stars generated on startup and on every resize.
	pub star_count: usize,
	/// Logo slots attempted on startup and on every resize.
	pub logo_count: usize,
	/// Image drawn for each logo.
	pub logo_url: String,
	/// Fixed RNG seed. When absent a fresh seed is taken from the host.
	pub seed: Option<u64>,
	/// Star sampling ranges.
	pub stars: StarConfig,
	/// Logo sampling ranges and placement bounds.
	pub logos: LogoConfig,
	/// Per-frame logo forces.
	pub physics: LogoPhysics,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			star_count: 120,
			logo_count: 8,
			logo_url: DEFAULT_LOGO_URL.to_string(),
			seed: None,
			stars: StarConfig::default(),
			logos: LogoConfig::default(),
			physics: LogoPhysics::default(),
		}
	}
}

impl StarfieldConfig {
	/// Parse a JSON document, filling absent fields with defaults.
	///
	/// Sections that parse but hold unusable values are replaced by their
	/// defaults; see [`StarfieldConfig::sanitized`].
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(json).map(Self::sanitized)
	}

	/// Replace each invalid section with its default, logging a warning.
	pub fn sanitized(mut self) -> Self {
		if !self.stars.is_valid() {
			warn!("starfield: invalid star config {:?}, using defaults", self.stars);
			self.stars = StarConfig::default();
		}
		if !self.logos.is_valid() {
			warn!("starfield: invalid logo config {:?}, using defaults", self.logos);
			self.logos = LogoConfig::default();
		}
		if !self.physics.is_valid() {
			warn!("starfield: invalid logo physics {:?}, using defaults", self.physics);
			self.physics = LogoPhysics::default();
		}
		self
	}
}

/// Draw uniformly from the closed range between `a` and `b`, in either order.
///
/// Inverted, empty and non-finite spans yield the lower bound instead of
/// panicking.
pub(crate) fn sample_between<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
	let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
	if lo < hi && (hi - lo).is_finite() {
		rng.random_range(lo..=hi)
	} else {
		lo
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_yields_defaults() {
		let config = StarfieldConfig::from_json("{}").unwrap();
		assert_eq!(config.star_count, 120);
		assert_eq!(config.logo_count, 8);
		assert_eq!(config.logos.max_attempts, 300);
		assert_eq!(config.logos.min_distance(), 540.0);
		assert_eq!(config.logo_url, DEFAULT_LOGO_URL);
		assert!(config.seed.is_none());
	}

	#[test]
	fn partial_document_overrides_only_named_fields() {
		let json = r#"{ "logo_count": 3, "seed": 7, "logos": { "margin": 10.0 } }"#;
		let config = StarfieldConfig::from_json(json).unwrap();
		assert_eq!(config.logo_count, 3);
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.logos.margin, 10.0);
		assert_eq!(config.logos.nominal_size, 480.0);
		assert_eq!(config.star_count, 120);
		assert_eq!(config.physics.damping, 0.995);
	}

	#[test]
	fn malformed_document_is_an_error() {
		assert!(StarfieldConfig::from_json("{ \"star_count\": \"many\" }").is_err());
		assert!(StarfieldConfig::from_json("not json").is_err());
	}

	#[test]
	fn sample_between_tolerates_inverted_and_empty_ranges() {
		use rand::SeedableRng;
		let mut rng = rand_pcg::Pcg32::seed_from_u64(5);
		for _ in 0..100 {
			let v = sample_between(&mut rng, 2.0, 1.0);
			assert!((1.0..=2.0).contains(&v));
		}
		assert_eq!(sample_between(&mut rng, 0.5, 0.5), 0.5);
		assert_eq!(sample_between(&mut rng, -1e308, 1e308), -1e308);
	}

	#[test]
	fn non_positive_ranges_fall_back_to_defaults() {
		let json = r#"{
			"stars": { "radius_min": -2.0, "radius_max": -1.0, "alpha_min": -0.5, "alpha_max": 0.0 },
			"logos": { "nominal_size": -480.0 }
		}"#;
		let config = StarfieldConfig::from_json(json).unwrap();
		assert_eq!(config.stars.radius_min, 0.2);
		assert_eq!(config.stars.alpha_max, 0.9);
		assert_eq!(config.logos.nominal_size, 480.0);
	}

	#[test]
	fn zero_depth_and_opacity_above_one_are_rejected() {
		let config = StarfieldConfig::from_json(r#"{ "logos": { "depth_min": 0.0 } }"#).unwrap();
		assert_eq!(config.logos.depth_min, 0.3);
		let config = StarfieldConfig::from_json(r#"{ "stars": { "alpha_max": 1.5 } }"#).unwrap();
		assert_eq!(config.stars.alpha_max, 0.9);
	}

	#[test]
	fn overflowing_spans_fall_back_to_defaults() {
		let config = StarfieldConfig::from_json(r#"{ "stars": { "max_speed": 1e308 } }"#).unwrap();
		assert_eq!(config.stars.max_speed, 0.125);
		let config = StarfieldConfig::from_json(r#"{ "logos": { "spin": 1e308 } }"#).unwrap();
		assert_eq!(config.logos.spin, 0.002);
	}

	#[test]
	fn valid_sections_survive_when_another_is_rejected() {
		let json = r#"{ "stars": { "radius_min": 0.5, "radius_max": 2.0 }, "logos": { "depth_max": -1.0 } }"#;
		let config = StarfieldConfig::from_json(json).unwrap();
		assert_eq!(config.stars.radius_min, 0.5);
		assert_eq!(config.stars.radius_max, 2.0);
		assert_eq!(config.logos.depth_max, 1.0);
	}

	#[test]
	fn damping_only_disables_other_forces() {
		let physics = LogoPhysics::damping_only(0.9);
		assert_eq!(physics.attraction_strength, 0.0);
		assert_eq!(physics.drift_strength, 0.0);
		assert_eq!(physics.damping, 0.9);
		assert_eq!(physics.attraction_radius, 300.0);
	}
}
