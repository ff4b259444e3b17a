//! Logical viewport size and device pixel ratio.

use web_sys::Window;

use super::surface::{Surface, SurfaceHost};

/// Logical window dimensions plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	/// Physical pixels per logical pixel. Always finite and positive.
	pub dpr: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64, dpr: f64) -> Self {
		let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			dpr,
		}
	}

	/// Read the current inner size and pixel ratio from the browser window.
	pub fn from_window(window: &Window) -> Option<Self> {
		let width = window.inner_width().ok()?.as_f64()?;
		let height = window.inner_height().ok()?.as_f64()?;
		Some(Self::new(width, height, window.device_pixel_ratio()))
	}

	/// Backing-store resolution in device pixels, rounded down.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.dpr).floor() as u32,
			(self.height * self.dpr).floor() as u32,
		)
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// Size the host's backing store and display box, then scale the surface
	/// so drawing commands are issued in logical units.
	pub fn apply<H, S>(&self, host: &H, surface: &S)
	where
		H: SurfaceHost + ?Sized,
		S: Surface + ?Sized,
	{
		let (bw, bh) = self.backing_size();
		host.set_backing_size(bw, bh);
		host.set_display_size(self.width, self.height);
		surface.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::recording::{FakeHost, Op, Recorder};
	use super::*;

	#[test]
	fn backing_size_scales_by_pixel_ratio() {
		let vp = Viewport::new(1000.0, 800.0, 2.0);
		assert_eq!(vp.backing_size(), (2000, 1600));
	}

	#[test]
	fn backing_size_rounds_down() {
		let vp = Viewport::new(333.0, 101.0, 1.5);
		assert_eq!(vp.backing_size(), (499, 151));
	}

	#[test]
	fn invalid_pixel_ratio_falls_back_to_one() {
		assert_eq!(Viewport::new(10.0, 10.0, 0.0).dpr, 1.0);
		assert_eq!(Viewport::new(10.0, 10.0, -2.0).dpr, 1.0);
		assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).dpr, 1.0);
	}

	#[test]
	fn apply_sizes_host_and_installs_transform() {
		let vp = Viewport::new(1000.0, 800.0, 2.0);
		let (host, surface) = (FakeHost::default(), Recorder::default());
		vp.apply(&host, &surface);

		assert_eq!(host.backing.get(), (2000, 1600));
		assert_eq!(host.display.get(), (1000.0, 800.0));
		assert_eq!(
			surface.take(),
			vec![Op::Transform([2.0, 0.0, 0.0, 2.0, 0.0, 0.0])]
		);
	}
}
