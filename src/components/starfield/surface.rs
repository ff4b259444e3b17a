//! Drawing surface abstraction.
//!
//! The renderer and viewport talk to these traits instead of `web_sys` types
//! directly, so frames can be recorded and inspected in native tests. The
//! browser implementations forward to the 2D canvas context, the canvas
//! element and the image element.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// An image whose loading state can be polled each frame.
pub trait ImageResource {
	/// True once the image has loaded and its natural dimensions are known.
	fn is_ready(&self) -> bool;
}

/// 2D drawing operations in logical units.
pub trait Surface {
	type Image: ImageResource;

	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
	/// Replace the current transform with the matrix `(a, b, c, d, e, f)`.
	fn set_transform(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
	fn save(&self);
	fn restore(&self);
	fn set_global_alpha(&self, alpha: f64);
	fn set_fill_color(&self, css: &str);
	/// Set the CSS filter applied to subsequent draws (e.g. `"invert(1)"`).
	fn set_filter(&self, filter: &str);
	fn fill_circle(&self, x: f64, y: f64, radius: f64);
	fn translate(&self, x: f64, y: f64);
	fn rotate(&self, angle: f64);
	fn draw_image(&self, image: &Self::Image, x: f64, y: f64, width: f64, height: f64);
}

/// Element that owns a surface's backing store.
pub trait SurfaceHost {
	/// Resolution of the backing store in device pixels.
	fn set_backing_size(&self, width: u32, height: u32);
	/// Displayed size in logical (CSS) pixels.
	fn set_display_size(&self, width: f64, height: f64);
}

impl ImageResource for HtmlImageElement {
	fn is_ready(&self) -> bool {
		self.complete() && self.natural_width() > 0
	}
}

impl Surface for CanvasRenderingContext2d {
	type Image = HtmlImageElement;

	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn set_transform(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
		let _ = CanvasRenderingContext2d::set_transform(self, a, b, c, d, e, f);
	}

	fn save(&self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn set_global_alpha(&self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn set_fill_color(&self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn set_filter(&self, filter: &str) {
		CanvasRenderingContext2d::set_filter(self, filter);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, std::f64::consts::TAU);
		self.fill();
	}

	fn translate(&self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn draw_image(&self, image: &HtmlImageElement, x: f64, y: f64, width: f64, height: f64) {
		let _ = self.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, width, height);
	}
}

impl SurfaceHost for HtmlCanvasElement {
	fn set_backing_size(&self, width: u32, height: u32) {
		self.set_width(width);
		self.set_height(height);
	}

	fn set_display_size(&self, width: f64, height: f64) {
		let style = self.style();
		let _ = style.set_property("width", &format!("{width}px"));
		let _ = style.set_property("height", &format!("{height}px"));
	}
}

/// Recording implementations used by tests across the module.
#[cfg(test)]
pub(crate) mod recording {
	use std::cell::{Cell, RefCell};

	use super::*;

	/// One recorded drawing call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear(f64, f64, f64, f64),
		Transform([f64; 6]),
		Save,
		Restore,
		Alpha(f64),
		Fill(String),
		Filter(String),
		Circle(f64, f64, f64),
		Translate(f64, f64),
		Rotate(f64),
		Image(f64, f64, f64, f64),
	}

	/// Image stand-in with a switchable load state.
	#[derive(Default)]
	pub struct FakeImage {
		pub ready: Cell<bool>,
	}

	impl ImageResource for FakeImage {
		fn is_ready(&self) -> bool {
			self.ready.get()
		}
	}

	#[derive(Default)]
	pub struct Recorder {
		pub ops: RefCell<Vec<Op>>,
	}

	impl Recorder {
		pub fn take(&self) -> Vec<Op> {
			self.ops.take()
		}

		fn push(&self, op: Op) {
			self.ops.borrow_mut().push(op);
		}
	}

	impl Surface for Recorder {
		type Image = FakeImage;

		fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
			self.push(Op::Clear(x, y, width, height));
		}
		fn set_transform(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
			self.push(Op::Transform([a, b, c, d, e, f]));
		}
		fn save(&self) {
			self.push(Op::Save);
		}
		fn restore(&self) {
			self.push(Op::Restore);
		}
		fn set_global_alpha(&self, alpha: f64) {
			self.push(Op::Alpha(alpha));
		}
		fn set_fill_color(&self, css: &str) {
			self.push(Op::Fill(css.to_string()));
		}
		fn set_filter(&self, filter: &str) {
			self.push(Op::Filter(filter.to_string()));
		}
		fn fill_circle(&self, x: f64, y: f64, radius: f64) {
			self.push(Op::Circle(x, y, radius));
		}
		fn translate(&self, x: f64, y: f64) {
			self.push(Op::Translate(x, y));
		}
		fn rotate(&self, angle: f64) {
			self.push(Op::Rotate(angle));
		}
		fn draw_image(&self, _image: &FakeImage, x: f64, y: f64, width: f64, height: f64) {
			self.push(Op::Image(x, y, width, height));
		}
	}

	/// Host stand-in recording the last sizes it was given.
	#[derive(Default)]
	pub struct FakeHost {
		pub backing: Cell<(u32, u32)>,
		pub display: Cell<(f64, f64)>,
	}

	impl SurfaceHost for FakeHost {
		fn set_backing_size(&self, width: u32, height: u32) {
			self.backing.set((width, height));
		}
		fn set_display_size(&self, width: f64, height: f64) {
			self.display.set((width, height));
		}
	}
}
