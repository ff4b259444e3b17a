//! Ambient starfield background component.
//!
//! Renders a full-viewport canvas behind page content with:
//! - Small drifting stars that wrap exactly at the viewport edges
//! - A handful of large, faint, rotating logo sprites placed without overlap
//! - Logo steering toward the pointer, a slow flow field, and damping
//! - Device-pixel-ratio aware sizing, rebuilt on every window resize
//!
//! The simulation (`StarfieldState`) and renderer are independent of the
//! browser: rendering goes through the [`Surface`] trait, so frames can be
//! stepped and inspected in native tests.
//!
//! # Example
//!
//! ```ignore
//! use starfield_bg::{StarfieldCanvas, StarfieldConfig};
//!
//! let config = StarfieldConfig { logo_count: 4, ..Default::default() };
//! view! { <StarfieldCanvas config=config /> }
//! ```

mod component;
pub mod config;
mod logos;
mod particles;
mod render;
mod state;
mod surface;
pub mod theme;
mod viewport;

pub use component::StarfieldCanvas;
pub use config::StarfieldConfig;
pub use logos::{Logo, LogoField, Placement};
pub use particles::{Star, StarField};
pub use render::render;
pub use state::{Pointer, StarfieldState};
pub use surface::{ImageResource, Surface, SurfaceHost};
pub use theme::Theme;
pub use viewport::Viewport;
