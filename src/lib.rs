//! starfield-bg: Ambient starfield and drifting logo background.
//!
//! This crate provides a WASM canvas component that animates a field of small
//! stars and a few large, pointer-attracted logo sprites behind page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::starfield::{StarfieldCanvas, StarfieldConfig, StarfieldState, Viewport};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield-bg: logging initialized");
}

/// Load configuration from a script element with id="starfield-config".
/// Expected format: JSON matching [`StarfieldConfig`]; absent fields keep defaults.
fn load_config() -> Option<StarfieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("starfield-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match StarfieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"starfield-bg: loaded config ({} stars, {} logos)",
				config.star_count, config.logo_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("starfield-bg: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and mounts the background canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<StarfieldCanvas config=config_signal />
	}
}
