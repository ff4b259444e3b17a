//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fixed, full-viewport canvas and wires the window's
//! `resize` and `mousemove` events into the shared simulation context. An
//! animation loop runs via `requestAnimationFrame`, stepping the simulation
//! and rendering once per display frame for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent, Window};

use super::config::StarfieldConfig;
use super::render;
use super::state::StarfieldState;
use super::theme::Theme;
use super::viewport::Viewport;

/// Simulation state plus the browser handles needed to draw it.
struct StarfieldContext {
	state: StarfieldState,
	theme: Theme,
	canvas: HtmlCanvasElement,
	surface: CanvasRenderingContext2d,
	/// Sprite for logos; `None` when no URL is configured.
	logo: Option<HtmlImageElement>,
}

type Callback<T> = Rc<RefCell<Option<Closure<T>>>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn load_logo(url: &str) -> Option<HtmlImageElement> {
	if url.is_empty() {
		return None;
	}
	let image = HtmlImageElement::new().ok()?;
	image.set_cross_origin(Some("anonymous"));
	image.set_src(url);
	Some(image)
}

/// Fresh seed from the host's random source (53 usable bits).
fn host_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) {
	let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
}

/// Renders the animated starfield behind the page content.
///
/// Pass configuration via the reactive `config` signal; a new value rebuilds
/// the simulation in place. Event listeners and the frame loop are installed
/// once and keep running until the page is torn down.
#[component]
pub fn StarfieldCanvas(#[prop(into)] config: Signal<StarfieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<StarfieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Callback<dyn FnMut()> = Rc::new(RefCell::new(None));
	let resize_cb: Callback<dyn FnMut()> = Rc::new(RefCell::new(None));
	let pointer_cb: Callback<dyn FnMut(MouseEvent)> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("starfield: no window, background disabled");
			return;
		};
		let Some(surface) = context_2d(&canvas) else {
			warn!("starfield: 2d context unavailable, background disabled");
			return;
		};
		let Some(viewport) = Viewport::from_window(&window) else {
			warn!("starfield: could not read window size");
			return;
		};
		viewport.apply(&canvas, &surface);

		let config = config.get();
		let seed = config.seed.unwrap_or_else(host_seed);
		let logo = load_logo(&config.logo_url);
		info!(
			"starfield: starting {}x{} @{} (seed {seed})",
			viewport.width, viewport.height, viewport.dpr
		);

		*context.borrow_mut() = Some(StarfieldContext {
			state: StarfieldState::new(config, viewport, seed),
			theme: Theme::default(),
			canvas,
			surface,
			logo,
		});

		if resize_cb.borrow().is_none() {
			let context_resize = context.clone();
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some(viewport) = web_sys::window().and_then(|w| Viewport::from_window(&w)) else {
					return;
				};
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					viewport.apply(&c.canvas, &c.surface);
					c.state.reset(viewport);
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		if pointer_cb.borrow().is_none() {
			let context_pointer = context.clone();
			*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
				if let Some(ref mut c) = *context_pointer.borrow_mut() {
					c.state.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
				}
			}));
			if let Some(ref cb) = *pointer_cb.borrow() {
				let _ = window
					.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}

		if animate.borrow().is_none() {
			let (context_anim, animate_inner) = (context.clone(), animate.clone());
			*animate.borrow_mut() = Some(Closure::new(move || {
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					c.state.step();
					render::render(&c.state, &c.surface, &c.theme, c.logo.as_ref());
				}
				if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
					request_frame(&win, cb);
				}
			}));
			if let Some(ref cb) = *animate.borrow() {
				request_frame(&window, cb);
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="starfield"
			class="starfield-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: -1;"
		/>
	}
}
