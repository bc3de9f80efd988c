//! `wasm-bindgen` exports for the galaxy explorer.
//!
//! wasm-bindgen cannot export a stateful struct to the UI shell as free
//! functions, so a single explorer lives in a `thread_local!` and every
//! export reaches it through `with_explorer`.

use std::cell::RefCell;

use galaxy_engine::{Explorer, ExplorerConfig, InputEvent, ObjectId};
use wasm_bindgen::prelude::*;

thread_local! {
    static EXPLORER: RefCell<Option<Explorer>> = const { RefCell::new(None) };
}

/// Run `f` against the explorer. Returns None (and logs) before `galaxy_init`.
fn with_explorer<R>(f: impl FnOnce(&mut Explorer) -> R) -> Option<R> {
    EXPLORER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(explorer) => Some(f(explorer)),
            None => {
                log::warn!("explorer not initialized; call galaxy_init() first");
                None
            }
        }
    })
}

/// `SystemTime` is unavailable on wasm32-unknown-unknown.
fn js_now() -> u64 {
    js_sys::Date::now() as u64
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn galaxy_init(seed: f64) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let explorer = Explorer::with_clock(ExplorerConfig::default(), seed as u64, js_now).map_err(to_js_error)?;
    log::info!("galaxy-web: initialized with {}", explorer.galaxy().name());

    EXPLORER.with(|cell| {
        *cell.borrow_mut() = Some(explorer);
    });
    Ok(())
}

/// Advance one frame. `dt_ms` is the frame delta in milliseconds.
#[wasm_bindgen]
pub fn galaxy_tick(dt_ms: f32) {
    with_explorer(|e| e.tick(dt_ms / 1000.0));
}

// ---- Input ----

#[wasm_bindgen]
pub fn galaxy_double_click(x: f32, y: f32) {
    with_explorer(|e| e.push_input(InputEvent::DoubleClick { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_resize(width: f32, height: f32) {
    with_explorer(|e| e.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn galaxy_regenerate() {
    with_explorer(|e| e.push_input(InputEvent::Regenerate));
}

#[wasm_bindgen]
pub fn galaxy_open_system(index: u32) {
    with_explorer(|e| e.push_input(InputEvent::OpenSystem { index: index as usize }));
}

#[wasm_bindgen]
pub fn galaxy_open_galaxy() {
    with_explorer(|e| e.push_input(InputEvent::OpenGalaxy));
}

#[wasm_bindgen]
pub fn galaxy_load_config(json: &str) -> Result<(), JsValue> {
    with_explorer(|e| e.load_config_json(json).map_err(to_js_error))
        .unwrap_or_else(|| Err(JsValue::from_str("explorer not initialized")))
}

// ---- State accessors ----

/// Every object in the current scene as a JSON array.
#[wasm_bindgen]
pub fn get_scene_json() -> String {
    with_explorer(|e| serde_json::to_string(e.scene().objects()))
        .and_then(|r| r.map_err(|err| log::warn!("scene serialization failed: {}", err)).ok())
        .unwrap_or_else(|| "[]".to_string())
}

/// The generated galaxy tree as JSON, or `null` before init.
#[wasm_bindgen]
pub fn get_galaxy_json() -> String {
    with_explorer(|e| serde_json::to_string(e.galaxy()))
        .and_then(|r| r.map_err(|err| log::warn!("galaxy serialization failed: {}", err)).ok())
        .unwrap_or_else(|| "null".to_string())
}

/// `[x, y, z]`
#[wasm_bindgen]
pub fn get_camera_position() -> Vec<f32> {
    with_explorer(|e| e.camera().position.to_array().to_vec()).unwrap_or_default()
}

/// `[x, y, z]` of the orbit-control target; animates during a focus transition.
#[wasm_bindgen]
pub fn get_camera_target() -> Vec<f32> {
    with_explorer(|e| e.camera().target.to_array().to_vec()).unwrap_or_default()
}

/// Flat `[x0, y0, z0, x1, ...]` polyline for the orbit object with `id`, empty otherwise.
#[wasm_bindgen]
pub fn get_orbit_ring(id: u32) -> Vec<f32> {
    with_explorer(|e| {
        e.orbit_ring(ObjectId(id))
            .map(|points| points.iter().flat_map(|p| p.to_array()).collect())
            .unwrap_or_default()
    })
    .unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_selected_name() -> Option<String> {
    with_explorer(|e| e.selected_name().map(str::to_string)).flatten()
}

#[wasm_bindgen]
pub fn is_focus_animating() -> bool {
    with_explorer(|e| e.focus().is_animating()).unwrap_or(false)
}
