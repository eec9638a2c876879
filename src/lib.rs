#![cfg(target_arch = "wasm32")]
use effects::Mounted;
use fnv::FnvHashMap;
use fx_core::config::from_json_or_default;
use fx_core::{DotGridConfig, LightningConfig, ParticleConfig, ScrollIndicatorConfig, TracingBeamConfig};
use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod render;

// Live effects by handle. Dropping an entry tears the effect down.
thread_local! {
    static MOUNTED: RefCell<FnvHashMap<u32, Mounted>> = RefCell::new(FnvHashMap::default());
    static NEXT_HANDLE: Cell<u32> = const { Cell::new(1) };
}

fn register(kind: &str, target: &str, mounted: anyhow::Result<Mounted>) -> Option<u32> {
    match mounted {
        Ok(m) => {
            let handle = NEXT_HANDLE.with(|n| {
                let h = n.get();
                n.set(h.checked_add(1).unwrap_or(1));
                h
            });
            MOUNTED.with(|r| r.borrow_mut().insert(handle, m));
            Some(handle)
        }
        Err(e) => {
            log::warn!("[{kind}] not mounted on #{target}: {e:#}");
            None
        }
    }
}

fn config<T>(json: Option<String>) -> T
where
    T: for<'de> serde::Deserialize<'de> + Default,
{
    from_json_or_default(json.as_deref().unwrap_or(""))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web ready");
    Ok(())
}

/// Particle field on a canvas. Returns a handle for [`unmount`], or
/// `undefined` when the canvas is missing.
#[wasm_bindgen]
pub fn mount_particles(canvas_id: &str, config_json: Option<String>) -> Option<u32> {
    let cfg = config::<ParticleConfig>(config_json).sanitize();
    register("particles", canvas_id, effects::particles::mount(canvas_id, cfg))
}

#[wasm_bindgen]
pub fn mount_dot_grid(canvas_id: &str, config_json: Option<String>) -> Option<u32> {
    let cfg = config::<DotGridConfig>(config_json).sanitize();
    register("dot-grid", canvas_id, effects::dot_grid::mount(canvas_id, cfg))
}

#[wasm_bindgen]
pub fn mount_lightning(canvas_id: &str, config_json: Option<String>) -> Option<u32> {
    let cfg = config::<LightningConfig>(config_json).sanitize();
    register("lightning", canvas_id, effects::lightning::mount(canvas_id, cfg))
}

/// Tracing beam inside an `<svg>` element.
#[wasm_bindgen]
pub fn mount_tracing_beam(svg_id: &str, config_json: Option<String>) -> Option<u32> {
    let cfg = config::<TracingBeamConfig>(config_json);
    register("tracing-beam", svg_id, effects::tracing_beam::mount(svg_id, cfg))
}

/// Thunderbolt scroll indicator inside a track element.
#[wasm_bindgen]
pub fn mount_scroll_indicator(track_id: &str, config_json: Option<String>) -> Option<u32> {
    let cfg = config::<ScrollIndicatorConfig>(config_json);
    register(
        "scroll-indicator",
        track_id,
        effects::scroll_indicator::mount(track_id, cfg),
    )
}

/// Stop an effect and remove its listeners and generated elements.
/// Returns `false` for an unknown (or already unmounted) handle.
#[wasm_bindgen]
pub fn unmount(handle: u32) -> bool {
    // take the entry out before dropping it so teardown runs without the map borrowed
    let removed = MOUNTED.with(|r| r.borrow_mut().remove(&handle));
    match removed {
        Some(m) => {
            log::debug!("[{}] handle {handle} released", m.name());
            true
        }
        None => false,
    }
}
