#![cfg(target_arch = "wasm32")]
//! Web entry points for the starfield background.
//!
//! Page scripts call `initialize()` (also run automatically on `load`),
//! `setWarpSpeed(bool)` from warp buttons, and `enableGyroscope()` from a tap
//! handler. Everything runs on the page's event loop; shared state lives in a
//! thread-local `Rc<RefCell<_>>` that each callback borrows only briefly.

mod constants;
mod dom;
mod events;
mod frame;
mod gyro;
mod lifecycle;
mod render;

use lifecycle::StartTrigger;
use starfield_core::{ticks_to_converge, OrientationGate, Starfield, StarfieldConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
struct App {
    starfield: Rc<RefCell<Starfield>>,
    gate: Rc<RefCell<OrientationGate>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    // Warp requests that arrive before the field exists
    static PENDING_WARP: Cell<Option<bool>> = const { Cell::new(None) };
}

fn app() -> Option<App> {
    APP.with(|a| a.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    let Some((window, document)) = dom::window_document() else {
        return Ok(());
    };
    match lifecycle::start_trigger(&document.ready_state()) {
        StartTrigger::Immediately => initialize(),
        StartTrigger::OnLoad => {
            let closure = Closure::wrap(Box::new(initialize) as Box<dyn FnMut()>);
            window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }
    Ok(())
}

/// Build the field, attach listeners and start rendering. Safe to call more
/// than once; does nothing when the host container is missing.
#[wasm_bindgen]
pub fn initialize() {
    if app().is_some() {
        return;
    }
    match setup() {
        Ok(Some(app)) => APP.with(|a| *a.borrow_mut() = Some(app)),
        Ok(None) => {}
        Err(e) => log::error!("[init] error: {:?}", e),
    }
}

fn setup() -> anyhow::Result<Option<App>> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let Some(container) = dom::find_container(&document) else {
        log::warn!(
            "[init] #{} not found; starfield disabled",
            constants::CONTAINER_ID
        );
        return Ok(None);
    };

    // Field first: a bad config must not leave a canvas behind
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::new(&config, &mut rand::thread_rng())?;
    let (width, height) = dom::viewport_size(&window);
    starfield.set_viewport(width, height);
    if let Some(active) = PENDING_WARP.with(|p| p.take()) {
        starfield.set_warp(active);
    }
    let canvas = dom::attach_canvas(&document, &container)?;
    log::info!(
        "[init] {} stars, viewport {}x{}",
        starfield.field().len(),
        width,
        height
    );

    let starfield = Rc::new(RefCell::new(starfield));
    let gpu_slot: render::GpuSlot = Rc::new(RefCell::new(None));
    events::wire_pointer_move(starfield.clone());
    events::wire_resize(starfield.clone(), gpu_slot.clone());

    let starfield_gpu = starfield.clone();
    spawn_local(async move {
        let gpu = match render::GpuState::new(&canvas, config.particle_count).await {
            Ok(g) => Rc::new(RefCell::new(g)),
            Err(e) => {
                log::error!("WebGPU init error: {:?}", e);
                return;
            }
        };
        *gpu_slot.borrow_mut() = Some(gpu.clone());
        {
            // Catch up with any resize that happened while the adapter was pending
            let mut starfield = starfield_gpu.borrow_mut();
            let viewport = *starfield.viewport();
            starfield.resize(viewport.width, viewport.height, &mut *gpu.borrow_mut());
        }
        let ctx = frame::FrameContext {
            starfield: starfield_gpu,
            gpu,
            stats: frame::FrameStats::default(),
        };
        frame::start_loop(Rc::new(RefCell::new(ctx)));
    });

    Ok(Some(App {
        starfield,
        gate: Rc::new(RefCell::new(OrientationGate::default())),
    }))
}

/// Ease toward warp speed (`true`) or back to cruising speed (`false`).
#[wasm_bindgen(js_name = setWarpSpeed)]
pub fn set_warp_speed(is_active: bool) {
    match app() {
        Some(app) => {
            let mut starfield = app.starfield.borrow_mut();
            starfield.set_warp(is_active);
            let speed = starfield.speed();
            let frames = ticks_to_converge(
                speed.current(),
                speed.target(),
                speed.acceleration(),
                constants::WARP_SETTLE_EPSILON,
            );
            let state = if speed.is_warp_engaged() { "engaged" } else { "released" };
            log::info!("[warp] {}, ~{} frames to settle", state, frames);
        }
        None => PENDING_WARP.with(|p| p.set(Some(is_active))),
    }
}

/// Ask for device-orientation input. Call from a click or tap handler.
#[wasm_bindgen(js_name = enableGyroscope)]
pub fn enable_gyroscope() {
    match app() {
        Some(app) => gyro::enable_gyroscope(app.starfield, app.gate),
        None => log::warn!("[gyro] enableGyroscope called before initialize"),
    }
}
