use crate::dom;
use crate::render::GpuSlot;
use starfield_core::Starfield;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Listeners below live for the lifetime of the page and are never removed.

pub fn wire_pointer_move(starfield: Rc<RefCell<Starfield>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        starfield
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_device_orientation(starfield: Rc<RefCell<Starfield>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        if let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) {
            starfield
                .borrow_mut()
                .orientation_changed(beta as f32, gamma as f32);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window
        .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep viewport, camera and surface in step with the window, applied inside
/// the resize handler itself. Until a GPU lands in `gpu_slot` only the
/// viewport and camera follow.
pub fn wire_resize(starfield: Rc<RefCell<Starfield>>, gpu_slot: GpuSlot) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let (width, height) = dom::viewport_size(&w);
        let gpu = gpu_slot.borrow().clone();
        let mut starfield = starfield.borrow_mut();
        match gpu {
            Some(gpu) => starfield.resize(width, height, &mut *gpu.borrow_mut()),
            None => starfield.set_viewport(width, height),
        }
        log::debug!("[resize] {}x{}", width, height);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
