//! Device-orientation permission flow.
//!
//! iOS-style platforms expose `DeviceOrientationEvent.requestPermission()`,
//! which must be called synchronously inside a user gesture and resolves to
//! `"granted"` or `"denied"`. Everywhere else the listener is attached as soon
//! as the gyroscope is requested. Any failure leaves pointer input in charge.

use crate::constants::{ORIENTATION_EVENT_CTOR, REQUEST_PERMISSION_FN};
use crate::events;
use starfield_core::{OrientationGate, SensorCapability, Starfield};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Consent hook found on the platform, if any.
enum SensorHook {
    Consent {
        ctor: JsValue,
        request: js_sys::Function,
    },
    Plain(SensorCapability),
}

fn detect_sensor(window: &web::Window) -> SensorHook {
    let ctor = js_sys::Reflect::get(window, &JsValue::from_str(ORIENTATION_EVENT_CTOR))
        .unwrap_or(JsValue::UNDEFINED);
    if ctor.is_undefined() || ctor.is_null() {
        return SensorHook::Plain(SensorCapability::Unavailable);
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION_FN))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    match request {
        Some(request) => SensorHook::Consent { ctor, request },
        None => SensorHook::Plain(SensorCapability::Ungated),
    }
}

pub fn enable_gyroscope(starfield: Rc<RefCell<Starfield>>, gate: Rc<RefCell<OrientationGate>>) {
    let Some(window) = web::window() else {
        return;
    };
    match detect_sensor(&window) {
        SensorHook::Plain(capability) => apply(&starfield, &gate, capability, None),
        SensorHook::Consent { ctor, request } => {
            // The call itself has to happen inside the gesture; only the
            // answer is awaited.
            let promise = match request.call0(&ctor) {
                Ok(p) => p.dyn_into::<js_sys::Promise>().ok(),
                Err(e) => {
                    log::warn!("[gyro] permission request threw: {:?}", e);
                    None
                }
            };
            let Some(promise) = promise else {
                apply(&starfield, &gate, SensorCapability::RequiresConsent, None);
                return;
            };
            spawn_local(async move {
                let response = match JsFuture::from(promise).await {
                    Ok(v) => v.as_string(),
                    Err(e) => {
                        log::warn!("[gyro] permission request rejected: {:?}", e);
                        None
                    }
                };
                apply(
                    &starfield,
                    &gate,
                    SensorCapability::RequiresConsent,
                    response.as_deref(),
                );
            });
        }
    }
}

fn apply(
    starfield: &Rc<RefCell<Starfield>>,
    gate: &Rc<RefCell<OrientationGate>>,
    capability: SensorCapability,
    response: Option<&str>,
) {
    let mut gate = gate.borrow_mut();
    let permission = gate.resolve(capability, response);
    starfield.borrow_mut().set_orientation_permission(permission);
    if gate.should_subscribe() {
        events::wire_device_orientation(starfield.clone());
        gate.mark_subscribed();
        log::info!("[gyro] orientation input enabled ({:?})", capability);
    } else if permission.is_granted() && gate.is_subscribed() {
        log::debug!("[gyro] orientation listener already attached");
    } else if !permission.is_granted() {
        log::warn!(
            "[gyro] orientation unavailable ({:?}, {:?}); staying on pointer input",
            capability,
            permission
        );
    }
}
