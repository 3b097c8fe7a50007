use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::render::GpuState;
use instant::Instant;
use starfield_core::{FrameState, LookSource, Starfield};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub starfield: Rc<RefCell<Starfield>>,
    pub gpu: Rc<RefCell<GpuState>>,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut gpu = self.gpu.borrow_mut();
        let mut starfield = self.starfield.borrow_mut();
        match starfield.frame(&mut *gpu) {
            Ok(state) => self.stats.record(&state, starfield.look().source()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Rolling frame-rate counter, logged at debug level.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }
}

impl FrameStats {
    fn record(&mut self, state: &FrameState, source: Option<LookSource>) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, speed {:.2}, look from {:?}",
                self.frames as f32 / elapsed,
                state.speed,
                source
            );
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
