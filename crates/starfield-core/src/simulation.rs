//! Per-frame orchestration over the shared simulation state.
//!
//! [`Starfield`] owns every value the input callbacks write and the frame
//! loop reads. Hosts with a single event thread can share it behind
//! `Rc<RefCell<_>>`; a parallel host would need a lock around it instead.

use crate::camera::{Camera, Rotation};
use crate::config::StarfieldConfig;
use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::look::LookInput;
use crate::permission::OrientationPermission;
use crate::render::{FrameView, Renderer};
use crate::speed::SpeedController;
use crate::viewport::Viewport;
use crate::visual::Appearance;
use rand::Rng;

/// Derived values for one advanced frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub speed: f32,
    pub rotation: Rotation,
    pub appearance: Appearance,
}

#[derive(Clone, Debug)]
pub struct Starfield {
    field: ParticleField,
    look: LookInput,
    speed: SpeedController,
    rotation: Rotation,
    rotation_smoothing: f32,
    viewport: Viewport,
    camera: Camera,
    appearance: Appearance,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(
        config: &StarfieldConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = ParticleField::initialize(config.particle_count, config.field_extent, rng);
        Ok(Self::with_field(config, field))
    }

    /// Assemble around an existing field. The config's count and extent are
    /// ignored in favour of the field's own.
    pub fn with_field(config: &StarfieldConfig, field: ParticleField) -> Self {
        let speed = SpeedController::new(
            config.normal_speed,
            config.warp_speed,
            config.speed_smoothing,
        );
        Self {
            field,
            look: LookInput::default(),
            appearance: Appearance::for_speed(speed.current()),
            speed,
            rotation: Rotation::default(),
            rotation_smoothing: config.rotation_smoothing,
            viewport: Viewport::default(),
            camera: Camera::default(),
        }
    }

    /// Advance the simulation by one frame. Speed is eased before the field
    /// moves, so the first frame after `set_warp` is already slightly faster.
    pub fn step(&mut self) -> FrameState {
        let speed = self.speed.tick();
        self.field.advance(speed);
        let target = self.look.current_look();
        self.rotation.ease_toward(target, self.rotation_smoothing);
        self.appearance = Appearance::for_speed(speed);
        FrameState {
            speed,
            rotation: self.rotation,
            appearance: self.appearance,
        }
    }

    /// Step, push changed positions to the renderer and submit the frame.
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> Result<FrameState, R::Error> {
        let state = self.step();
        if self.field.take_dirty() {
            renderer.upload_positions(&self.field);
        }
        renderer.render(&self.frame_view())?;
        Ok(state)
    }

    pub fn frame_view(&self) -> FrameView {
        FrameView::new(
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
            self.rotation.model_matrix(),
            self.appearance,
        )
    }

    /// Apply a new viewport size to the camera and the render surface at once.
    pub fn resize<R: Renderer>(&mut self, width: f32, height: f32, renderer: &mut R) {
        self.set_viewport(width, height);
        renderer.resize(&self.viewport);
    }

    /// Update viewport and camera only, for hosts with no surface yet.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        if let Some(aspect) = self.viewport.aspect_ratio() {
            self.camera.set_aspect(aspect);
        }
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.look.pointer_moved(client_x, client_y, &self.viewport);
    }

    pub fn orientation_changed(&mut self, beta: f32, gamma: f32) -> bool {
        self.look.orientation_changed(beta, gamma)
    }

    pub fn set_orientation_permission(&mut self, permission: OrientationPermission) {
        self.look.set_permission(permission);
    }

    pub fn set_warp(&mut self, active: bool) {
        self.speed.set_warp(active);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn look(&self) -> &LookInput {
        &self.look
    }

    pub fn speed(&self) -> &SpeedController {
        &self.speed
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}
