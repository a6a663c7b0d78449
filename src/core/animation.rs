use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use glam::{Quat, Vec3};

use crate::traits::{FrameScheduler, SceneTarget};

/// One full revolution of the scene
pub const CYCLE_DURATION_MS: f64 = 40_000.0;

/// Axis the scene spins around
pub const ROTATION_AXIS: Vec3 = Vec3::Y;

/// Fold elapsed time back into a single cycle without moving the start time.
///
/// Elapsed time of exactly one cycle wraps to zero, keeping the angle in
/// [0°, 360°).
pub fn wrap_elapsed(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if elapsed_ms >= duration_ms {
        elapsed_ms - (elapsed_ms / duration_ms).floor() * duration_ms
    } else {
        elapsed_ms
    }
}

/// Rotation in degrees after `elapsed_ms`, a sawtooth over [0, 360)
pub fn rotation_degrees(elapsed_ms: f64, duration_ms: f64) -> f64 {
    let fraction = wrap_elapsed(elapsed_ms, duration_ms) / duration_ms;
    fraction * 360.0
}

/// Rotation in radians after `elapsed_ms`
pub fn rotation_angle(elapsed_ms: f64, duration_ms: f64) -> f64 {
    rotation_degrees(elapsed_ms, duration_ms) * PI / 180.0
}

/// Absolute scene orientation for an angle about [`ROTATION_AXIS`]
pub fn orientation_for(angle_radians: f64) -> Quat {
    Quat::from_axis_angle(ROTATION_AXIS, angle_radians as f32)
}

/// One-shot teardown flag shared between the view and its animation.
///
/// Clones observe the same flag. Only the first `cancel` has an effect.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    closed: Rc<Cell<bool>>,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the signal. Returns true only for the call that closed it.
    pub fn cancel(&self) -> bool {
        !self.closed.replace(true)
    }

    pub fn is_cancelled(&self) -> bool {
        self.closed.get()
    }
}

/// Timing state for one mounted view
#[derive(Debug, Clone)]
pub struct AnimationSession {
    start_ms: Option<f64>,
    duration_ms: f64,
    cancel: CancelSignal,
}

impl AnimationSession {
    pub fn new(duration_ms: f64, cancel: CancelSignal) -> Self {
        Self {
            start_ms: None,
            duration_ms,
            cancel,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Timestamp of the first frame, once one has fired
    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    pub fn cancel_signal(&self) -> &CancelSignal {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Angle in radians for a frame at `timestamp_ms`, or `None` once cancelled.
    /// The first call pins the start time.
    pub fn advance(&mut self, timestamp_ms: f64) -> Option<f64> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let start = *self.start_ms.get_or_insert(timestamp_ms);
        Some(rotation_angle(timestamp_ms - start, self.duration_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
    Cancelled,
}

/// What a frame callback did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Orientation applied, next frame requested, frame rendered
    Rendered { angle_radians: f64 },
    /// The animation was never started
    Idle,
    /// The session is closed; nothing scheduled or rendered
    Cancelled,
}

/// Drives the per-frame rotation of a scene
#[derive(Debug)]
pub struct RotationAnimator {
    session: AnimationSession,
    started: bool,
    frames_rendered: u64,
}

impl RotationAnimator {
    pub fn new(session: AnimationSession) -> Self {
        Self {
            session,
            started: false,
            frames_rendered: 0,
        }
    }

    pub fn state(&self) -> AnimationState {
        match (self.session.is_cancelled(), self.started) {
            (true, _) => AnimationState::Cancelled,
            (false, true) => AnimationState::Running,
            (false, false) => AnimationState::Idle,
        }
    }

    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Move from Idle to Running and request the first frame.
    /// Does nothing when already running or cancelled.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &S) {
        if self.state() != AnimationState::Idle {
            return;
        }

        self.started = true;
        scheduler.request_frame();
    }

    /// Cancel the session. Returns true only on the first call.
    pub fn cancel(&self) -> bool {
        self.session.cancel.cancel()
    }

    /// Handle one frame callback fired at `timestamp_ms`.
    ///
    /// The next frame is requested before the current one is rendered. A
    /// cancelled session returns without scheduling or rendering.
    pub fn on_frame<S, T>(
        &mut self,
        timestamp_ms: f64,
        scheduler: &S,
        target: &mut T,
    ) -> Result<FrameOutcome, T::Error>
    where
        S: FrameScheduler + ?Sized,
        T: SceneTarget + ?Sized,
    {
        match self.state() {
            AnimationState::Cancelled => return Ok(FrameOutcome::Cancelled),
            AnimationState::Idle => return Ok(FrameOutcome::Idle),
            AnimationState::Running => {}
        }

        let Some(angle_radians) = self.session.advance(timestamp_ms) else {
            return Ok(FrameOutcome::Cancelled);
        };

        target.set_orientation(orientation_for(angle_radians));

        scheduler.request_frame();
        target.render()?;
        self.frames_rendered += 1;

        Ok(FrameOutcome::Rendered { angle_radians })
    }
}
