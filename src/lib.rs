pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod traits;
pub mod types;
pub mod window;

pub use camera::PerspectiveCamera;
pub use config::{ConfigError, SceneConfig};
pub use crate::core::{
    AnimationSession, AnimationState, CancelSignal, FrameOutcome, Point3, RotationAnimator,
    SpherePointSampler, UniformSource,
};
pub use scene::SceneState;
