pub mod animation;
pub mod fps;
pub mod frame;
pub mod sampler;
pub mod window;

pub use animation::*;
pub use fps::FpsCounter;
pub use frame::{FrameClock, FrameInfo};
pub use sampler::{Point3, RngSource, SpherePointSampler, UniformSource};
pub use window::WindowDimensions;
