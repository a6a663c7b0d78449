pub mod scene;
pub mod scheduler;

pub use scene::*;
pub use scheduler::*;
