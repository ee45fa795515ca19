pub mod gpu_structures;
pub mod renderer;
pub mod shaders;

pub use gpu_structures::*;
pub use renderer::WebGlRenderer;
