pub mod renderer;
pub mod renderer_cairo;
