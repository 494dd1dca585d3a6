pub mod config;
pub mod interop;
pub mod math;
pub mod types;

// Flat re-exports so callers can write `gl_transform::rotate(&mut m, ...)`
pub use math::{
    degrees, frustum, load_identity, look_at, mult_matrix, ortho, ortho_2d, perspective, radians,
    rotate, scale, translate, Matrix4, IDENTITY,
};
pub use types::TransformUniform;
