mod angle;
mod matrix;
mod projection;
mod transform;
mod vector;
mod view;

pub use angle::{degrees, radians};
pub use matrix::{load_identity, mult_matrix, Matrix4, IDENTITY};
pub use projection::{frustum, ortho, ortho_2d, perspective};
pub use transform::{rotate, scale, translate};
pub use view::look_at;
