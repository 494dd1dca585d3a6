use super::angle::radians;
use super::matrix::Matrix4;

// Builders below overwrite all 16 elements. Zero-width extents are not
// checked and propagate as Inf/NaN.

pub fn ortho(m: &mut Matrix4, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
    let rl = right - left;
    let tb = top - bottom;
    let fn_ = far - near;

    #[rustfmt::skip]
    let projection = [
        2.0 / rl,             0.0,                  0.0,                   0.0,
        0.0,                  2.0 / tb,             0.0,                   0.0,
        0.0,                  0.0,                  -2.0 / fn_,            0.0,
        -(left + right) / rl, -(top + bottom) / tb, -(far + near) / fn_,   1.0,
    ];
    *m = projection;
}

/// Orthographic projection with the clipping planes fixed at -1 and 1
pub fn ortho_2d(m: &mut Matrix4, left: f32, right: f32, bottom: f32, top: f32) {
    ortho(m, left, right, bottom, top, -1.0, 1.0);
}

/// Right-handed perspective frustum; clip-space w is `-z` (element 11 is -1).
pub fn frustum(m: &mut Matrix4, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
    let near2 = 2.0 * near;
    let rl = right - left;
    let tb = top - bottom;
    let fn_ = far - near;

    #[rustfmt::skip]
    let projection = [
        near2 / rl,          0.0,                 0.0,                   0.0,
        0.0,                 near2 / tb,          0.0,                   0.0,
        (right + left) / rl, (top + bottom) / tb, (-far - near) / fn_,   -1.0,
        0.0,                 0.0,                 (-near2 * far) / fn_,  0.0,
    ];
    *m = projection;
}

/// Symmetric perspective projection.
///
/// The half-height of the near plane is `near * tan(fovy)`: the field of view
/// is NOT halved before taking the tangent, so `fovy` acts as the half-angle of
/// the vertical view cone. Callers porting from gluPerspective must pass half
/// their usual angle.
pub fn perspective(m: &mut Matrix4, fovy: f32, aspect: f32, near: f32, far: f32) {
    let ymax = near * radians(fovy).tan();
    let xmax = ymax * aspect;
    frustum(m, -xmax, xmax, -ymax, ymax, near, far);
}
