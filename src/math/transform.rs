use super::angle::radians;
use super::matrix::{mult_matrix, Matrix4, IDENTITY};
use super::vector::{normalize, Vec3};

/// Add a translation expressed in the current basis of `m`.
///
/// Only the last column (elements 12..16) changes.
pub fn translate(m: &mut Matrix4, x: f32, y: f32, z: f32) {
    m[12] += m[0] * x + m[4] * y + m[8] * z;
    m[13] += m[1] * x + m[5] * y + m[9] * z;
    m[14] += m[2] * x + m[6] * y + m[10] * z;
    m[15] += m[3] * x + m[7] * y + m[11] * z;
}

/// Rotate `m` by `angle` degrees around the axis `(x, y, z)`.
///
/// The rotation pivots around the origin of the current basis: elements
/// 12..16 are restored to their values from before the call.
pub fn rotate(m: &mut Matrix4, angle: f32, x: f32, y: f32, z: f32) {
    let a = radians(angle);
    let c = a.cos();
    let s = a.sin();

    let mut axis: Vec3 = [x, y, z];
    normalize(&mut axis);
    let [nx, ny, nz] = axis;

    let t0 = nx * (1.0 - c);
    let t1 = ny * (1.0 - c);
    let t2 = nz * (1.0 - c);

    let translation = [m[12], m[13], m[14], m[15]];

    let mut d = IDENTITY;
    d[0] = c + t0 * nx;
    d[1] = t0 * ny + s * nz;
    d[2] = t0 * nz - s * ny;

    d[4] = t1 * nx - s * nz;
    d[5] = c + t1 * ny;
    d[6] = t1 * nz + s * nx;

    d[8] = t2 * nx + s * ny;
    d[9] = t2 * ny - s * nx;
    d[10] = c + t2 * nz;

    mult_matrix(m, &d);

    m[12..16].copy_from_slice(&translation);
}

/// Scale the basis columns of `m`; the translation column is left untouched.
pub fn scale(m: &mut Matrix4, x: f32, y: f32, z: f32) {
    for (column, factor) in m[..12].chunks_exact_mut(4).zip([x, y, z]) {
        for v in column {
            *v *= factor;
        }
    }
}
