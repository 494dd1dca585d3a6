/// Scratch 3-vector used while building view and rotation matrices
pub(crate) type Vec3 = [f32; 3];

/// Scale `v` to unit length. A zero vector yields NaN components.
pub(crate) fn normalize(v: &mut Vec3) {
    let inv = 1.0 / (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    v[0] *= inv;
    v[1] *= inv;
    v[2] *= inv;
}

pub(crate) fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
