use super::matrix::{mult_matrix, Matrix4};
use super::transform::translate;
use super::vector::{cross, normalize, Vec3};

/// Compose a right-handed view transform looking from `eye` towards `center`
/// onto `m`.
///
/// `up` and `center - eye` must be non-zero and not parallel, otherwise the
/// result is NaN.
pub fn look_at(m: &mut Matrix4, eye: [f32; 3], center: [f32; 3], up: [f32; 3]) {
    let mut up: Vec3 = up;
    normalize(&mut up);

    let mut forward: Vec3 = [center[0] - eye[0], center[1] - eye[1], center[2] - eye[2]];
    normalize(&mut forward);

    let mut side = cross(&forward, &up);
    normalize(&mut side);

    let up = cross(&side, &forward);

    #[rustfmt::skip]
    let orientation = [
        side[0], up[0], -forward[0], 0.0,
        side[1], up[1], -forward[1], 0.0,
        side[2], up[2], -forward[2], 0.0,
        0.0,     0.0,   0.0,         1.0,
    ];

    mult_matrix(m, &orientation);
    translate(m, -eye[0], -eye[1], -eye[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::IDENTITY;

    #[test]
    fn test_look_at_default_orientation_is_identity() {
        let mut m = IDENTITY;
        look_at(&mut m, [0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]);
        for (i, (a, b)) in m.iter().zip(IDENTITY.iter()).enumerate() {
            assert!((a - b).abs() < 1e-6, "element {}: {} vs {}", i, a, b);
        }
    }

    #[test]
    fn test_look_at_translates_by_negative_eye() {
        let mut m = IDENTITY;
        look_at(&mut m, [1.0, 2.0, 3.0], [1.0, 2.0, 2.0], [0.0, 1.0, 0.0]);
        assert!((m[12] + 1.0).abs() < 1e-6);
        assert!((m[13] + 2.0).abs() < 1e-6);
        assert!((m[14] + 3.0).abs() < 1e-6);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn test_look_at_rows_are_orthonormal() {
        let mut m = IDENTITY;
        look_at(&mut m, [3.0, 4.0, 5.0], [-1.0, 0.5, 2.0], [0.0, 1.0, 0.2]);
        let row = |r: usize| [m[r], m[4 + r], m[8 + r]];
        for a in 0..3 {
            for b in 0..3 {
                let (ra, rb) = (row(a), row(b));
                let dot = ra[0] * rb[0] + ra[1] * rb[1] + ra[2] * rb[2];
                let expected = if a == b { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-5, "rows {} {} dot {}", a, b, dot);
            }
        }
    }

    #[test]
    fn test_look_at_parallel_up_is_nan() {
        let mut m = IDENTITY;
        look_at(&mut m, [0.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(m[0].is_nan());
    }
}
