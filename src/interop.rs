use glam::{Mat4, Vec4};

use crate::math::Matrix4;

pub fn to_mat4(m: &Matrix4) -> Mat4 {
    Mat4::from_cols_array(m)
}

pub fn from_mat4(m: &Mat4) -> Matrix4 {
    m.to_cols_array()
}

/// Apply `m` to a homogeneous column vector
pub fn transform_point(m: &Matrix4, p: [f32; 4]) -> [f32; 4] {
    (to_mat4(m) * Vec4::from_array(p)).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{mult_matrix, translate, IDENTITY};
    use glam::Vec3;

    #[test]
    fn test_round_trip_keeps_layout() {
        let m: Matrix4 = core::array::from_fn(|i| i as f32);
        assert_eq!(from_mat4(&to_mat4(&m)), m);
        assert_eq!(to_mat4(&m).w_axis, Vec4::new(12.0, 13.0, 14.0, 15.0));
    }

    #[test]
    fn test_translation_column_matches_glam() {
        let mut m = IDENTITY;
        translate(&mut m, 1.0, 2.0, 3.0);
        assert_eq!(to_mat4(&m), Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_mult_matrix_is_reversed_glam_product() {
        let a: Matrix4 = core::array::from_fn(|i| (i as f32) * 0.5 - 3.0);
        let b: Matrix4 = core::array::from_fn(|i| ((i * 7) % 5) as f32 - 1.0);

        let mut m = a;
        mult_matrix(&mut m, &b);

        let expected = to_mat4(&b) * to_mat4(&a);
        assert!(to_mat4(&m).abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_transform_point_applies_translation() {
        let mut m = IDENTITY;
        translate(&mut m, -1.0, 0.5, 10.0);
        assert_eq!(transform_point(&m, [1.0, 1.0, 1.0, 1.0]), [0.0, 1.5, 11.0, 1.0]);
        assert_eq!(transform_point(&m, [1.0, 1.0, 1.0, 0.0]), [1.0, 1.0, 1.0, 0.0]);
    }
}
