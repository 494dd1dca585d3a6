/// 4x4 column-major matrix: translation lives in elements 12, 13 and 14
pub type Matrix4 = [f32; 16];

#[rustfmt::skip]
pub const IDENTITY: Matrix4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

pub fn load_identity(m: &mut Matrix4) {
    *m = IDENTITY;
}

/// Multiply `o` onto `m` in place.
///
/// Elements are combined as `r[i*4 + j] = sum_k m[i*4 + k] * o[k*4 + j]`, so in
/// column-major algebra the stored result is `o * m`. The product is built in a
/// scratch buffer before being written back.
pub fn mult_matrix(m: &mut Matrix4, o: &Matrix4) {
    let mut r = [0.0f32; 16];

    for i in 0..4 {
        for j in 0..4 {
            let mut v = 0.0;
            for k in 0..4 {
                v += m[i * 4 + k] * o[k * 4 + j];
            }
            r[i * 4 + j] = v;
        }
    }

    *m = r;
}
