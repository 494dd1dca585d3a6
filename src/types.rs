use crate::math::{mult_matrix, Matrix4, IDENTITY};

/// Model, view and projection matrices laid out for a GPU uniform buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: Matrix4,
    pub view: Matrix4,
    pub projection: Matrix4,
}

impl TransformUniform {
    pub const fn new() -> Self {
        Self {
            model: IDENTITY,
            view: IDENTITY,
            projection: IDENTITY,
        }
    }

    /// Combined model-view matrix, i.e. `view * model` in column-major terms
    pub fn model_view(&self) -> Matrix4 {
        let mut m = self.model;
        mult_matrix(&mut m, &self.view);
        m
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new()
    }
}
