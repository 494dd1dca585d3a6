// config.rs - Declarative projection, camera and model transforms
use anyhow::{ensure, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::math::{frustum, look_at, ortho, ortho_2d, perspective, rotate, scale, translate, Matrix4};
use crate::types::TransformUniform;

/// Minimum length of the side vector before an up vector counts as parallel
const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    Ortho {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
    #[serde(rename = "ortho_2d")]
    Ortho2D {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    },
    Frustum {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
    /// `fovy` is in degrees and is used without halving, see [`perspective`]
    Perspective {
        fovy: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    pub fn apply(&self, m: &mut Matrix4) {
        match *self {
            Projection::Ortho { left, right, bottom, top, near, far } => {
                ortho(m, left, right, bottom, top, near, far)
            }
            Projection::Ortho2D { left, right, bottom, top } => ortho_2d(m, left, right, bottom, top),
            Projection::Frustum { left, right, bottom, top, near, far } => {
                frustum(m, left, right, bottom, top, near, far)
            }
            Projection::Perspective { fovy, aspect, near, far } => perspective(m, fovy, aspect, near, far),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Projection::Ortho { left, right, bottom, top, near, far } => {
                ensure_finite("ortho", &[left, right, bottom, top, near, far])?;
                ensure_extents("ortho", left, right, bottom, top)?;
                ensure!(near != far, "ortho: near and far must differ (both {})", near);
            }
            Projection::Ortho2D { left, right, bottom, top } => {
                ensure_finite("ortho_2d", &[left, right, bottom, top])?;
                ensure_extents("ortho_2d", left, right, bottom, top)?;
            }
            Projection::Frustum { left, right, bottom, top, near, far } => {
                ensure_finite("frustum", &[left, right, bottom, top, near, far])?;
                ensure_extents("frustum", left, right, bottom, top)?;
                ensure!(near > 0.0, "frustum: near must be positive, got {}", near);
                ensure!(near != far, "frustum: near and far must differ (both {})", near);
            }
            Projection::Perspective { fovy, aspect, near, far } => {
                ensure_finite("perspective", &[fovy, aspect, near, far])?;
                ensure!(
                    fovy > 0.0 && fovy < 90.0,
                    "perspective: fovy must be in (0, 90) degrees, got {}",
                    fovy
                );
                ensure!(aspect != 0.0, "perspective: aspect must be non-zero");
                ensure!(near > 0.0, "perspective: near must be positive, got {}", near);
                ensure!(near != far, "perspective: near and far must differ (both {})", near);
            }
        }
        Ok(())
    }
}

/// Look-at camera parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: [f32; 3],
    pub center: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

impl Camera {
    pub fn apply(&self, m: &mut Matrix4) {
        look_at(m, self.eye, self.center, self.up);
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("camera", &self.eye)?;
        ensure_finite("camera", &self.center)?;
        ensure_finite("camera", &self.up)?;

        let forward = [
            self.center[0] - self.eye[0],
            self.center[1] - self.eye[1],
            self.center[2] - self.eye[2],
        ];
        ensure!(length(&forward) > 0.0, "camera: eye and center coincide at {:?}", self.eye);
        ensure!(length(&self.up) > 0.0, "camera: up vector has zero length");

        let side = [
            forward[1] * self.up[2] - forward[2] * self.up[1],
            forward[2] * self.up[0] - forward[0] * self.up[2],
            forward[0] * self.up[1] - forward[1] * self.up[0],
        ];
        ensure!(
            length(&side) > PARALLEL_EPSILON * length(&forward) * length(&self.up),
            "camera: up vector {:?} is parallel to the view direction",
            self.up
        );
        Ok(())
    }
}

/// One elementary model transform, composed in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelStep {
    Translate { x: f32, y: f32, z: f32 },
    /// `angle` in degrees
    Rotate { angle: f32, axis: [f32; 3] },
    Scale { x: f32, y: f32, z: f32 },
}

impl ModelStep {
    pub fn apply(&self, m: &mut Matrix4) {
        match *self {
            ModelStep::Translate { x, y, z } => translate(m, x, y, z),
            ModelStep::Rotate { angle, axis: [x, y, z] } => rotate(m, angle, x, y, z),
            ModelStep::Scale { x, y, z } => scale(m, x, y, z),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            ModelStep::Translate { x, y, z } => ensure_finite("translate", &[x, y, z]),
            ModelStep::Rotate { angle, axis } => {
                ensure_finite("rotate", &[angle, axis[0], axis[1], axis[2]])?;
                ensure!(length(&axis) > 0.0, "rotate: axis has zero length");
                Ok(())
            }
            ModelStep::Scale { x, y, z } => ensure_finite("scale", &[x, y, z]),
        }
    }
}

/// Everything needed to fill a [`TransformUniform`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTransforms {
    pub projection: Projection,
    #[serde(default)]
    pub camera: Option<Camera>,
    #[serde(default)]
    pub model: Vec<ModelStep>,
}

impl SceneTransforms {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse transform config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transform config: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Invalid transform config: {:?}", path))
    }

    pub fn validate(&self) -> Result<()> {
        self.projection.validate()?;
        if let Some(camera) = &self.camera {
            camera.validate()?;
        }
        for (i, step) in self.model.iter().enumerate() {
            step.validate().with_context(|| format!("model step {}", i))?;
        }
        Ok(())
    }

    /// Validate, then build projection, view and model matrices from identity
    pub fn build(&self) -> Result<TransformUniform> {
        self.validate()?;

        let mut uniform = TransformUniform::new();

        self.projection.apply(&mut uniform.projection);
        debug!("Built projection {:?}", self.projection);

        match &self.camera {
            Some(camera) => {
                camera.apply(&mut uniform.view);
                debug!("Built view from eye {:?} towards {:?}", camera.eye, camera.center);
            }
            None => warn!("No camera configured, view matrix stays identity"),
        }

        for step in &self.model {
            step.apply(&mut uniform.model);
        }
        debug!("Composed {} model steps", self.model.len());

        Ok(uniform)
    }
}

fn length(v: &[f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn ensure_finite(what: &str, values: &[f32]) -> Result<()> {
    ensure!(
        values.iter().all(|v| v.is_finite()),
        "{}: parameters must be finite, got {:?}",
        what,
        values
    );
    Ok(())
}

fn ensure_extents(what: &str, left: f32, right: f32, bottom: f32, top: f32) -> Result<()> {
    ensure!(left != right, "{}: left and right must differ (both {})", what, left);
    ensure!(bottom != top, "{}: bottom and top must differ (both {})", what, bottom);
    Ok(())
}
