//! Optional checks for values crossing into (or out of) the library.
//!
//! The conversions in the rest of the crate trust their inputs, since they are meant to run
//! inside control loops. Data arriving from a robot description or over the wire is a different
//! story, and the functions here can be used to vet it first. Each one performs the same
//! conversion as its infallible counterpart but returns a [`ValidationError`] instead of
//! producing NaN or a matrix that isn't a rotation.
//!
//! ```
//! use posekit::{msgs, validate::{self, Tolerance, ValidationError}};
//!
//! let garbled = msgs::Pose {
//!     orientation: msgs::Quaternion { x: 0., y: 0., z: 0., w: 0. },
//!     ..Default::default()
//! };
//! assert_eq!(
//!     validate::pose(&garbled, Tolerance::default()),
//!     Err(ValidationError::ZeroQuaternion)
//! );
//! ```
//!
//! Rejections are also reported as `tracing` events at debug level.

use crate::msgs;
use crate::rotation::Rotation;
use crate::transform::Transform;
use crate::urdf::{JointAxis, Origin};
use crate::vectors::Axis;
use crate::Matrix3;
use thiserror::Error;

/// Why a value was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A component is NaN or infinite.
    #[error("{field} is not finite")]
    NonFinite { field: &'static str },

    /// All four components of a quaternion are zero, so it has no direction to normalize to.
    #[error("quaternion is zero and describes no rotation")]
    ZeroQuaternion,

    /// A quaternion or axis that should have unit length doesn't.
    #[error("{field} has norm {norm} but should be of unit length")]
    NotUnit { field: &'static str, norm: f64 },

    /// The matrix is not orthogonal, ie `R·Rᵀ` is not the identity.
    #[error("rotation matrix is not orthogonal")]
    NotOrthogonal,

    /// The matrix is orthogonal but mirrors space (determinant -1).
    #[error("rotation matrix is a reflection")]
    Reflection,

    /// The bottom row of a homogeneous transform is not `[0, 0, 0, 1]`.
    #[error("transform bottom row is not [0, 0, 0, 1]")]
    NotHomogeneous,
}

/// How far from ideal a value may be and still pass validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Allowed deviation of a norm from 1, and of any entry of `R·Rᵀ` from the identity.
    pub unit: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { unit: 1e-6 }
    }
}

fn reject<T>(error: ValidationError) -> Result<T, ValidationError> {
    tracing::debug!(%error, "rejecting input");
    Err(error)
}

fn finite(field: &'static str, values: &[f64]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        reject(ValidationError::NonFinite { field })
    }
}

fn unit_norm(field: &'static str, norm: f64, tolerance: Tolerance) -> Result<(), ValidationError> {
    if (norm - 1.).abs() <= tolerance.unit {
        Ok(())
    } else {
        reject(ValidationError::NotUnit { field, norm })
    }
}

/// Checks that `rotation` is orthogonal with determinant +1.
pub fn rotation(rotation: &Rotation, tolerance: Tolerance) -> Result<(), ValidationError> {
    let m = rotation.matrix();
    finite("rotation", m.as_slice())?;
    let off = (m * m.transpose() - Matrix3::identity()).amax();
    if off > tolerance.unit {
        return reject(ValidationError::NotOrthogonal);
    }
    if m.determinant() < 0. {
        return reject(ValidationError::Reflection);
    }
    Ok(())
}

/// Checks that `transform` holds a valid rotation and has bottom row `[0, 0, 0, 1]`, each entry
/// within `tolerance`.
pub fn transform(transform: &Transform, tolerance: Tolerance) -> Result<(), ValidationError> {
    let m = transform.matrix();
    finite("transform", m.as_slice())?;
    let off = (m.row(3) - nalgebra::RowVector4::new(0., 0., 0., 1.)).amax();
    if off > tolerance.unit {
        return reject(ValidationError::NotHomogeneous);
    }
    self::rotation(&transform.rotation(), tolerance)
}

/// Converts a URDF `<origin>` into a transform, rejecting non-finite attributes.
pub fn origin(origin: &Origin) -> Result<Transform, ValidationError> {
    finite("origin xyz", &origin.xyz)?;
    finite("origin rpy", &origin.rpy)?;
    Ok(Transform::from(origin))
}

/// Converts a URDF `<axis>` into an axis, rejecting axes that are not of unit length.
pub fn joint_axis(axis: &JointAxis, tolerance: Tolerance) -> Result<Axis, ValidationError> {
    finite("joint axis", &axis.0)?;
    let axis = axis.axis();
    unit_norm("joint axis", axis.norm(), tolerance)?;
    Ok(axis)
}

/// Converts a message quaternion into a rotation.
///
/// Zero quaternions are always rejected. Other quaternions must be within `tolerance` of unit
/// length; a slightly-off quaternion is normalized as part of the conversion.
pub fn quaternion(q: &msgs::Quaternion, tolerance: Tolerance) -> Result<Rotation, ValidationError> {
    finite("quaternion", &[q.x, q.y, q.z, q.w])?;
    let internal = crate::Quaternion::from(*q);
    let norm = internal.norm();
    if norm == 0. {
        return reject(ValidationError::ZeroQuaternion);
    }
    unit_norm("quaternion", norm, tolerance)?;
    Ok(Rotation::from_quaternion(&internal))
}

/// Converts a message pose into a transform.
pub fn pose(pose: &msgs::Pose, tolerance: Tolerance) -> Result<Transform, ValidationError> {
    let msgs::Point { x, y, z } = pose.position;
    finite("position", &[x, y, z])?;
    let rotation = quaternion(&pose.orientation, tolerance)?;
    Ok(Transform::from_parts(&rotation, &pose.position.into()))
}

/// Converts a message transform into a transform.
pub fn transform_msg(
    msg: &msgs::Transform,
    tolerance: Tolerance,
) -> Result<Transform, ValidationError> {
    let msgs::Vector3 { x, y, z } = msg.translation;
    finite("translation", &[x, y, z])?;
    let rotation = quaternion(&msg.rotation, tolerance)?;
    Ok(Transform::from_parts(&rotation, &msg.translation.into()))
}

/// Converts a transform into a pose message, first checking that it is a rigid-body transform.
pub fn to_pose(t: &Transform, tolerance: Tolerance) -> Result<msgs::Pose, ValidationError> {
    transform(t, tolerance)?;
    Ok(msgs::Pose::from(*t))
}
