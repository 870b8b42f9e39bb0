//! Adapters for the [`geometry_msgs`] value types of the ROS messaging protocol.
//!
//! The structs here mirror the message definitions field by field and carry no behavior of their
//! own. Conversions to and from this crate's types are provided through [`From`]:
//!
//! | message      | crate type                  |
//! |--------------|-----------------------------|
//! | [`Point`]      | [`Position`]                |
//! | [`Vector3`]    | [`Position`]                |
//! | [`Quaternion`] | [`crate::Quaternion`], [`Rotation`] |
//! | [`Pose`]       | [`crate::Transform`]        |
//! | [`Transform`]  | [`crate::Transform`]        |
//!
//! <div class="warning">
//!
//! Message quaternions store the scalar part `w` _last_, whereas [`crate::Quaternion`] is
//! constructed scalar-first (`Quaternion::new(w, x, y, z)`). The conversions take care of this;
//! never copy the components over positionally.
//!
//! </div>
//!
//! [`geometry_msgs`]: https://docs.ros.org/en/rolling/p/geometry_msgs/

use crate::rotation::Rotation;
use crate::transform;
use crate::vectors::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `geometry_msgs/Point`: a position in free space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `geometry_msgs/Vector3`: a direction or displacement in free space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `geometry_msgs/Quaternion`: an orientation, with the scalar part `w` stored last.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    /// The identity orientation, matching the message default.
    fn default() -> Self {
        Self {
            x: 0.,
            y: 0.,
            z: 0.,
            w: 1.,
        }
    }
}

/// `geometry_msgs/Pose`: where something is and how it is oriented.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

/// `geometry_msgs/Transform`: the transform between two frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
}

/// Equivalent to `p_from_Point`.
impl From<Point> for nalgebra::Vector3<f64> {
    fn from(Point { x, y, z }: Point) -> Self {
        Position::new(x, y, z)
    }
}

/// Equivalent to `Point_from_p`.
impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Equivalent to `p_from_Vector3`.
impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(Vector3 { x, y, z }: Vector3) -> Self {
        Position::new(x, y, z)
    }
}

/// Equivalent to `Vector3_from_p`.
impl From<Position> for Vector3 {
    fn from(p: Position) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Moves `w` from last to first. The components are copied, not normalized.
impl From<Quaternion> for crate::Quaternion {
    fn from(Quaternion { x, y, z, w }: Quaternion) -> Self {
        crate::Quaternion::new(w, x, y, z)
    }
}

/// Moves `w` from first to last. The components are copied, not normalized.
impl From<crate::Quaternion> for Quaternion {
    fn from(q: crate::Quaternion) -> Self {
        Self {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        }
    }
}

/// Equivalent to `R_from_Quaternion`.
///
/// The quaternion is normalized; it must not be zero.
impl From<Quaternion> for Rotation {
    fn from(q: Quaternion) -> Self {
        debug_assert_ne!(
            [q.x, q.y, q.z, q.w],
            [0.0, 0.0, 0.0, 0.0],
            "Quaternion must be non-zero"
        );
        Rotation::from_quaternion(&q.into())
    }
}

/// Equivalent to `Quaternion_from_R`.
impl From<Rotation> for Quaternion {
    fn from(rotation: Rotation) -> Self {
        rotation.to_quaternion().into()
    }
}

/// Equivalent to `T_from_Pose`.
impl From<Pose> for transform::Transform {
    fn from(pose: Pose) -> Self {
        transform::Transform::from_parts(&pose.orientation.into(), &pose.position.into())
    }
}

/// Equivalent to `Pose_from_T`.
impl From<transform::Transform> for Pose {
    fn from(t: transform::Transform) -> Self {
        Self {
            position: t.position().into(),
            orientation: t.rotation().into(),
        }
    }
}

/// Equivalent to `T_from_Transform`.
impl From<Transform> for transform::Transform {
    fn from(msg: Transform) -> Self {
        transform::Transform::from_parts(&msg.rotation.into(), &msg.translation.into())
    }
}

/// Equivalent to `Transform_from_T`.
impl From<transform::Transform> for Transform {
    fn from(t: transform::Transform) -> Self {
        Self {
            translation: t.position().into(),
            rotation: t.rotation().into(),
        }
    }
}
