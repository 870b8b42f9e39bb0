//! Adapters for the `<origin>` and `<axis>` elements of a [URDF] robot description.
//!
//! Parsing the description is somebody else's job; these types hold the already-parsed numbers.
//! With the `serde` feature they can be deserialized straight from a structured document.
//!
//! [URDF]: https://wiki.ros.org/urdf/XML/joint

use crate::rotation::Rotation;
use crate::transform::Transform;
use crate::vectors::{Axis, Position};
use uom::si::angle::radian;
use uom::si::f64::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The `<origin xyz="..." rpy="..."/>` element: a position and roll/pitch/yaw angles.
///
/// `rpy` is in radians and follows the extrinsic x-y-z convention of
/// [`Rotation::from_roll_pitch_yaw`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Origin {
    pub xyz: [f64; 3],
    pub rpy: [f64; 3],
}

/// The `<axis xyz="..."/>` element of a joint.
///
/// URDF requires the axis to be normalized, and it is used as given.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JointAxis(pub [f64; 3]);

impl Default for JointAxis {
    /// URDF's default axis is `1 0 0`.
    fn default() -> Self {
        Self([1., 0., 0.])
    }
}

impl Origin {
    /// Returns the `xyz` attribute as a position.
    #[doc(alias = "p_from_URDF_xyz")]
    #[must_use]
    pub fn position(&self) -> Position {
        Position::from(self.xyz)
    }

    /// Returns the rotation described by the `rpy` attribute.
    #[doc(alias = "R_from_URDF_rpy")]
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        let [roll, pitch, yaw] = self.rpy.map(Angle::new::<radian>);
        Rotation::from_roll_pitch_yaw(roll, pitch, yaw)
    }
}

impl JointAxis {
    /// Returns the axis as given, without renormalizing it.
    #[doc(alias = "e_from_URDF_axis")]
    #[must_use]
    pub fn axis(&self) -> Axis {
        Axis::from(self.0)
    }
}

/// Equivalent to `T_from_URDF_origin`.
impl From<&Origin> for Transform {
    fn from(origin: &Origin) -> Self {
        debug_assert!(
            origin.xyz.iter().chain(&origin.rpy).all(|v| v.is_finite()),
            "URDF origin must be finite: {origin:?}"
        );
        Transform::from_parts(&origin.rotation(), &origin.position())
    }
}

impl From<Origin> for Transform {
    fn from(origin: Origin) -> Self {
        Self::from(&origin)
    }
}

impl From<JointAxis> for nalgebra::Vector3<f64> {
    fn from(axis: JointAxis) -> Self {
        axis.axis()
    }
}
