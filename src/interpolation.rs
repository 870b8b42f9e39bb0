//! Interpolation between poses, and the error vectors used to steer towards a desired pose.
//!
//! Positions are interpolated linearly with [`lerp`]. Orientations are interpolated along the
//! shortest rotational path with [`Rotation::interpolate`], whose rate of change is given by
//! [`Rotation::angular_velocity_towards`]. Both take a path parameter `s` (or its rate `sdot`)
//! where `s = 0` is the start and `s = 1` is the end; `s` may go beyond that range to
//! extrapolate.
//!
//! [`position_error`] and [`rotation_error`] produce the 3-vectors a feedback controller
//! typically multiplies by a gain to get a corrective velocity.
//!
//! None of these functions validate their inputs.

use crate::rotation::{AxisAngle, Rotation};
use crate::vectors::{cross, Position};
use crate::Vector3;

impl Rotation {
    /// Returns the rotation a fraction `s` of the way from `self` to `to`.
    ///
    /// The path is the shortest rotation taking `self` to `to`: with `(axis, angle)` the
    /// [axis-angle](Rotation::to_axis_angle) form of `selfᵀ · to`, the result is
    /// `self · Rot(axis, s · angle)`. Since that angle is at most π, the path never takes the long
    /// way round. `s = 0` gives `self` and `s = 1` gives `to`.
    ///
    /// For two rotations exactly half a turn apart both directions are equally short, and which
    /// one is taken is unspecified.
    #[doc(alias = "Rinter")]
    #[doc(alias = "slerp")]
    #[must_use]
    pub fn interpolate(&self, to: &Rotation, s: f64) -> Rotation {
        let AxisAngle { axis, angle } = self.relative_axis_angle(to);
        *self * Rotation::about_axis(&axis, s * angle)
    }

    /// Returns the angular velocity (in the fixed frame) of [`Rotation::interpolate`] when its
    /// path parameter `s` changes at rate `sdot`.
    ///
    /// The rotation axis of the path is fixed in the world, so this is simply that axis times
    /// the total angle times `sdot`: `self · axis · angle · sdot`.
    #[doc(alias = "winter")]
    #[must_use]
    pub fn angular_velocity_towards(&self, to: &Rotation, sdot: f64) -> Vector3 {
        let relative = self.relative_axis_angle(to);
        *self * relative.scaled_axis() * sdot
    }

    /// Returns the rotation halfway between `self` and `other`.
    #[doc(alias = "Rmid")]
    #[must_use]
    pub fn midpoint(&self, other: &Rotation) -> Rotation {
        self.interpolate(other, 0.5)
    }

    /// Axis-angle of the rotation from `self` to `to`, expressed in the frame of `self`.
    fn relative_axis_angle(&self, to: &Rotation) -> AxisAngle {
        (self.inverse() * *to).to_axis_angle()
    }
}

/// Returns the position a fraction `s` of the way from `p0` to `p1`.
#[doc(alias = "pinter")]
#[must_use]
pub fn lerp(p0: &Position, p1: &Position, s: f64) -> Position {
    p0 + (p1 - p0) * s
}

/// Returns the velocity of [`lerp`] when `s` changes at rate `sdot`.
#[doc(alias = "vinter")]
#[must_use]
pub fn lerp_velocity(p0: &Position, p1: &Position, sdot: f64) -> Vector3 {
    (p1 - p0) * sdot
}

/// Returns the translational error `desired - actual`.
#[doc(alias = "ep")]
#[must_use]
pub fn position_error(desired: &Position, actual: &Position) -> Vector3 {
    desired - actual
}

/// Returns the rotational error between the `desired` and `actual` orientations.
///
/// This is half the sum of the cross products of corresponding columns,
///
/// ```text
/// e = ½ · (rx × rdx + ry × rdy + rz × rdz)
/// ```
///
/// which works out to `sin(θ) · axis` for the rotation `(axis, θ)` taking `actual` onto
/// `desired` in the fixed frame. For small errors that is the axis-angle error, but it is not for
/// larger ones: the magnitude saturates at 90° and falls back to zero at 180°.
#[doc(alias = "eR")]
#[must_use]
pub fn rotation_error(desired: &Rotation, actual: &Rotation) -> Vector3 {
    let (rd, r) = (&desired.inner, &actual.inner);
    let column = |m: &nalgebra::Matrix3<f64>, i: usize| -> Vector3 { m.column(i).into_owned() };
    0.5 * (cross(&column(r, 0), &column(rd, 0))
        + cross(&column(r, 1), &column(rd, 1))
        + cross(&column(r, 2), &column(rd, 2)))
}
