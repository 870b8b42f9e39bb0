//! Construction of 3D position and axis vectors, and the cross-product helpers everything else
//! builds on.
//!
//! Positions and axes are both [`nalgebra::Vector3<f64>`]. The [`Position`] and [`Axis`] aliases
//! only exist to make signatures say what they expect: an [`Axis`] is assumed to have unit length,
//! a [`Position`] can be anything finite.

use crate::Matrix3;

/// A point (or displacement) in 3D space.
pub type Position = nalgebra::Vector3<f64>;

/// A direction in 3D space, assumed to have unit length.
///
/// Note that the axis of an [`AxisAngle`](crate::AxisAngle) with zero angle is the zero vector,
/// so code receiving an `Axis` from there cannot blindly assume unit length.
pub type Axis = nalgebra::Vector3<f64>;

/// Returns the position at the origin.
#[doc(alias = "pzero")]
#[must_use]
pub fn zero() -> Position {
    Position::zeros()
}

/// Returns the position with the given cartesian components.
#[doc(alias = "pxyz")]
#[must_use]
pub fn xyz(x: f64, y: f64, z: f64) -> Position {
    Position::new(x, y, z)
}

/// Returns the position `distance` along `axis` from the origin.
#[doc(alias = "pe")]
#[must_use]
pub fn along(axis: &Axis, distance: f64) -> Position {
    axis * distance
}

/// Returns the unit x-axis.
#[doc(alias = "ex")]
#[must_use]
pub fn x_axis() -> Axis {
    unit(1., 0., 0.)
}

/// Returns the unit y-axis.
#[doc(alias = "ey")]
#[must_use]
pub fn y_axis() -> Axis {
    unit(0., 1., 0.)
}

/// Returns the unit z-axis.
#[doc(alias = "ez")]
#[must_use]
pub fn z_axis() -> Axis {
    unit(0., 0., 1.)
}

/// Returns the unit axis pointing in the direction of `(x, y, z)`.
///
/// The components are normalized, so `unit(0., 3., 4.)` is `(0., 0.6, 0.8)`. The zero vector has
/// no direction and produces NaN components.
#[doc(alias = "exyz")]
#[must_use]
pub fn unit(x: f64, y: f64, z: f64) -> Axis {
    Axis::new(x, y, z) / (x * x + y * y + z * z).sqrt()
}

/// Computes the cross product `a × b` by way of [`skew`].
#[must_use]
pub fn cross(a: &nalgebra::Vector3<f64>, b: &nalgebra::Vector3<f64>) -> nalgebra::Vector3<f64> {
    skew(a) * b
}

/// Returns the skew-symmetric matrix `[e]×` such that `[e]× * v == e × v` for every `v`.
#[doc(alias = "crossmat")]
#[doc(alias = "hat")]
#[must_use]
pub fn skew(e: &nalgebra::Vector3<f64>) -> Matrix3 {
    #[rustfmt::skip]
    let m = Matrix3::new(
         0.0, -e.z,  e.y,
         e.z,  0.0, -e.x,
        -e.y,  e.x,  0.0,
    );
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quickcheck::quickcheck;
    use rstest::rstest;

    fn finite(v: f64) -> f64 {
        // keep the magnitudes sane so products stay within f64 precision
        if v.is_finite() {
            v.rem_euclid(200.) - 100.
        } else {
            0.
        }
    }

    #[rstest]
    #[case(x_axis(), y_axis(), z_axis())]
    #[case(y_axis(), z_axis(), x_axis())]
    #[case(z_axis(), x_axis(), y_axis())]
    #[case(y_axis(), x_axis(), -z_axis())]
    fn cross_of_basis_vectors_follows_right_hand_rule(
        #[case] a: Axis,
        #[case] b: Axis,
        #[case] expected: Axis,
    ) {
        assert_eq!(cross(&a, &b), expected);
    }

    #[test]
    fn unit_normalizes() {
        assert_relative_eq!(unit(0., 3., 4.), xyz(0., 0.6, 0.8));
        assert_relative_eq!(unit(2., 0., 0.), x_axis());
    }

    #[test]
    fn unit_of_zero_is_nan() {
        assert!(unit(0., 0., 0.).iter().all(|c| c.is_nan()));
    }

    #[test]
    fn along_scales_axis() {
        assert_eq!(along(&z_axis(), 2.5), xyz(0., 0., 2.5));
        assert_eq!(along(&x_axis(), 0.), zero());
    }

    #[test]
    fn skew_is_antisymmetric() {
        let m = skew(&xyz(1., -2., 3.));
        assert_eq!(m.transpose(), -m);
        assert_eq!(m.diagonal(), zero());
    }

    quickcheck! {
        fn skew_agrees_with_cross(ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> () {
            let a = xyz(finite(ax), finite(ay), finite(az));
            let b = xyz(finite(bx), finite(by), finite(bz));
            assert_relative_eq!(cross(&a, &b), a.cross(&b), epsilon = 1e-9);
        }
    }
}
