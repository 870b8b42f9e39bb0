//! Rotation matrices and conversions between the common ways of writing down an orientation.
//!
//! The main type is [`Rotation`], a 3x3 rotation matrix. It can be constructed from, and
//! converted back into, [unit quaternions](Quaternion), [axis-angle pairs](AxisAngle), and
//! roll/pitch/yaw angles. Conversions in both directions agree up to floating point error and the
//! usual ambiguities: a quaternion and its negation describe the same rotation, and the axis of a
//! zero-angle rotation is undefined.
//!
//! Nothing in this module checks that its inputs are well-formed. A matrix that is not
//! orthogonal, or a zero quaternion, yields numerically meaningless output (typically NaN) rather
//! than an error. See [`crate::validate`] for checked constructors.

use crate::vectors::{skew, Axis};
use crate::{Matrix3, Vector3};
use std::fmt::{self, Display, Formatter};
use std::ops::Mul;
use uom::si::angle::radian;
use uom::si::f64::Angle;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quaternion, constructed with the scalar part first: `Quaternion::new(w, x, y, z)`.
///
/// <div class="warning">
///
/// Only the constructor is scalar first. The storage order is `[x, y, z, w]`, so indexing
/// (`q[0]`) and `q.coords` put the scalar part _last_. Use `q.w` for the scalar part and
/// `q.imag()` for the vector part.
///
/// </div>
///
/// Only unit quaternions describe rotations. [`Rotation::from_quaternion`] normalizes its input,
/// so anything non-zero is accepted there.
pub type Quaternion = nalgebra::Quaternion<f64>;

/// A rotation in 3D space represented as a 3x3 [rotation matrix].
///
/// The matrix is expected to be orthogonal with determinant +1. This is _not_ enforced: the
/// constructors in this module produce valid rotations given valid inputs, and
/// [`Rotation::from_matrix_unchecked`] takes the caller's word for it.
///
/// Rotations compose with `*` the way matrices do, so `a * b` first applies `b` and then `a`
/// when multiplied onto a vector.
///
/// [rotation matrix]: https://en.wikipedia.org/wiki/Rotation_matrix
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
// no need for the "inner": indirection
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rotation {
    pub(crate) inner: Matrix3,
}

/// A rotation of `angle` about the unit `axis`, following the right-hand rule.
///
/// When produced by [`Rotation::to_axis_angle`], `angle` lies in [0, π] and `axis` is the zero
/// vector exactly when `angle` is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisAngle {
    pub axis: Axis,
    pub angle: Angle,
}

impl AxisAngle {
    /// Pairs up an axis and an angle. The axis should have unit length.
    #[must_use]
    pub fn new(axis: Axis, angle: impl Into<Angle>) -> Self {
        Self {
            axis,
            angle: angle.into(),
        }
    }

    /// Returns `axis * angle` with the angle in radians (sometimes called the rotation vector).
    #[doc(alias = "rotation_vector")]
    #[must_use]
    pub fn scaled_axis(&self) -> Vector3 {
        self.axis * self.angle.get::<radian>()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation matrix: {}", self.inner)
    }
}

impl Rotation {
    /// The rotation that does nothing.
    #[doc(alias = "Reye")]
    #[must_use]
    pub fn identity() -> Self {
        Self {
            inner: Matrix3::identity(),
        }
    }

    /// Wraps a 3x3 matrix without checking that it is a rotation.
    ///
    /// The matrix must be orthogonal with determinant +1 for the rest of this crate to produce
    /// meaningful results.
    #[must_use]
    pub fn from_matrix_unchecked(matrix: nalgebra::Matrix3<f64>) -> Self {
        Self { inner: matrix }
    }

    /// Returns the underlying 3x3 matrix.
    #[must_use]
    pub fn matrix(&self) -> nalgebra::Matrix3<f64> {
        self.inner
    }

    /// Rotation by `alpha` about the x-axis.
    #[doc(alias = "Rotx")]
    #[must_use]
    pub fn about_x(alpha: impl Into<Angle>) -> Self {
        let (s, c) = alpha.into().get::<radian>().sin_cos();
        #[rustfmt::skip]
        let inner = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0,   c,  -s,
            0.0,   s,   c,
        );
        Self { inner }
    }

    /// Rotation by `alpha` about the y-axis.
    #[doc(alias = "Roty")]
    #[must_use]
    pub fn about_y(alpha: impl Into<Angle>) -> Self {
        let (s, c) = alpha.into().get::<radian>().sin_cos();
        #[rustfmt::skip]
        let inner = Matrix3::new(
              c, 0.0,   s,
            0.0, 1.0, 0.0,
             -s, 0.0,   c,
        );
        Self { inner }
    }

    /// Rotation by `alpha` about the z-axis.
    #[doc(alias = "Rotz")]
    #[must_use]
    pub fn about_z(alpha: impl Into<Angle>) -> Self {
        let (s, c) = alpha.into().get::<radian>().sin_cos();
        #[rustfmt::skip]
        let inner = Matrix3::new(
              c,  -s, 0.0,
              s,   c, 0.0,
            0.0, 0.0, 1.0,
        );
        Self { inner }
    }

    /// Rotation by `alpha` about the unit vector `axis`, computed with [Rodrigues' formula].
    ///
    /// The axis must have unit length; other axes produce a matrix that is not a rotation.
    ///
    /// [Rodrigues' formula]: https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
    #[doc(alias = "Rote")]
    #[must_use]
    pub fn about_axis(axis: &Axis, alpha: impl Into<Angle>) -> Self {
        let (s, c) = alpha.into().get::<radian>().sin_cos();
        let k = skew(axis);
        Self {
            inner: Matrix3::identity() + s * k + (1.0 - c) * k * k,
        }
    }

    /// Equivalent to [`Rotation::about_axis`] for the given pair.
    #[doc(alias = "matrix_from_axis_angle")]
    #[must_use]
    pub fn from_axis_angle(axis_angle: &AxisAngle) -> Self {
        Self::about_axis(&axis_angle.axis, axis_angle.angle)
    }

    /// Constructs a rotation from roll, pitch, and yaw angles.
    ///
    /// These are _extrinsic_ rotations in the order roll (about x), then pitch (about y), then
    /// yaw (about z), all about the fixed axes. This is the convention used by the `rpy`
    /// attribute of URDF. The same rotation is obtained with intrinsic rotations in the reverse
    /// order, which is how it is computed:
    ///
    /// ```text
    /// R = Rz(yaw) · Ry(pitch) · Rx(roll)
    /// ```
    ///
    /// Swapping the order silently produces a different rotation, so mind the argument order.
    #[doc(alias = "R_from_RPY")]
    #[doc(alias = "matrix_from_euler")]
    #[must_use]
    pub fn from_roll_pitch_yaw(
        roll: impl Into<Angle>,
        pitch: impl Into<Angle>,
        yaw: impl Into<Angle>,
    ) -> Self {
        Self::about_z(yaw) * Self::about_y(pitch) * Self::about_x(roll)
    }

    /// Constructs the rotation described by the quaternion `q`.
    ///
    /// `q` need not be unit length; it is normalized as part of the conversion:
    ///
    /// ```text
    /// R = (2 / |q|²) · (v·vᵀ + w²·I + w·[v]×) − I
    /// ```
    ///
    /// where `w` is the scalar part and `v` the vector part. A zero quaternion does not describe a
    /// rotation, and produces a matrix full of NaN.
    #[doc(alias = "R_from_quat")]
    #[doc(alias = "matrix_from_quaternion")]
    #[must_use]
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let norm2 = q.norm_squared();
        let w = q.w;
        let v = q.imag();
        let eye = Matrix3::identity();
        Self {
            inner: (2.0 / norm2) * (v * v.transpose() + w * w * eye + w * skew(&v)) - eye,
        }
    }

    /// Returns a unit quaternion describing this rotation.
    ///
    /// Of the four quaternion components, the one with the largest magnitude is recovered first
    /// (from the diagonal) and the others are derived from it using the off-diagonal entries. That
    /// way we never divide by a value close to zero, which the textbook trace-based formula does
    /// for rotations near 180°. If two candidates are equally large, the earlier one (in
    /// `w, x, y, z` order) is used.
    ///
    /// Either `q` or `-q` may be returned; the sign is not normalized.
    #[doc(alias = "quat_from_R")]
    #[doc(alias = "quaternion_from_matrix")]
    #[must_use]
    pub fn to_quaternion(&self) -> Quaternion {
        let r = &self.inner;
        let (r00, r11, r22) = (r[(0, 0)], r[(1, 1)], r[(2, 2)]);
        let candidates = [
            1.0 + r00 + r11 + r22,
            1.0 + r00 - r11 - r22,
            1.0 - r00 + r11 - r22,
            1.0 - r00 - r11 + r22,
        ];
        // strict comparison so that the first maximum wins
        let i = (1..4).fold(0, |best, k| {
            if candidates[k] > candidates[best] {
                k
            } else {
                best
            }
        });
        let a = candidates[i];
        let c = 0.5 / a.sqrt();

        let [w, x, y, z] = match i {
            0 => [
                a,
                r[(2, 1)] - r[(1, 2)],
                r[(0, 2)] - r[(2, 0)],
                r[(1, 0)] - r[(0, 1)],
            ],
            1 => [
                r[(2, 1)] - r[(1, 2)],
                a,
                r[(1, 0)] + r[(0, 1)],
                r[(0, 2)] + r[(2, 0)],
            ],
            2 => [
                r[(0, 2)] - r[(2, 0)],
                r[(1, 0)] + r[(0, 1)],
                a,
                r[(2, 1)] + r[(1, 2)],
            ],
            _ => [
                r[(1, 0)] - r[(0, 1)],
                r[(0, 2)] + r[(2, 0)],
                r[(2, 1)] + r[(1, 2)],
                a,
            ],
        };
        Quaternion::new(c * w, c * x, c * y, c * z)
    }

    /// Returns the axis and angle of this rotation.
    ///
    /// The conversion goes through [`Rotation::to_quaternion`] rather than reading the angle off
    /// the trace of the matrix, since the latter loses precision near 0° and 180°. The returned
    /// angle is always in [0, π]; rotations by more than half a turn come back as the equivalent
    /// rotation about the opposite axis.
    ///
    /// For the identity rotation the axis is arbitrary, and is returned as the zero vector.
    #[doc(alias = "axisangle_from_R")]
    #[must_use]
    pub fn to_axis_angle(&self) -> AxisAngle {
        let q = self.to_quaternion();
        // q and -q are the same rotation; w >= 0 keeps the angle in [0, π]
        let q = if q.w < 0.0 { -q } else { q };
        let v = q.imag();
        let n = v.norm();
        let angle = 2.0 * n.atan2(q.w);
        let axis = if n == 0.0 { Axis::zeros() } else { v / n };
        AxisAngle {
            axis,
            angle: Angle::new::<radian>(angle),
        }
    }

    /// Returns the inverse rotation, which for a rotation matrix is its transpose.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            inner: self.inner.transpose(),
        }
    }
}

impl Mul<Rotation> for Rotation {
    type Output = Rotation;

    fn mul(self, rhs: Rotation) -> Self::Output {
        Rotation {
            inner: self.inner * rhs.inner,
        }
    }
}

impl Mul<nalgebra::Vector3<f64>> for Rotation {
    type Output = nalgebra::Vector3<f64>;

    fn mul(self, rhs: nalgebra::Vector3<f64>) -> Self::Output {
        self.inner * rhs
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Rotation {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Matrix3::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Rotation {
    fn default_max_relative() -> Self::Epsilon {
        Matrix3::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.inner.relative_eq(&other.inner, epsilon, max_relative)
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for AxisAngle {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Vector3::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.axis.abs_diff_eq(&other.axis, epsilon)
            && self
                .angle
                .get::<radian>()
                .abs_diff_eq(&other.angle.get::<radian>(), epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for AxisAngle {
    fn default_max_relative() -> Self::Epsilon {
        Vector3::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.axis.relative_eq(&other.axis, epsilon, max_relative)
            && self.angle.get::<radian>().relative_eq(
                &other.angle.get::<radian>(),
                epsilon,
                max_relative,
            )
    }
}

#[cfg(test)]
mod tests {
    use crate::rotation::{AxisAngle, Quaternion, Rotation};
    use crate::vectors::{unit, x_axis, xyz, y_axis, z_axis, Axis};
    use crate::Matrix3;
    use approx::{assert_abs_diff_eq, assert_relative_eq, AbsDiffEq};
    use quickcheck::{quickcheck, Arbitrary};
    use rstest::rstest;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};
    use uom::si::f64::Angle;
    use uom::si::angle::{degree, radian};

    fn d(degrees: f64) -> Angle {
        Angle::new::<degree>(degrees)
    }
    fn r(radians: f64) -> Angle {
        Angle::new::<radian>(radians)
    }

    // rotations that sit right on the branch boundaries of the quaternion extraction
    fn half_turns() -> [Rotation; 5] {
        [
            Rotation::identity(),
            Rotation::about_x(r(PI)),
            Rotation::about_y(r(PI)),
            Rotation::about_z(r(PI)),
            Rotation::about_axis(&unit(1., 1., 0.), r(PI)),
        ]
    }

    impl Arbitrary for Rotation {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            if u8::arbitrary(g) % 8 == 0 {
                return *g.choose(&half_turns()).expect("non-empty");
            }
            // quickcheck will give us awkward f64 values -- we ignore those
            let mut component = || loop {
                match f64::arbitrary(g) {
                    0. => break 0.,
                    f if f.is_normal() => break f.rem_euclid(2.) - 1.,
                    _ => {}
                }
            };
            let q = Quaternion::new(component(), component(), component(), component());
            if q.norm_squared() < 1e-6 {
                Rotation::identity()
            } else {
                Rotation::from_quaternion(&q)
            }
        }
    }

    // quickcheck will give us awkward f64 values -- map those into [-1, 1) and normalize
    fn unit_quaternion(w: f64, x: f64, y: f64, z: f64) -> Option<Quaternion> {
        let bounded = |v: f64| if v.is_finite() { v.rem_euclid(2.) - 1. } else { 0. };
        let q = Quaternion::new(bounded(w), bounded(x), bounded(y), bounded(z));
        (q.norm_squared() > 1e-6).then(|| q.normalize())
    }

    #[test]
    fn quaternion_constructor_is_scalar_first_but_storage_is_scalar_last() {
        let q = Quaternion::new(1., 2., 3., 4.);
        assert_eq!(q.w, 1.);
        assert_eq!(q.imag(), xyz(2., 3., 4.));
        assert_eq!([q[0], q[1], q[2], q[3]], [2., 3., 4., 1.]);
        assert_eq!(q.coords[3], 1.);
    }

    #[rstest]
    #[case(1., 0., 0., 0.)]
    #[case(0., 1., 0., 0.)]
    #[case(0., 0., 1., 0.)]
    #[case(0., 0., 0., 1.)]
    #[case(0.5, -0.5, 0.5, -0.5)]
    #[case(-0.1, 0.7, 0.3, -0.2)]
    fn quaternion_survives_matrix_roundtrip(
        #[case] w: f64,
        #[case] x: f64,
        #[case] y: f64,
        #[case] z: f64,
    ) {
        let q = Quaternion::new(w, x, y, z).normalize();
        let back = Rotation::from_quaternion(&q).to_quaternion();
        assert!(
            back.abs_diff_eq(&q, 1e-12) || back.abs_diff_eq(&-q, 1e-12),
            "{back} is neither {q} nor its negation"
        );
    }

    fn is_rotation(rot: &Rotation) -> bool {
        let m = rot.matrix();
        (m * m.transpose()).abs_diff_eq(&Matrix3::identity(), 1e-9)
            && m.determinant().abs_diff_eq(&1.0, 1e-9)
    }

    #[rstest]
    // basis vector -> expected image
    #[case(Rotation::about_x(d(90.)), y_axis(), z_axis())]
    #[case(Rotation::about_x(d(90.)), z_axis(), -y_axis())]
    #[case(Rotation::about_x(d(90.)), x_axis(), x_axis())]
    #[case(Rotation::about_y(d(90.)), z_axis(), x_axis())]
    #[case(Rotation::about_y(d(90.)), x_axis(), -z_axis())]
    #[case(Rotation::about_z(d(90.)), x_axis(), y_axis())]
    #[case(Rotation::about_z(d(90.)), y_axis(), -x_axis())]
    #[case(Rotation::about_z(d(180.)), x_axis(), -x_axis())]
    #[case(Rotation::about_z(d(-90.)), x_axis(), -y_axis())]
    #[case(Rotation::about_axis(&z_axis(), d(90.)), x_axis(), y_axis())]
    #[case(Rotation::about_axis(&unit(1., 1., 1.), d(120.)), x_axis(), y_axis())]
    #[case(Rotation::about_axis(&unit(1., 1., 1.), d(120.)), y_axis(), z_axis())]
    fn axis_rotations_follow_right_hand_rule(
        #[case] rot: Rotation,
        #[case] input: Axis,
        #[case] expected: Axis,
    ) {
        assert_abs_diff_eq!(rot * input, expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(x_axis())]
    #[case(y_axis())]
    #[case(z_axis())]
    fn about_axis_matches_about_basis(#[case] axis: Axis) {
        let angle = d(37.);
        let expected = if axis == x_axis() {
            Rotation::about_x(angle)
        } else if axis == y_axis() {
            Rotation::about_y(angle)
        } else {
            Rotation::about_z(angle)
        };
        assert_relative_eq!(Rotation::about_axis(&axis, angle), expected, epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_about_x_to_quaternion() {
        let q = Rotation::about_x(r(FRAC_PI_2)).to_quaternion();
        let expected = Quaternion::new(FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0., 0.);
        assert!(
            q.abs_diff_eq(&expected, 1e-12) || q.abs_diff_eq(&-expected, 1e-12),
            "{q} is neither {expected} nor its negation"
        );
    }

    #[test]
    fn quaternion_extraction_prefers_first_maximum() {
        // a -120° turn about (1, 1, 1) where all four candidates are equal. the w-first branch
        // yields a positive scalar part, the others would yield its negation.
        #[rustfmt::skip]
        let m = Matrix3::new(
            0., 1., 0.,
            0., 0., 1.,
            1., 0., 0.,
        );
        let q = Rotation::from_matrix_unchecked(m).to_quaternion();
        assert_eq!(q, Quaternion::new(0.5, -0.5, -0.5, -0.5));
    }

    #[test]
    fn half_turn_about_x_uses_x_branch() {
        #[rustfmt::skip]
        let m = Matrix3::new(
            1.,  0.,  0.,
            0., -1.,  0.,
            0.,  0., -1.,
        );
        let q = Rotation::from_matrix_unchecked(m).to_quaternion();
        assert_eq!(q, Quaternion::new(0., 1., 0., 0.));
    }

    #[rstest]
    #[case(Quaternion::new(1., 0., 0., 0.), Rotation::identity())]
    #[case(Quaternion::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0., 0.), Rotation::about_x(d(90.)))]
    #[case(Quaternion::new(FRAC_1_SQRT_2, 0., FRAC_1_SQRT_2, 0.), Rotation::about_y(d(90.)))]
    #[case(Quaternion::new(FRAC_1_SQRT_2, 0., 0., FRAC_1_SQRT_2), Rotation::about_z(d(90.)))]
    #[case(Quaternion::new(0., 0., 0., 1.), Rotation::about_z(d(180.)))]
    #[case(Quaternion::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0., 0.), Rotation::about_x(d(-90.)))]
    fn quaternion_to_matrix(#[case] q: Quaternion, #[case] expected: Rotation) {
        assert_relative_eq!(Rotation::from_quaternion(&q), expected, epsilon = 1e-12);
    }

    #[test]
    fn quaternion_is_normalized() {
        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_relative_eq!(
            Rotation::from_quaternion(&(q * 5.)),
            Rotation::from_quaternion(&q),
            epsilon = 1e-12
        );
    }

    #[test]
    fn cyclic_quaternion_permutes_axes() {
        let rot = Rotation::from_quaternion(&Quaternion::new(0.5, 0.5, 0.5, 0.5));
        assert_relative_eq!(rot * x_axis(), y_axis(), epsilon = 1e-12);
        assert_relative_eq!(rot * y_axis(), z_axis(), epsilon = 1e-12);
        assert_relative_eq!(rot * z_axis(), x_axis(), epsilon = 1e-12);
    }

    #[test]
    fn zero_quaternion_is_nan() {
        let rot = Rotation::from_quaternion(&Quaternion::new(0., 0., 0., 0.));
        assert!(rot.matrix().iter().all(|v| v.is_nan()), "{rot}");
    }

    #[test]
    fn yaw_only_is_rotation_about_z() {
        assert_eq!(
            Rotation::from_roll_pitch_yaw(r(0.), r(0.), r(FRAC_PI_2)),
            Rotation::about_z(r(FRAC_PI_2))
        );
    }

    #[test]
    fn roll_pitch_yaw_is_extrinsic_xyz() {
        let (roll, pitch, yaw) = (d(10.), d(20.), d(30.));
        let rpy = Rotation::from_roll_pitch_yaw(roll, pitch, yaw);
        assert_relative_eq!(
            rpy,
            Rotation::about_z(yaw) * Rotation::about_y(pitch) * Rotation::about_x(roll),
            epsilon = 1e-15
        );
        // the reverse composition is a different rotation
        let reversed = Rotation::about_x(roll) * Rotation::about_y(pitch) * Rotation::about_z(yaw);
        assert!(!rpy.abs_diff_eq(&reversed, 1e-3));
    }

    #[rstest]
    #[case(d(90.), d(0.), d(0.), x_axis(), x_axis())]
    #[case(d(90.), d(0.), d(0.), y_axis(), z_axis())]
    #[case(d(0.), d(90.), d(0.), z_axis(), x_axis())]
    #[case(d(0.), d(0.), d(90.), x_axis(), y_axis())]
    // roll first about fixed x, then yaw about fixed z: y -> z -> z
    #[case(d(90.), d(0.), d(90.), y_axis(), z_axis())]
    // roll first about fixed x, then yaw about fixed z: z -> -y -> x
    #[case(d(90.), d(0.), d(90.), z_axis(), x_axis())]
    fn roll_pitch_yaw_maps_basis(
        #[case] roll: Angle,
        #[case] pitch: Angle,
        #[case] yaw: Angle,
        #[case] input: Axis,
        #[case] expected: Axis,
    ) {
        let rot = Rotation::from_roll_pitch_yaw(roll, pitch, yaw);
        assert_abs_diff_eq!(rot * input, expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(Rotation::about_x(d(30.)), x_axis(), d(30.))]
    #[case(Rotation::about_x(d(-30.)), -x_axis(), d(30.))]
    #[case(Rotation::about_y(d(179.)), y_axis(), d(179.))]
    #[case(Rotation::about_y(d(181.)), -y_axis(), d(179.))]
    #[case(Rotation::about_z(d(90.)), z_axis(), d(90.))]
    #[case(Rotation::about_axis(&unit(1., 2., 3.), d(45.)), unit(1., 2., 3.), d(45.))]
    fn to_axis_angle_known(#[case] rot: Rotation, #[case] axis: Axis, #[case] angle: Angle) {
        assert_relative_eq!(rot.to_axis_angle(), AxisAngle::new(axis, angle), epsilon = 1e-9);
    }

    #[test]
    fn identity_axis_angle_has_zero_axis() {
        let aa = Rotation::identity().to_axis_angle();
        assert_eq!(aa.axis, Axis::zeros());
        assert_eq!(aa.angle.get::<radian>(), 0.);
    }

    #[test]
    fn scaled_axis_is_in_radians() {
        let aa = AxisAngle::new(z_axis(), d(180.));
        assert_relative_eq!(aa.scaled_axis(), xyz(0., 0., PI), epsilon = 1e-12);
    }

    #[test]
    fn inverse_undoes_rotation() {
        let rot = Rotation::from_roll_pitch_yaw(d(10.), d(-40.), d(75.));
        assert_relative_eq!(rot * rot.inverse(), Rotation::identity(), epsilon = 1e-12);
        assert_relative_eq!(rot.inverse() * (rot * x_axis()), x_axis(), epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert!(Rotation::identity()
            .to_string()
            .starts_with("Rotation matrix: "));
    }

    quickcheck! {
        fn matrix_quaternion_roundtrip(rot: Rotation) -> () {
            let q = rot.to_quaternion();
            assert_relative_eq!(Rotation::from_quaternion(&q), rot, epsilon = 1e-9);
            assert_relative_eq!(Rotation::from_quaternion(&-q), rot, epsilon = 1e-9);
        }

        fn quaternion_matrix_roundtrip(w: f64, x: f64, y: f64, z: f64) -> () {
            let Some(q) = unit_quaternion(w, x, y, z) else {
                return;
            };
            let back = Rotation::from_quaternion(&q).to_quaternion();
            assert!(
                back.abs_diff_eq(&q, 1e-9) || back.abs_diff_eq(&-q, 1e-9),
                "{back} is neither {q} nor its negation"
            );
        }

        fn from_quaternion_is_rotation(rot: Rotation) -> () {
            assert!(is_rotation(&rot), "{rot}");
        }

        fn from_axis_angle_is_rotation(rot: Rotation, angle: f64) -> () {
            let angle = if angle.is_finite() { angle % 10. } else { 0. };
            let axis = rot * x_axis();
            let rotated = Rotation::about_axis(&axis, r(angle));
            assert!(is_rotation(&rotated), "{rotated}");
        }

        fn axis_angle_range(rot: Rotation) -> () {
            let angle = rot.to_axis_angle().angle.get::<radian>();
            assert!((0. ..=PI).contains(&angle), "{angle} outside [0, π]");
        }

        fn axis_angle_roundtrip(rot: Rotation) -> () {
            let aa = rot.to_axis_angle();
            assert_relative_eq!(Rotation::from_axis_angle(&aa), rot, epsilon = 1e-9);
        }
    }
}
