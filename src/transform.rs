//! Homogeneous 4x4 transforms built from a rotation and a position.

use crate::rotation::Rotation;
use crate::vectors::Position;
use crate::{Matrix3, Matrix4};
use std::fmt::{self, Display, Formatter};
use std::ops::Mul;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid-body transform represented as a 4x4 [homogeneous matrix]:
///
/// ```text
/// ⎡ R  p ⎤
/// ⎣ 0  1 ⎦
/// ```
///
/// where `R` is a 3x3 [`Rotation`] and `p` a [`Position`]. Read as a pose, `p` is where the body
/// is and `R` is how it is turned, both expressed in the reference frame.
///
/// Like [`Rotation`], transforms chain with `*`: `a * b` applies `b` first. Multiplying a
/// transform with a [`Position`] moves the point.
///
/// [homogeneous matrix]: https://en.wikipedia.org/wiki/Transformation_matrix#Affine_transformations
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
// no need for the "inner": indirection
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Transform {
    inner: Matrix4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Transform matrix: {}", self.inner)
    }
}

impl Transform {
    /// The transform with no rotation and no translation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            inner: Matrix4::identity(),
        }
    }

    /// Assembles the transform with rotation `rotation` and position `position`.
    #[doc(alias = "T_from_Rp")]
    #[must_use]
    pub fn from_parts(rotation: &Rotation, position: &Position) -> Self {
        let mut inner = Matrix4::identity();
        inner.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation.inner);
        inner.fixed_view_mut::<3, 1>(0, 3).copy_from(position);
        Self { inner }
    }

    /// Wraps a 4x4 matrix without checking that it is a rigid-body transform.
    ///
    /// The top-left 3x3 block should be a rotation and the bottom row `[0, 0, 0, 1]`.
    #[must_use]
    pub fn from_matrix_unchecked(matrix: nalgebra::Matrix4<f64>) -> Self {
        Self { inner: matrix }
    }

    /// Returns the underlying 4x4 matrix.
    #[must_use]
    pub fn matrix(&self) -> nalgebra::Matrix4<f64> {
        self.inner
    }

    /// Returns the top-left 3x3 block.
    ///
    /// The bottom row is not looked at, so this happily extracts from matrices that are not
    /// rigid-body transforms.
    #[doc(alias = "R_from_T")]
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        let block: Matrix3 = self.inner.fixed_view::<3, 3>(0, 0).into_owned();
        Rotation::from_matrix_unchecked(block)
    }

    /// Returns the top-right 3x1 column.
    #[doc(alias = "p_from_T")]
    #[must_use]
    pub fn position(&self) -> Position {
        self.inner.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Returns the transform that undoes this one, ie `[Rᵀ, -Rᵀp]`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation().inverse();
        Self::from_parts(&rotation, &-(rotation * self.position()))
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        Transform {
            inner: self.inner * rhs.inner,
        }
    }
}

impl Mul<Position> for Transform {
    type Output = Position;

    fn mul(self, rhs: Position) -> Self::Output {
        self.rotation() * rhs + self.position()
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Transform {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Matrix4::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Transform {
    fn default_max_relative() -> Self::Epsilon {
        Matrix4::default_max_relative()
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
