//! This library converts rigid-body poses and orientations between the encodings that show up in
//! robot kinematics pipelines: position vectors, unit axes, rotation matrices, unit quaternions,
//! axis-angle pairs, roll/pitch/yaw angles, and 4x4 homogeneous transforms.
//!
//! The central types are [`Rotation`] (a 3x3 rotation matrix) and [`Transform`] (a 4x4
//! homogeneous transform). Positions and axes are plain [`nalgebra::Vector3`]s, constructed
//! through the helpers in [`vectors`]. Quaternions are [`nalgebra::Quaternion`]s, which are
//! _constructed_ scalar first with `Quaternion::new(w, x, y, z)` but _stored_ as `[x, y, z, w]`:
//! `q[0]` and `q.coords[0]` are `x`, not `w`. Read the parts through `q.w` and `q.imag()`.
//!
//! On top of the conversions, the [`interpolation`] module provides shortest-arc interpolation
//! between two orientations, the angular velocity along that path, and the position and
//! orientation error vectors used by feedback controllers.
//!
//! Two boundary modules bridge to the outside world:
//!
//! - [`urdf`] for the `<origin>` and `<axis>` elements of a robot description, and
//! - [`msgs`] for the `Point`, `Vector3`, `Quaternion`, `Pose`, and `Transform` geometry messages.
//!
//! None of the core math validates its inputs. Feeding in a matrix that isn't orthogonal or a
//! zero quaternion produces garbage (usually NaN) rather than an error, since these functions are
//! meant to be called from inside control loops. If you want checks at the boundary, go through
//! the checked conversions in [`validate`] instead of the plain `From` ones.
//!
//! # Examples
//!
//! Interpolating halfway between two orientations and asking how fast we're turning:
//!
//! ```
//! use approx::assert_relative_eq;
//! use posekit::{vectors, Rotation};
//! use uom::si::{angle::degree, f64::Angle};
//!
//! let start = Rotation::identity();
//! let end = Rotation::about_z(Angle::new::<degree>(90.));
//!
//! let halfway = start.interpolate(&end, 0.5);
//! assert_relative_eq!(halfway, Rotation::about_z(Angle::new::<degree>(45.)), epsilon = 1e-12);
//!
//! // traversing the whole path in two seconds means s moves at 0.5/s
//! let omega = start.angular_velocity_towards(&end, 0.5);
//! assert_relative_eq!(
//!     omega,
//!     vectors::z_axis() * std::f64::consts::FRAC_PI_4,
//!     epsilon = 1e-12
//! );
//! ```
//!
//! Turning a URDF joint origin into a transform and publishing it as a pose message:
//!
//! ```
//! use posekit::{msgs, urdf, Transform};
//!
//! let origin = urdf::Origin {
//!     xyz: [0.1, 0.0, 0.3],
//!     rpy: [0.0, 0.0, std::f64::consts::FRAC_PI_2],
//! };
//! let joint = Transform::from(&origin);
//! let pose = msgs::Pose::from(joint);
//!
//! assert_eq!(pose.position, msgs::Point { x: 0.1, y: 0.0, z: 0.3 });
//! ```

pub mod interpolation;
pub mod msgs;
pub mod rotation;
pub mod transform;
pub mod urdf;
pub mod validate;
pub mod vectors;

pub(crate) type Vector3 = nalgebra::Vector3<f64>;
pub(crate) type Matrix3 = nalgebra::Matrix3<f64>;
pub(crate) type Matrix4 = nalgebra::Matrix4<f64>;

pub use rotation::{AxisAngle, Quaternion, Rotation};
pub use transform::Transform;
pub use vectors::{Axis, Position};
