use core::f32::consts::PI;

use crate::*;

/// Yaw, pitch and roll in radians.
///
/// Yaw = rotation around Z-axis
/// Pitch = nose up/down, rotation around Y-axis
/// Roll = tilt left/right, rotation around X-axis
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawPitchRoll
{
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Default for YawPitchRoll {
    fn default() -> Self {
        YawPitchRoll::zero()
    }
}

impl YawPitchRoll
{
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        YawPitchRoll { yaw, pitch, roll }
    }

    /// All zero angles, i.e. a device lying flat and pointing along its reference heading.
    ///
    pub const fn zero() -> Self {
        YawPitchRoll { yaw: 0.0, pitch: 0.0, roll: 0.0 }
    }

    /// Derives yaw/pitch/roll from the DMP quaternion and the gravity vector derived from that
    /// same quaternion (see `Quaternion::gravity`).
    ///
    /// Pitch and roll are taken from gravity rather than from the quaternion directly. Once the
    /// device is upside down (`gravity.z < 0`) roll is mirrored to `±PI - roll` so it stays
    /// continuous while gravity passes through the horizontal plane.
    ///
    pub fn from_quaternion(q: &Quaternion, gravity: &Vector) -> Self {
        let yaw = libm::atan2f(
            2.0 * q.x * q.y - 2.0 * q.w * q.z,
            2.0 * q.w * q.w + 2.0 * q.x * q.x - 1.0,
        );

        let pitch = libm::atan2f(
            gravity.x,
            libm::sqrtf(gravity.y * gravity.y + gravity.z * gravity.z),
        );

        let mut roll = libm::atan2f(gravity.y, gravity.z);
        if gravity.z < 0.0 {
            roll = if roll > 0.0 { PI - roll } else { -PI - roll };
        }

        YawPitchRoll { yaw, pitch, roll }
    }

    /// Same angles converted to degrees, handy for printing.
    ///
    pub fn to_degrees(&self) -> Self {
        YawPitchRoll {
            yaw: self.yaw * RAD_TO_DEG,
            pitch: self.pitch * RAD_TO_DEG,
            roll: self.roll * RAD_TO_DEG,
        }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        libm::fabsf(self.yaw - other.yaw) <= tol
            && libm::fabsf(self.pitch - other.pitch) <= tol
            && libm::fabsf(self.roll - other.roll) <= tol
    }
}

impl From<&Quaternion> for YawPitchRoll {
    fn from(q: &Quaternion) -> Self {
        YawPitchRoll::from_quaternion(q, &q.gravity())
    }
}

impl From<Quaternion> for YawPitchRoll {
    fn from(q: Quaternion) -> Self {
        YawPitchRoll::from(&q)
    }
}
