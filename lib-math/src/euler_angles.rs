use crate::*;

/// Orientation as the three Euler rotations (psi, theta, phi) the way the DMP example code
/// derives them from its quaternion, all in radians. Unlike `YawPitchRoll` these are derived from
/// the quaternion only, without consulting the gravity vector.
///
/// Note that Euler angles suffer from gimbal lock, they are mostly useful for displaying
/// orientation to humans.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles
{
    pub psi: f32,
    pub theta: f32,
    pub phi: f32,
}

impl EulerAngles
{
    pub const fn new(psi: f32, theta: f32, phi: f32) -> Self {
        EulerAngles { psi, theta, phi }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        libm::fabsf(self.psi - other.psi) <= tol
            && libm::fabsf(self.theta - other.theta) <= tol
            && libm::fabsf(self.phi - other.phi) <= tol
    }
}

impl From<Quaternion> for EulerAngles {
    fn from(value: Quaternion) -> Self {
        EulerAngles::from(&value)
    }
}

impl From<&Quaternion> for EulerAngles {
    fn from(q: &Quaternion) -> Self {
        let psi = libm::atan2f(
            2.0 * q.x * q.y - 2.0 * q.w * q.z,
            2.0 * q.w * q.w + 2.0 * q.x * q.x - 1.0,
        );

        // Clamp to avoid invalid domain, rounding can push a unit quaternion slightly past 1.
        let t = (2.0 * q.x * q.z + 2.0 * q.w * q.y).clamp(-1.0, 1.0);
        let theta = -libm::asinf(t);

        let phi = libm::atan2f(
            2.0 * q.y * q.z - 2.0 * q.w * q.x,
            2.0 * q.w * q.w + 2.0 * q.z * q.z - 1.0,
        );

        EulerAngles::new(psi, theta, phi)
    }
}
