use core::f32::consts::{FRAC_1_SQRT_2, PI};

use crate::*;

#[test]
fn test_fixed_point_round_trip() {
    let raw = [16384i16, -8192, 4096, 12345];

    let q = Quaternion::from_fixed_point(raw);
    let expected = Quaternion::new(1.0, -0.5, 0.25, 12345.0 / 16384.0);

    assert!(q.approx_eq(&expected, 1.0 / 16384.0), "{:?} != {:?}", q, expected);
    assert_eq!(q.to_fixed_point(), raw);
}

#[test]
fn test_fixed_point_extremes() {
    let q = Quaternion::from_fixed_point([i16::MIN, i16::MAX, 0, -1]);

    assert_eq!(q.w, -2.0);
    assert!(libm::fabsf(q.x - 1.99994) < 0.0001);
    assert_eq!(q.y, 0.0);
    assert_eq!(q.z, -1.0 / 16384.0);
}

#[test]
fn test_identity_gravity_points_up() {
    let gravity = Quaternion::identity().gravity();
    let expected = Vector::new(0.0, 0.0, 1.0);

    println!("{:?}", gravity);
    assert!(gravity.approx_eq(&expected, 1e-6));
}

#[test]
fn test_gravity_after_90_deg_x_rotation() {
    // Tilting the device 90 degrees around X moves gravity onto the Y-axis.
    let q = Quaternion::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0);
    let gravity = q.gravity();

    println!("{:?}", gravity);
    assert!(gravity.approx_eq(&Vector::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn test_gravity_stays_unit_length() {
    let axes = [
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
        Vector::new(1.0, -2.0, 0.5),
        Vector::new(-0.3, 0.7, 2.0),
    ];
    for axis in axes.iter() {
        for step in 0..8 {
            let q = Quaternion::from_axis_angle(axis, step as f32 * PI / 4.0);
            let magnitude = q.gravity().magnitude();
            assert!(libm::fabsf(magnitude - 1.0) < 1e-5, "{:?} gave |g| = {}", q, magnitude);
        }
    }
}

#[test]
fn test_gravity_ignores_yaw() {
    // Spinning around the vertical axis does not move gravity.
    let yawed = Quaternion::from_axis_angle(&Vector::new(0.0, 0.0, 1.0), 1.2);
    assert!(yawed.gravity().approx_eq(&Vector::new(0.0, 0.0, 1.0), 1e-6));

    let tilt = Quaternion::from_axis_angle(&Vector::new(1.0, 0.0, 0.0), 0.4);
    let combined = yawed.multiply(&tilt);
    assert!(combined.gravity().approx_eq(&tilt.gravity(), 1e-5));
}

#[test]
fn test_axis_angle_zero_axis_is_identity() {
    let q = Quaternion::from_axis_angle(&Vector::zero(), 1.0);
    assert!(q.approx_eq(&Quaternion::identity(), 0.0));
}

#[test]
fn test_euler_angles_identity() {
    let angles = EulerAngles::from(Quaternion::identity());
    assert!(angles.approx_eq(&EulerAngles::new(0.0, 0.0, 0.0), 1e-6));
}

#[test]
fn test_euler_theta_follows_y_rotation() {
    let b = 0.5;
    let q = Quaternion::from_axis_angle(&Vector::new(0.0, 1.0, 0.0), b);
    let angles = EulerAngles::from(&q);

    println!("{:?}", angles);
    assert!(libm::fabsf(angles.theta + b) < 1e-5);
    assert!(libm::fabsf(angles.psi) < 1e-5);
    assert!(libm::fabsf(angles.phi) < 1e-5);
}
