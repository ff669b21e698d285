#![cfg_attr(not(any(test, feature = "sim")), no_std)]

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod i2c_slave;
pub use i2c_slave::*;

pub mod clock_source;
pub use clock_source::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod registers;

pub mod bus;
pub use bus::*;

pub mod interrupt;
pub use interrupt::*;

pub mod error;
pub use error::*;

pub mod config;
pub use config::*;

pub mod mpu6050;
pub use mpu6050::*;

pub mod dmp;

pub mod tracker;
pub use tracker::*;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

#[cfg(test)]
mod tests;

/// Default i2c address of the MPU 6050 chip.
/// 
pub const MPU6505_DEFAULT_I2C_ADDR: u8 = 0x68;

/// The default device ID of a MPU6050 chip.
/// 
pub const MPU6050_DEVICE_ID: u8 = 0x034;
