use math::{Quaternion, Vector};

use super::DMP_PACKET_LEN;

/// One decoded MotionApps 2.0 FIFO packet. Only the 16 bit halves of the fields are used: the
/// firmware stores every value as a 32 bit big endian word of which the upper 16 bits are the
/// ones documented by InvenSense.
///
/// | offset | content                        |
/// |--------|--------------------------------|
/// | 0..16  | quaternion w, x, y, z          |
/// | 16..28 | gyro x, y, z                   |
/// | 28..40 | accel x, y, z                  |
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmpPacket {
    pub quaternion: Quaternion,

    /// Raw gyroscope readings.
    pub gyro: [i16; 3],

    /// Raw accelerometer readings, `+1g` corresponds to `8192`.
    pub accel: [i16; 3],
}

/// Raw accelerometer value of `1g` in the DMP packets.
///
pub const DMP_ACCEL_ONE_G: f32 = 8192.0;

#[inline]
fn i16_at(bytes: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes([ bytes[offset], bytes[offset + 1] ])
}

impl DmpPacket {

    /// Decodes a packet from the FIFO, returns `None` if fewer than `DMP_PACKET_SIZE` bytes are
    /// given.
    ///
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        bytes.first_chunk::<DMP_PACKET_LEN>().map(Self::from_bytes)
    }

    /// Decodes a whole packet, the quaternion sits in the first 16 bytes.
    ///
    pub fn from_bytes(bytes: &[u8; DMP_PACKET_LEN]) -> Self {
        let quaternion = Quaternion::from_fixed_point([
            i16_at(bytes, 0),
            i16_at(bytes, 4),
            i16_at(bytes, 8),
            i16_at(bytes, 12),
        ]);
        DmpPacket {
            quaternion,
            gyro: [ i16_at(bytes, 16), i16_at(bytes, 20), i16_at(bytes, 24) ],
            accel: [ i16_at(bytes, 28), i16_at(bytes, 32), i16_at(bytes, 36) ],
        }
    }

    /// Acceleration with the gravity component removed, still in raw units (`8192` per `g`).
    ///
    pub fn linear_accel(&self, gravity: &Vector) -> Vector {
        Vector::from(self.accel) - *gravity * DMP_ACCEL_ONE_G
    }

    /// Writes the packet back into the layout the firmware uses, the lower halves of the 32 bit
    /// words and the trailing bytes are left zero.
    ///
    pub fn to_bytes(&self) -> [u8; DMP_PACKET_LEN] {
        let mut bytes = [ 0u8; DMP_PACKET_LEN ];
        let mut put = |offset: usize, value: i16| {
            bytes[offset .. offset + 2].copy_from_slice(&value.to_be_bytes());
        };
        for (i, value) in self.quaternion.to_fixed_point().iter().enumerate() {
            put(i * 4, *value);
        }
        for (i, value) in self.gyro.iter().enumerate() {
            put(16 + i * 4, *value);
        }
        for (i, value) in self.accel.iter().enumerate() {
            put(28 + i * 4, *value);
        }
        bytes
    }
}
