/// Clock source of the MPU6050, selected through the lower 3 bits of `PWR_MGMT_1`.
/// 
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource
{
    InternalOscillator = 0,

    GyroX = 1,
    GyroY = 2,
    GyroZ = 3,

    External32kHz = 4,
    External19MHz = 5,

    // 6 is reserved.

    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}

impl ClockSource {

    /// Reads the clock source back from the contents of the `PWR_MGMT_1` register, the reserved
    /// value is reported as `None`.
    /// 
    pub fn from_register(value: u8) -> Option<Self> {
        match value & 0b0000_0111 {
            0 => Some(Self::InternalOscillator),
            1 => Some(Self::GyroX),
            2 => Some(Self::GyroY),
            3 => Some(Self::GyroZ),
            4 => Some(Self::External32kHz),
            5 => Some(Self::External19MHz),
            7 => Some(Self::Stop),
            _ => None,
        }
    }
}
