/// Tunables of the `OrientationTracker` that are not baked into the DMP firmware. The defaults are
/// what the tracker has always used, there is normally no reason to change them.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig
{
    /// Largest number of buffered packets accepted in one read. The FIFO holds 1024 bytes (24
    /// packets), 20 packets leaves a margin of 2 packets before the hardware overflows and the
    /// whole FIFO is corrupted.
    pub max_packets: u16,

    /// How many times `WHO_AM_I` is probed before giving up on the chip.
    pub connection_attempts: u8,

    /// Wait between two connection probes, in milliseconds.
    pub connection_retry_delay_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            max_packets: 20,
            connection_attempts: 6,
            connection_retry_delay_ms: 500,
        }
    }
}

/// Factory calibration offsets written to the accelerometer and gyroscope offset registers, one
/// per axis.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offsets
{
    /// `[x, y, z]` for `XA_OFFS_H`, `YA_OFFS_H` and `ZA_OFFS_H`.
    pub accel: [i16; 3],

    /// `[x, y, z]` for `XG_OFFS_USRH`, `YG_OFFS_USRH` and `ZG_OFFS_USRH`.
    pub gyro: [i16; 3],
}

impl Offsets {
    pub const fn new(ax: i16, ay: i16, az: i16, gx: i16, gy: i16, gz: i16) -> Self {
        Offsets { accel: [ax, ay, az], gyro: [gx, gy, gz] }
    }
}
