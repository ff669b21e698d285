
/// DLPF (Digital Low Pass Filter) mode, this determines the highest frequency that is not filtered
/// out. Stored in the lower 3 bits of the `CONFIG` register.
/// 
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DLPFMode {
    Bw256Hz = 0x00,
    Bw188Hz = 0x01,
    Bw98Hz = 0x02,
    Bw42Hz = 0x03,
    Bw20Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
}

impl DLPFMode {
    pub fn from_register(value: u8) -> Option<Self> {
        match value & 0b0000_0111 {
            0x00 => Some(Self::Bw256Hz),
            0x01 => Some(Self::Bw188Hz),
            0x02 => Some(Self::Bw98Hz),
            0x03 => Some(Self::Bw42Hz),
            0x04 => Some(Self::Bw20Hz),
            0x05 => Some(Self::Bw10Hz),
            0x06 => Some(Self::Bw5Hz),
            _ => None,
        }
    }
}
