//! Digital Motion Processor support for the MotionApps 2.0 firmware: uploading and configuring the
//! firmware image, and decoding the packets it writes into the FIFO.

pub mod initialize;

pub mod packet;
pub use packet::*;

/// Size of one DMP FIFO packet produced by the MotionApps 2.0 firmware.
///
pub const DMP_PACKET_SIZE: u16 = 42;
pub const DMP_PACKET_LEN: usize = DMP_PACKET_SIZE as usize;

/// Size of the MotionApps 2.0 firmware image in bytes.
///
pub const DMP_CODE_SIZE: usize = 1929;

/// Program start address of the MotionApps 2.0 firmware.
///
pub const DMP_START_ADDRESS: u16 = 0x0300;

/// Divisor applied by the firmware to its 200Hz output, i.e. packets arrive at
/// `200Hz / (1 + divisor)`.
///
pub const DMP_FIFO_RATE_DIVISOR: u8 = 0x01;

/// Bank and address of the FIFO rate divisor inside the uploaded firmware image.
///
pub const DMP_FIFO_RATE_BANK: u8 = 0x02;
pub const DMP_FIFO_RATE_ADDRESS: u8 = 0x16;

pub const DMP_MEMORY_BANK_SIZE: usize = 256;

/// Largest number of bytes written to DMP memory in one bus transfer.
///
pub const DMP_MEMORY_CHUNK_SIZE: usize = 16;
