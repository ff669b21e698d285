pub const XG_OFFS_TC: u8 = 0x00; //[7] PWR_MODE, [6:1] XG_OFFS_TC, [0] OTP_BNK_VLD

pub const XA_OFFS_H: u8 = 0x06; //[15:0] XA_OFFS
pub const YA_OFFS_H: u8 = 0x08; //[15:0] YA_OFFS
pub const ZA_OFFS_H: u8 = 0x0A; //[15:0] ZA_OFFS

pub const XG_OFFS_USRH: u8 = 0x13; //[15:0] XG_OFFS_USR
pub const YG_OFFS_USRH: u8 = 0x15; //[15:0] YG_OFFS_USR
pub const ZG_OFFS_USRH: u8 = 0x17; //[15:0] ZG_OFFS_USR

pub const SMPLRT_DIV: u8 = 0x019;

pub const CONFIG: u8 = 0x01A; //[5:3] EXT_SYNC_SET, [2:0] DLPF_CFG
pub const GYRO_CONFIG: u8 = 0x01B;
pub const ACCEL_CONFIG: u8 = 0x01C;

pub const MOT_THR: u8 = 0x1F;
pub const MOT_DUR: u8 = 0x20;
pub const ZERO_MOT_THR: u8 = 0x21;
pub const ZERO_MOT_DUR: u8 = 0x22;

pub const I2C_SLV0_ADDR: u8 = 0x025;

pub const INT_ENABLE: u8 = 0x038;
pub const INT_STATUS: u8 = 0x03A;

pub const USER_CTRL: u8 = 0x06A;
pub const PWR_MGMT_1: u8 = 0x06B;

pub const DMP_BANK_SEL: u8 = 0x6D;
pub const DMP_MEM_START_ADDR: u8 = 0x6E;
pub const DMP_MEM_R_W: u8 = 0x6F;
pub const DMP_CFG_1: u8 = 0x70;
pub const DMP_CFG_2: u8 = 0x71;

pub const FIFO_COUNT_H: u8 = 0x072;
pub const FIFO_R_W: u8 = 0x074;

pub const WHO_AM_I: u8 = 0x075; //[6:1] device id

// USER_CTRL bits
pub const USER_CTRL_DMP_EN: u8 = 0b1000_0000;
pub const USER_CTRL_FIFO_EN: u8 = 0b0100_0000;
pub const USER_CTRL_I2C_MST_EN: u8 = 0b0010_0000;
pub const USER_CTRL_DMP_RESET: u8 = 0b0000_1000;
pub const USER_CTRL_FIFO_RESET: u8 = 0b0000_0100;
pub const USER_CTRL_I2C_MST_RESET: u8 = 0b0000_0010;

// PWR_MGMT_1 bits
pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0b1000_0000;
pub const PWR_MGMT_1_SLEEP: u8 = 0b0100_0000;
pub const PWR_MGMT_1_CLKSEL: u8 = 0b0000_0111;

// INT_ENABLE / INT_STATUS bits
pub const INT_FIFO_OFLOW: u8 = 0b0001_0000;
pub const INT_DMP: u8 = 0b0000_0010;

// XG_OFFS_TC bits
pub const OTP_BANK_VALID: u8 = 0b0000_0001;

// DMP_BANK_SEL bits
pub const BANK_SEL_PREFETCH: u8 = 0x40;
pub const BANK_SEL_USER_BANK: u8 = 0x20;
pub const BANK_SEL_BANK: u8 = 0x1F;

/// `EXT_SYNC_SET` value that latches the FSYNC pin into bit 0 of `TEMP_OUT_L`.
pub const EXT_SYNC_TEMP_OUT_L: u8 = 1;
