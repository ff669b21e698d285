/// One of the auxiliary I2C slaves of the MPU6050's internal I2C master, each slave occupies
/// three consecutive registers starting at `I2C_SLV0_ADDR`.
/// 
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cSlave
{
    Slave0 = 0,
    Slave1 = 1,
    Slave2 = 2,
    Slave3 = 3,
}

impl I2cSlave {
    #[inline]
    pub fn address_register(&self) -> u8 {
        crate::registers::I2C_SLV0_ADDR + (*self as u8) * 3
    }
}
