use core::fmt::Debug;

use embedded_hal::i2c::{I2c, Operation};

use crate::MPU6505_DEFAULT_I2C_ADDR;

/// Byte level access to the MPU6050's register map. Everything the driver does goes through this
/// trait, so it can run against real hardware (see `I2cBus`) or against a simulated device.
///
/// Block reads and writes start at `register` and rely on the chip's auto increment, except for
/// the FIFO and DMP memory registers which stream from a single address.
///
pub trait RegisterBus {
    type Error: Debug;

    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error>;

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    fn read_block(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    fn write_block(&mut self, register: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// `RegisterBus` on top of any `embedded-hal` I2C bus.
///
pub struct I2cBus<I2C>
{
    /// i2c channel that we actually use to communicate with the MPU6050 chip.
    i2c: I2C,

    /// i2c address that chip is located at.
    address: u8,
}

impl<I2C> I2cBus<I2C>
{
    /// Use the chip at its default address (AD0 pulled low).
    ///
    pub fn new(i2c: I2C) -> Self {
        I2cBus { i2c, address: MPU6505_DEFAULT_I2C_ADDR }
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        I2cBus { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Gives the underlying I2C peripheral back.
    ///
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cBus<I2C>
{
    type Error = I2C::Error;

    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut state = [ 0u8 ];
        self.i2c.write_read(self.address, &[ register ], &mut state)?;
        Ok(state[0])
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[ register, value ])
    }

    fn read_block(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[ register ], buffer)
    }

    fn write_block(&mut self, register: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes in one transaction go out as a single write on the wire.
        self.i2c.transaction(self.address, &mut [
            Operation::Write(&[ register ]),
            Operation::Write(bytes),
        ])
    }
}
