use core::{error::Error as CoreError, fmt};

/// Errors reported by the DMP driver, `E` is the error type of the underlying `RegisterBus`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E>
{
    /// A register read or write failed on the bus.
    Bus(E),

    /// The chip never answered with the expected `WHO_AM_I` value.
    ConnectionFailed,

    /// The DMP firmware did not read back the way it was written.
    MemoryLoad,

    /// One of the DMP configuration updates written after the firmware did not read back.
    Configuration,

    /// The interrupt pin could not be armed.
    Interrupt,

    /// The DMP has not been (successfully) initialized yet.
    NotInitialized,
}

impl<E> Error<E> {

    /// Numeric status code of a failed DMP initialization: 1 when loading the firmware failed and
    /// 2 when configuring it failed. Other errors have no code.
    ///
    pub fn code(&self) -> Option<u8> {
        match self {
            Self::MemoryLoad => Some(1),
            Self::Configuration => Some(2),
            _ => None,
        }
    }
}

impl<E: fmt::Debug> CoreError for Error<E> {}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "Bus error: {:?}", err),
            Self::ConnectionFailed => write!(f, "MPU6050 not responding"),
            Self::MemoryLoad => write!(f, "DMP initialization failed (code 1): firmware load"),
            Self::Configuration => write!(f, "DMP initialization failed (code 2): configuration"),
            Self::Interrupt => write!(f, "Could not attach the interrupt pin"),
            Self::NotInitialized => write!(f, "DMP not initialized"),
        }
    }
}

impl<E> From<E> for Error<E>
{
    fn from(err: E) -> Self {
        Error::Bus(err)
    }
}
