use failure::Fail;

use crate::video::errors::Error as VideoError;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum Error {
    #[fail(display = "Quad capacity ({}) exceeded, primitive dropped.", _0)]
    QuadCapacityExceeded(usize),
    #[fail(display = "Line capacity ({}) exceeded, primitive dropped.", _0)]
    LineCapacityExceeded(usize),
    #[fail(display = "All texture slots are occupied, primitive dropped.")]
    TextureSlotsExhausted,
    #[fail(display = "Line width {} is invalid, primitive dropped.", _0)]
    LineWidthInvalid(f32),
    #[fail(display = "Capacity {} is invalid.", _0)]
    InvalidCapacity(usize),
    #[fail(display = "{}", _0)]
    Video(#[cause] VideoError),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl Error {
    /// Returns true if this error only means a primitive was not recorded, the
    /// batch itself is still in a consistent state.
    pub fn is_dropped(&self) -> bool {
        match *self {
            Error::QuadCapacityExceeded(_)
            | Error::LineCapacityExceeded(_)
            | Error::TextureSlotsExhausted
            | Error::LineWidthInvalid(_) => true,
            _ => false,
        }
    }
}
