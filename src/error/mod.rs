use std::fmt::{Display, Debug, Formatter, Result};
use std::io;


/// Error set for potential time series processing errors
pub enum TimeSeriesError {
    /// Requested time window falls outside of the series duration
    InvalidRange,
    /// Fewer than 2 samples passed to a variance estimator
    InsufficientSamples,
    /// Parallel series must have the same length
    SeriesAreNotSameLength,
}

impl Display for TimeSeriesError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            TimeSeriesError::InvalidRange => "Time window outside of series duration",
            TimeSeriesError::InsufficientSamples => "At least 2 samples required",
            TimeSeriesError::SeriesAreNotSameLength => "Series must be of the same length",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for TimeSeriesError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential smoothing errors
pub enum SmoothingError {
    /// Kernel shape name does not match a predefined window
    UnsupportedKernel(String),
}

impl Display for SmoothingError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SmoothingError::UnsupportedKernel(name) => {
                write!(f, "Unknown pre-defined window \"{}\"", name)
            },
        }
    }
}

impl Debug for SmoothingError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential `.npy` file errors
pub enum NpyError {
    /// File does not start with the `.npy` magic string
    InvalidMagic,
    /// Format version is not 1.x or 2.x
    UnsupportedVersion(u8, u8),
    /// Header dictionary cannot be parsed
    MalformedHeader(String),
    /// Array dtype cannot be converted to `f64`
    UnsupportedDtype(String),
    /// Fortran-ordered arrays of more than one dimension are not handled
    FortranOrder,
    /// Data segment does not match the shape given in the header
    TruncatedData,
    /// Array does not have the expected number of dimensions
    DimensionMismatch,
    /// Underlying file error
    FileError(io::Error),
}

impl Display for NpyError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            NpyError::InvalidMagic => write!(f, "Not a .npy file (bad magic string)"),
            NpyError::UnsupportedVersion(major, minor) => {
                write!(f, "Unsupported .npy format version {}.{}", major, minor)
            },
            NpyError::MalformedHeader(header) => write!(f, "Malformed .npy header: {}", header),
            NpyError::UnsupportedDtype(descr) => write!(f, "Unsupported .npy dtype: {}", descr),
            NpyError::FortranOrder => write!(f, "Fortran ordered .npy arrays are not supported"),
            NpyError::TruncatedData => write!(f, ".npy data segment shorter than header shape"),
            NpyError::DimensionMismatch => write!(f, ".npy array has unexpected dimensions"),
            NpyError::FileError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for NpyError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<io::Error> for NpyError {
    fn from(err: io::Error) -> NpyError {
        NpyError::FileError(err)
    }
}

/// A set of errors that may occur when using the library
pub enum NetworkAnalysisError {
    /// Errors related to time series processing
    TimeSeriesRelatedError(TimeSeriesError),
    /// Errors related to smoothing kernels
    SmoothingRelatedError(SmoothingError),
    /// Errors related to `.npy` files
    NpyRelatedError(NpyError),
}

impl Display for NetworkAnalysisError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            NetworkAnalysisError::TimeSeriesRelatedError(err) => write!(f, "{}", err),
            NetworkAnalysisError::SmoothingRelatedError(err) => write!(f, "{}", err),
            NetworkAnalysisError::NpyRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for NetworkAnalysisError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<TimeSeriesError> for NetworkAnalysisError {
    fn from(err: TimeSeriesError) -> NetworkAnalysisError {
        NetworkAnalysisError::TimeSeriesRelatedError(err)
    }
}

impl From<SmoothingError> for NetworkAnalysisError {
    fn from(err: SmoothingError) -> NetworkAnalysisError {
        NetworkAnalysisError::SmoothingRelatedError(err)
    }
}

impl From<NpyError> for NetworkAnalysisError {
    fn from(err: NpyError) -> NetworkAnalysisError {
        NetworkAnalysisError::NpyRelatedError(err)
    }
}
