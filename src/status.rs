use thiserror::Error;

const SUCCESS: &str = "sorted successfully";
const NULL_INPUT: &str = "error: null input";
const INVALID_SIZE: &str = "error: array size is zero or exceeds the input";
const ALLOCATION_FAILURE: &str = "error: working memory allocation failed";
const UNKNOWN: &str = "error: unknown status code";

/// A reason a sort request was refused. The caller's slice is never modified when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// No slice was given.
    #[error("error: null input")]
    NullInput,

    /// The requested length was zero or longer than the slice.
    #[error("error: array size is zero or exceeds the input")]
    InvalidSize,

    /// The two working buffers could not be acquired.
    #[error("error: working memory allocation failed")]
    AllocationFailure,
}

impl SortError {
    /// Return the status code reporting this error.
    pub const fn status(self) -> SortStatus {
        match self {
            Self::NullInput => SortStatus::NullInput,
            Self::InvalidSize => SortStatus::InvalidSize,
            Self::AllocationFailure => SortStatus::AllocationFailure,
        }
    }
}

/// The closed set of outcomes of one sort request, with stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SortStatus {
    /// The slice was sorted.
    Success = 0,
    /// See [`SortError::NullInput`].
    NullInput = -1,
    /// See [`SortError::InvalidSize`].
    InvalidSize = -2,
    /// See [`SortError::AllocationFailure`].
    AllocationFailure = -3,
}

impl SortStatus {
    /// Return the numeric code of this status.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Return the status with numeric code `code`, if there is one.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            -1 => Some(Self::NullInput),
            -2 => Some(Self::InvalidSize),
            -3 => Some(Self::AllocationFailure),
            _ => None,
        }
    }

    /// Return a human-readable description of this status.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Success => SUCCESS,
            Self::NullInput => NULL_INPUT,
            Self::InvalidSize => INVALID_SIZE,
            Self::AllocationFailure => ALLOCATION_FAILURE,
        }
    }
}

impl From<Result<(), SortError>> for SortStatus {
    fn from(result: Result<(), SortError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(e) => e.status(),
        }
    }
}

/// Return a human-readable description of the status with numeric code `code`. Codes outside
/// [`SortStatus`] get a generic description.
pub const fn describe(code: i32) -> &'static str {
    match SortStatus::from_code(code) {
        Some(status) => status.describe(),
        None => UNKNOWN,
    }
}
