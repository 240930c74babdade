//! Error taxonomy for BPLX encoding and decoding.
//!
//! Every error is terminal for the call that raised it. Encoding and decoding
//! are deterministic, so retrying with the same input yields the same error.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BplxError>;

/// Error type for BPLX encode/decode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BplxError {
    /// Encode-time: the asset violates a structural precondition.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Decode-time: the byte stream is not a BPLX v1 container.
    #[error("format error: {0}")]
    FormatError(FormatIssue),

    /// Decode-time: a section declares more data than remains.
    #[error("truncated input in {section}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        section: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// Decode-time: a stored index points outside its valid range.
    #[error("invalid {kind} reference {index} (limit {limit})")]
    InvalidReference {
        kind: ReferenceKind,
        index: i64,
        limit: i64,
    },
}

impl BplxError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Why a byte stream was rejected as a [`BplxError::FormatError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    /// First four bytes are not `BPLX`
    BadMagic([u8; 4]),
    /// Version field is not one this decoder understands
    UnsupportedVersion(u32),
    /// Reserved section-flags word is non-zero
    ReservedFlags(u32),
    /// A length-prefixed name is not valid UTF-8
    InvalidName { section: &'static str },
    /// Bytes remain after the final section
    TrailingBytes(usize),
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic(found) => {
                write!(f, "bad magic {:?}, expected \"BPLX\"", found.escape_ascii().to_string())
            }
            Self::UnsupportedVersion(v) => write!(f, "unsupported version {}", v),
            Self::ReservedFlags(flags) => {
                write!(f, "reserved header word must be 0, found {:#010x}", flags)
            }
            Self::InvalidName { section } => write!(f, "{} name is not valid UTF-8", section),
            Self::TrailingBytes(n) => write!(f, "{} unexpected bytes after clip section", n),
        }
    }
}

/// Which cross-reference an [`BplxError::InvalidReference`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Face corner → vertex
    FaceVertex,
    /// Bone → parent bone
    BoneParent,
    /// Keyframe → bone
    KeyframeBone,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FaceVertex => "face vertex",
            Self::BoneParent => "bone parent",
            Self::KeyframeBone => "keyframe bone",
        })
    }
}
