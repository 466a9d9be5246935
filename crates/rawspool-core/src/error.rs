// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Rawspool.
//
// Every spooler failure keeps the raw Win32 last-error code so callers can
// diagnose it without re-querying the OS.

use thiserror::Error;

use crate::types::{DataType, JobId, QueryPhase, SessionState};

/// Win32 `ERROR_INVALID_DATATYPE`.
pub const ERROR_INVALID_DATATYPE: u32 = 1804;

/// Top-level error type for all Rawspool operations.
#[derive(Debug, Error)]
pub enum RawSpoolError {
    // -- Session errors --
    #[error("cannot open printer {printer:?} (os error {code})")]
    ResourceUnavailable { printer: String, code: u32 },

    #[error(
        "the specified datatype {data_type} is invalid, try setting 'Enable advanced printing features' in printer properties (os error {code})"
    )]
    InvalidDataType { data_type: DataType, code: u32 },

    #[error("start document failed (os error {code})")]
    DocumentStartFailed { code: u32 },

    #[error("end document failed (os error {code})")]
    DocumentEndFailed { code: u32 },

    #[error("start page failed (os error {code})")]
    PageStartFailed { code: u32 },

    #[error("end page failed (os error {code})")]
    PageEndFailed { code: u32 },

    #[error("write failed after {written} of {requested} bytes (os error {code})")]
    WriteFailed {
        code: u32,
        written: usize,
        requested: usize,
    },

    #[error("closing the printer handle failed (os error {code})")]
    CloseFailed { code: u32 },

    #[error("printer driver query failed during {phase} (os error {code})")]
    DriverQueryFailed { phase: QueryPhase, code: u32 },

    #[error("job control on job {job_id} failed (os error {code})")]
    JobControlFailed { job_id: JobId, code: u32 },

    // -- Caller contract --
    #[error("{operation} is not allowed while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Payload --
    #[error("payload I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RawSpoolError {
    /// The Win32 error code carried by this error, if it came from the spooler.
    pub fn os_code(&self) -> Option<u32> {
        match self {
            Self::ResourceUnavailable { code, .. }
            | Self::InvalidDataType { code, .. }
            | Self::DocumentStartFailed { code }
            | Self::DocumentEndFailed { code }
            | Self::PageStartFailed { code }
            | Self::PageEndFailed { code }
            | Self::CloseFailed { code }
            | Self::WriteFailed { code, .. }
            | Self::DriverQueryFailed { code, .. }
            | Self::JobControlFailed { code, .. } => Some(*code),
            Self::InvalidState { .. } | Self::InvalidArgument(_) | Self::Io(_) => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RawSpoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_datatype_mentions_remediation() {
        let err = RawSpoolError::InvalidDataType {
            data_type: DataType::XpsPass,
            code: ERROR_INVALID_DATATYPE,
        };
        let msg = err.to_string();
        assert!(msg.contains("Enable advanced printing features"));
        assert!(msg.contains("XPS_PASS"));
        assert_eq!(err.os_code(), Some(1804));
    }

    #[test]
    fn contract_errors_have_no_os_code() {
        let err = RawSpoolError::InvalidState {
            operation: "write",
            state: SessionState::DocumentActive,
        };
        assert_eq!(err.os_code(), None);
        assert_eq!(
            err.to_string(),
            "write is not allowed while the session is document-active"
        );
    }
}
