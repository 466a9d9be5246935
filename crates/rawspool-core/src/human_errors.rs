// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-English messages for spooler failures, shown by the command-line
// front end. The library itself never prints.

use crate::error::RawSpoolError;

/// Win32 `ERROR_ACCESS_DENIED`.
const ERROR_ACCESS_DENIED: u32 = 5;
/// Win32 `ERROR_INVALID_PRINTER_NAME`.
const ERROR_INVALID_PRINTER_NAME: u32 = 1801;

/// Severity of an error from the operator's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The spooler hiccupped; submitting again may work.
    Transient,
    /// The operator must change something (name, permissions, driver setting).
    ActionRequired,
    /// Retrying the same submission will fail the same way.
    Permanent,
}

/// A human-readable error with a summary and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    pub message: String,
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `RawSpoolError` into something an operator can act on.
pub fn humanize_error(err: &RawSpoolError) -> HumanError {
    match err {
        RawSpoolError::ResourceUnavailable { printer, code } => match *code {
            ERROR_ACCESS_DENIED => HumanError {
                message: format!("You don't have permission to print to \"{printer}\"."),
                suggestion: "Ask an administrator to grant print rights on this printer.".into(),
                severity: Severity::ActionRequired,
            },
            ERROR_INVALID_PRINTER_NAME => HumanError {
                message: format!("There is no printer called \"{printer}\"."),
                suggestion: "Check the exact printer name in the system printer list.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: format!("The printer \"{printer}\" could not be opened."),
                suggestion: format!(
                    "Check the printer name and that the spooler service is running. (OS error {code})"
                ),
                severity: Severity::ActionRequired,
            },
        },

        RawSpoolError::InvalidDataType { data_type, .. } => HumanError {
            message: format!("The printer driver refused the {data_type} data type."),
            suggestion: "Open the printer properties and turn on 'Enable advanced printing features', then print again.".into(),
            severity: Severity::ActionRequired,
        },

        RawSpoolError::DriverQueryFailed { phase, code } => HumanError {
            message: "The printer driver details could not be read.".into(),
            suggestion: format!("Reinstall or update the printer driver. ({phase}, OS error {code})"),
            severity: Severity::Permanent,
        },

        RawSpoolError::DocumentStartFailed { code }
        | RawSpoolError::DocumentEndFailed { code }
        | RawSpoolError::PageStartFailed { code }
        | RawSpoolError::PageEndFailed { code }
        | RawSpoolError::CloseFailed { code }
        | RawSpoolError::JobControlFailed { code, .. } => HumanError {
            message: "The print queue rejected the job.".into(),
            suggestion: format!(
                "Check the printer queue for stuck jobs and try again. (OS error {code})"
            ),
            severity: Severity::Transient,
        },

        RawSpoolError::WriteFailed {
            code,
            written,
            requested,
        } => HumanError {
            message: "Sending data to the printer stopped part-way.".into(),
            suggestion: format!(
                "Make sure the printer is online, then print again. ({written} of {requested} bytes, OS error {code})"
            ),
            severity: Severity::Transient,
        },

        RawSpoolError::InvalidState { .. } => HumanError {
            message: "Print steps were issued in the wrong order.".into(),
            suggestion: "This is a bug in the calling program; please report it.".into(),
            severity: Severity::Permanent,
        },

        RawSpoolError::InvalidArgument(detail) => HumanError {
            message: "The print request is incomplete.".into(),
            suggestion: format!("Fix the request and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        RawSpoolError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file to print couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "The file to print couldn't be read.".into(),
                    suggestion: format!("Check the file and try again. ({io_err})"),
                    severity: Severity::Transient,
                }
            }
        }
    }
}
