// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Rawspool transport.

use serde::{Deserialize, Serialize};

/// Spooler-assigned identifier of a print job.
///
/// Only meaningful between a successful document start and the matching
/// document end on the same printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u32);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data type tag handed to the driver when a document starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Pass bytes through to the device unmodified.
    #[serde(rename = "RAW")]
    Raw,
    /// Pass bytes through an XPS-based driver pipeline unmodified.
    #[serde(rename = "XPS_PASS")]
    XpsPass,
}

impl DataType {
    /// The exact tag string the spooler expects.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::XpsPass => "XPS_PASS",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Access rights requested when opening a printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterAccess {
    /// Print and manage own jobs. Enough for every submission.
    #[default]
    Use,
    /// Full administrative access to the printer.
    Administer,
}

impl PrinterAccess {
    /// Win32 `PRINTER_ACCESS_*` mask.
    pub fn mask(&self) -> u32 {
        match self {
            Self::Use => 0x0000_0008,
            Self::Administer => 0x0000_0004,
        }
    }
}

/// Where a printer session is in the document/page lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Handle held, no job open.
    Open,
    /// A document (job) is open, no page.
    DocumentActive,
    /// A page is open inside the active document.
    PageActive,
    /// Handle released.
    Closed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::DocumentActive => "document-active",
            Self::PageActive => "page-active",
            Self::Closed => "closed",
        };
        f.write_str(s)
    }
}

/// Which half of the two-phase driver query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryPhase {
    /// Asking for the required buffer size.
    Probe,
    /// Fetching the driver info into the allocated buffer.
    Fetch,
}

impl std::fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Probe => f.write_str("probe"),
            Self::Fetch => f.write_str("fetch"),
        }
    }
}

/// Per-submission options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOptions {
    /// Hold the job in the queue right after it is created.
    pub paused: bool,
    /// Total page count declared to the spooler (at least 1). Pages after the
    /// first are emitted empty; the payload is never split.
    pub page_count: u32,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            paused: false,
            page_count: 1,
        }
    }
}

/// Delivered to the job-created observer once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCreated {
    pub id: JobId,
    pub printer_name: String,
}
