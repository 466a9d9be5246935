// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Submission settings. Built in memory; nothing is read from disk.

use serde::{Deserialize, Serialize};

use crate::error::{RawSpoolError, Result};
use crate::types::PrinterAccess;

/// Default size of each write handed to the spooler (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Largest accepted chunk (64 MiB). Well under what one `WritePrinter` call
/// can carry, and small enough to allocate up front.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Settings applied to every submission made by one submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoolConfig {
    /// Bytes read from the payload and written per spooler call.
    pub chunk_size: usize,
    /// Access requested when the printer is opened.
    pub desired_access: PrinterAccess,
}

impl Default for SpoolConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            desired_access: PrinterAccess::Use,
        }
    }
}

impl SpoolConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(RawSpoolError::InvalidArgument(
                "chunk size must be at least one byte".into(),
            ));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(RawSpoolError::InvalidArgument(format!(
                "chunk size {} exceeds the {MAX_CHUNK_SIZE}-byte limit",
                self.chunk_size
            )));
        }
        Ok(())
    }
}
