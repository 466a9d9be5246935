// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub spooler for non-Windows builds.
//
// Every call fails with `ERROR_NOT_SUPPORTED`, so a submission stops at the
// open step with `ResourceUnavailable`.

use rawspool_core::types::{DataType, PrinterAccess, QueryPhase};

use crate::spooler::{DriverQueryError, NativeError, NativeResult, RawHandle, Spooler};

/// Win32 `ERROR_NOT_SUPPORTED`.
pub const ERROR_NOT_SUPPORTED: u32 = 50;

/// No-op spooler returned on platforms without a Windows print spooler.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubSpooler;

fn unsupported<T>() -> NativeResult<T> {
    Err(NativeError::new(ERROR_NOT_SUPPORTED))
}

impl Spooler for StubSpooler {
    fn open_printer(&self, printer_name: &str, _access: PrinterAccess) -> NativeResult<RawHandle> {
        tracing::warn!(printer = printer_name, "Spooler::open_printer called on stub spooler");
        unsupported()
    }

    fn close_printer(&self, _handle: RawHandle) -> NativeResult<()> {
        unsupported()
    }

    fn start_doc_printer(
        &self,
        _handle: RawHandle,
        _document_name: &str,
        _data_type: DataType,
    ) -> NativeResult<u32> {
        unsupported()
    }

    fn end_doc_printer(&self, _handle: RawHandle) -> NativeResult<()> {
        unsupported()
    }

    fn start_page_printer(&self, _handle: RawHandle) -> NativeResult<()> {
        unsupported()
    }

    fn end_page_printer(&self, _handle: RawHandle) -> NativeResult<()> {
        unsupported()
    }

    fn write_printer(&self, _handle: RawHandle, _data: &[u8]) -> NativeResult<usize> {
        unsupported()
    }

    fn pause_job(&self, _handle: RawHandle, _job_id: u32) -> NativeResult<()> {
        unsupported()
    }

    fn driver_dependent_files(
        &self,
        _handle: RawHandle,
    ) -> std::result::Result<Vec<String>, DriverQueryError> {
        Err(DriverQueryError {
            phase: QueryPhase::Probe,
            code: ERROR_NOT_SUPPORTED,
        })
    }
}
