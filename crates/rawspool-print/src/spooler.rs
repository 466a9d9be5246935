// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The native print-spooler call surface.
//
// Each method maps one-to-one onto a Win32 spooler call and reports failure
// with the thread's last-error code. Sequencing, state tracking, and error
// typing live one layer up in `PrinterSession`.

use rawspool_core::types::{DataType, PrinterAccess, QueryPhase};

/// A Win32 failure: the value of `GetLastError()` right after the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeError {
    pub code: u32,
}

impl NativeError {
    pub fn new(code: u32) -> Self {
        Self { code }
    }
}

/// Result of a single native call.
pub type NativeResult<T> = std::result::Result<T, NativeError>;

/// Failure of the two-phase driver-info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverQueryError {
    pub phase: QueryPhase,
    pub code: u32,
}

/// Opaque printer handle value as returned by `OpenPrinterW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(pub isize);

impl RawHandle {
    /// Zero and minus one are never valid printer handles.
    pub fn is_invalid(&self) -> bool {
        self.0 == 0 || self.0 == -1
    }
}

/// Native print-spooler operations against an opened printer handle.
pub trait Spooler {
    /// `OpenPrinterW` with the requested access mask.
    fn open_printer(&self, printer_name: &str, access: PrinterAccess) -> NativeResult<RawHandle>;

    /// `ClosePrinter`.
    fn close_printer(&self, handle: RawHandle) -> NativeResult<()>;

    /// `StartDocPrinterW` with a level-1 doc info. Returns the spooler job id.
    fn start_doc_printer(
        &self,
        handle: RawHandle,
        document_name: &str,
        data_type: DataType,
    ) -> NativeResult<u32>;

    /// `EndDocPrinter`.
    fn end_doc_printer(&self, handle: RawHandle) -> NativeResult<()>;

    /// `StartPagePrinter`.
    fn start_page_printer(&self, handle: RawHandle) -> NativeResult<()>;

    /// `EndPagePrinter`.
    fn end_page_printer(&self, handle: RawHandle) -> NativeResult<()>;

    /// `WritePrinter`. Returns how many bytes the spooler accepted, which may
    /// be fewer than `data.len()`.
    fn write_printer(&self, handle: RawHandle, data: &[u8]) -> NativeResult<usize>;

    /// `SetJobW` with `JOB_CONTROL_PAUSE`.
    fn pause_job(&self, handle: RawHandle, job_id: u32) -> NativeResult<()>;

    /// `GetPrinterDriverW` level 3: probe the size, fetch, and decode
    /// `pDependentFiles`.
    fn driver_dependent_files(
        &self,
        handle: RawHandle,
    ) -> std::result::Result<Vec<String>, DriverQueryError>;
}

impl<T: Spooler + ?Sized> Spooler for &T {
    fn open_printer(&self, printer_name: &str, access: PrinterAccess) -> NativeResult<RawHandle> {
        (**self).open_printer(printer_name, access)
    }

    fn close_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).close_printer(handle)
    }

    fn start_doc_printer(
        &self,
        handle: RawHandle,
        document_name: &str,
        data_type: DataType,
    ) -> NativeResult<u32> {
        (**self).start_doc_printer(handle, document_name, data_type)
    }

    fn end_doc_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).end_doc_printer(handle)
    }

    fn start_page_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).start_page_printer(handle)
    }

    fn end_page_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).end_page_printer(handle)
    }

    fn write_printer(&self, handle: RawHandle, data: &[u8]) -> NativeResult<usize> {
        (**self).write_printer(handle, data)
    }

    fn pause_job(&self, handle: RawHandle, job_id: u32) -> NativeResult<()> {
        (**self).pause_job(handle, job_id)
    }

    fn driver_dependent_files(
        &self,
        handle: RawHandle,
    ) -> std::result::Result<Vec<String>, DriverQueryError> {
        (**self).driver_dependent_files(handle)
    }
}

impl<T: Spooler + ?Sized> Spooler for Box<T> {
    fn open_printer(&self, printer_name: &str, access: PrinterAccess) -> NativeResult<RawHandle> {
        (**self).open_printer(printer_name, access)
    }

    fn close_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).close_printer(handle)
    }

    fn start_doc_printer(
        &self,
        handle: RawHandle,
        document_name: &str,
        data_type: DataType,
    ) -> NativeResult<u32> {
        (**self).start_doc_printer(handle, document_name, data_type)
    }

    fn end_doc_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).end_doc_printer(handle)
    }

    fn start_page_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).start_page_printer(handle)
    }

    fn end_page_printer(&self, handle: RawHandle) -> NativeResult<()> {
        (**self).end_page_printer(handle)
    }

    fn write_printer(&self, handle: RawHandle, data: &[u8]) -> NativeResult<usize> {
        (**self).write_printer(handle, data)
    }

    fn pause_job(&self, handle: RawHandle, job_id: u32) -> NativeResult<()> {
        (**self).pause_job(handle, job_id)
    }

    fn driver_dependent_files(
        &self,
        handle: RawHandle,
    ) -> std::result::Result<Vec<String>, DriverQueryError> {
        (**self).driver_dependent_files(handle)
    }
}
