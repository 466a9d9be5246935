// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Exclusive printer session.
//
// A `PrinterSession` owns one open printer handle and walks it through the
// spooler's document/page lifecycle:
//
//   Open -> DocumentActive -> PageActive -> DocumentActive -> Open -> Closed
//
// Out-of-order calls are rejected with `InvalidState` before anything reaches
// the spooler. The handle is released exactly once, either by `close()` or
// when the session is dropped.

use tracing::{debug, info, instrument, warn};

use rawspool_core::error::{ERROR_INVALID_DATATYPE, RawSpoolError, Result};
use rawspool_core::types::{DataType, JobId, PrinterAccess, SessionState};

use crate::spooler::{RawHandle, Spooler};

/// Win32 `ERROR_INVALID_HANDLE`.
const ERROR_INVALID_HANDLE: u32 = 6;

/// An open printer plus the job/page state layered on it.
pub struct PrinterSession<'s, S: Spooler + ?Sized> {
    spooler: &'s S,
    printer_name: String,
    handle: Option<RawHandle>,
    state: SessionState,
    job: Option<JobId>,
}

impl<'s, S: Spooler + ?Sized> PrinterSession<'s, S> {
    /// Open `printer_name` with the requested access.
    #[instrument(skip_all, fields(printer = printer_name))]
    pub fn open(spooler: &'s S, printer_name: &str, access: PrinterAccess) -> Result<Self> {
        let unavailable = |code| RawSpoolError::ResourceUnavailable {
            printer: printer_name.to_string(),
            code,
        };

        let handle = spooler
            .open_printer(printer_name, access)
            .map_err(|e| unavailable(e.code))?;
        if handle.is_invalid() {
            return Err(unavailable(ERROR_INVALID_HANDLE));
        }

        info!(?access, "printer opened");
        Ok(Self {
            spooler,
            printer_name: printer_name.to_string(),
            handle: Some(handle),
            state: SessionState::Open,
            job: None,
        })
    }

    pub fn printer_name(&self) -> &str {
        &self.printer_name
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Id of the job currently open on this session.
    pub fn job_id(&self) -> Option<JobId> {
        self.job
    }

    /// The live handle, or `None` once closed.
    pub fn raw_handle(&self) -> Option<RawHandle> {
        self.handle
    }

    /// Return the handle if the session is in one of `allowed`.
    fn require(&self, operation: &'static str, allowed: &[SessionState]) -> Result<RawHandle> {
        match self.handle {
            Some(handle) if allowed.contains(&self.state) => Ok(handle),
            _ => Err(RawSpoolError::InvalidState {
                operation,
                state: self.state,
            }),
        }
    }

    /// Start a new job. Returns the spooler-assigned job id.
    pub fn begin_document(&mut self, document_name: &str, data_type: DataType) -> Result<JobId> {
        let handle = self.require("begin document", &[SessionState::Open])?;
        let id = self
            .spooler
            .start_doc_printer(handle, document_name, data_type)
            .map_err(|e| match e.code {
                ERROR_INVALID_DATATYPE => RawSpoolError::InvalidDataType {
                    data_type,
                    code: e.code,
                },
                code => RawSpoolError::DocumentStartFailed { code },
            })?;

        let id = JobId(id);
        self.state = SessionState::DocumentActive;
        self.job = Some(id);
        info!(job_id = %id, %data_type, document = document_name, "document started");
        Ok(id)
    }

    /// Hold the open job in the queue.
    pub fn pause_job(&mut self) -> Result<()> {
        let handle = self.require(
            "pause job",
            &[SessionState::DocumentActive, SessionState::PageActive],
        )?;
        let Some(job_id) = self.job else {
            return Err(RawSpoolError::InvalidState {
                operation: "pause job",
                state: self.state,
            });
        };
        self.spooler
            .pause_job(handle, job_id.0)
            .map_err(|e| RawSpoolError::JobControlFailed {
                job_id,
                code: e.code,
            })?;
        info!(%job_id, "job paused");
        Ok(())
    }

    /// Close the open job.
    ///
    /// The job counts as ended once the call is issued, even if the spooler
    /// reports failure; it cannot be ended twice.
    pub fn end_document(&mut self) -> Result<()> {
        let handle = self.require("end document", &[SessionState::DocumentActive])?;
        let result = self.spooler.end_doc_printer(handle);
        self.state = SessionState::Open;
        let job = self.job.take();
        result.map_err(|e| RawSpoolError::DocumentEndFailed { code: e.code })?;
        debug!(job_id = ?job, "document ended");
        Ok(())
    }

    pub fn begin_page(&mut self) -> Result<()> {
        let handle = self.require("begin page", &[SessionState::DocumentActive])?;
        self.spooler
            .start_page_printer(handle)
            .map_err(|e| RawSpoolError::PageStartFailed { code: e.code })?;
        self.state = SessionState::PageActive;
        debug!("page started");
        Ok(())
    }

    /// Close the open page. Like `end_document`, the page is over once the
    /// call has been issued.
    pub fn end_page(&mut self) -> Result<()> {
        let handle = self.require("end page", &[SessionState::PageActive])?;
        let result = self.spooler.end_page_printer(handle);
        self.state = SessionState::DocumentActive;
        result.map_err(|e| RawSpoolError::PageEndFailed { code: e.code })?;
        debug!("page ended");
        Ok(())
    }

    /// Write all of `data` into the open page. A partial write is an error.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        let handle = self.require("write", &[SessionState::PageActive])?;
        let requested = data.len();
        let written = self
            .spooler
            .write_printer(handle, data)
            .map_err(|e| RawSpoolError::WriteFailed {
                code: e.code,
                written: 0,
                requested,
            })?;
        if written != requested {
            return Err(RawSpoolError::WriteFailed {
                code: 0,
                written,
                requested,
            });
        }
        Ok(())
    }

    /// Files the printer driver declares as dependencies.
    pub fn query_dependent_files(&self) -> Result<Vec<String>> {
        let handle = self.require(
            "query driver",
            &[
                SessionState::Open,
                SessionState::DocumentActive,
                SessionState::PageActive,
            ],
        )?;
        let files = self
            .spooler
            .driver_dependent_files(handle)
            .map_err(|e| RawSpoolError::DriverQueryFailed {
                phase: e.phase,
                code: e.code,
            })?;
        debug!(count = files.len(), "driver dependent files read");
        Ok(files)
    }

    /// Release the printer handle. Closing an already closed session is a
    /// no-op.
    pub fn close(&mut self) -> Result<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        self.state = SessionState::Closed;
        self.job = None;
        self.spooler
            .close_printer(handle)
            .map_err(|e| RawSpoolError::CloseFailed { code: e.code })?;
        debug!(printer = %self.printer_name, "printer closed");
        Ok(())
    }
}

impl<S: Spooler + ?Sized> Drop for PrinterSession<'_, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.spooler.close_printer(handle) {
                warn!(printer = %self.printer_name, code = e.code, "closing printer on drop failed");
            }
        }
    }
}
