// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory spooler that records every native call, for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rawspool_core::types::{DataType, PrinterAccess, QueryPhase};

use crate::spooler::{DriverQueryError, NativeError, NativeResult, RawHandle, Spooler};

pub const TEST_HANDLE: RawHandle = RawHandle(0x5150);
pub const TEST_JOB_ID: u32 = 17;

/// One observed native call (or observer notification).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Open(String),
    QueryDriver,
    StartDoc { name: String, data_type: DataType },
    Pause(u32),
    Notified(u32),
    StartPage,
    Write(usize),
    EndPage,
    EndDoc,
    Close,
}

/// Native operation kinds that can be scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Open,
    QueryDriver,
    StartDoc,
    Pause,
    StartPage,
    Write,
    EndPage,
    EndDoc,
    Close,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

#[derive(Default)]
struct Script {
    /// op -> (zero-based occurrence that fails, error code)
    failures: HashMap<Op, (usize, u32)>,
    seen: HashMap<Op, usize>,
}

pub struct RecordingSpooler {
    log: CallLog,
    written: Mutex<Vec<u8>>,
    script: Mutex<Script>,
    dependent_files: Vec<String>,
    short_writes: bool,
    handle: RawHandle,
}

impl RecordingSpooler {
    pub fn new() -> Self {
        Self {
            log: Arc::default(),
            written: Mutex::default(),
            script: Mutex::default(),
            dependent_files: vec!["UNIDRV.DLL".into(), "UNIRES.DLL".into()],
            short_writes: false,
            handle: TEST_HANDLE,
        }
    }

    pub fn with_dependent_files(mut self, files: &[&str]) -> Self {
        self.dependent_files = files.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Make `open_printer` hand back this handle value.
    pub fn with_handle(mut self, handle: RawHandle) -> Self {
        self.handle = handle;
        self
    }

    /// Accept one byte less than requested on every write.
    pub fn with_short_writes(mut self) -> Self {
        self.short_writes = true;
        self
    }

    /// Fail the first call of `op` with `code`.
    pub fn fail(self, op: Op, code: u32) -> Self {
        self.fail_nth(op, 0, code)
    }

    /// Fail the `nth` (zero-based) call of `op` with `code`.
    pub fn fail_nth(self, op: Op, nth: usize, code: u32) -> Self {
        self.script.lock().unwrap().failures.insert(op, (nth, code));
        self
    }

    pub fn log(&self) -> CallLog {
        Arc::clone(&self.log)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    pub fn written(&self) -> Vec<u8> {
        self.written.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn record(&self, op: Op, call: Call) -> NativeResult<()> {
        self.log.lock().unwrap().push(call);
        let mut script = self.script.lock().unwrap();
        let seen = script.seen.entry(op).or_insert(0);
        let occurrence = *seen;
        *seen += 1;
        match script.failures.get(&op) {
            Some(&(nth, code)) if nth == occurrence => Err(NativeError::new(code)),
            _ => Ok(()),
        }
    }
}

impl Spooler for RecordingSpooler {
    fn open_printer(&self, printer_name: &str, _access: PrinterAccess) -> NativeResult<RawHandle> {
        self.record(Op::Open, Call::Open(printer_name.to_string()))?;
        Ok(self.handle)
    }

    fn close_printer(&self, handle: RawHandle) -> NativeResult<()> {
        assert_eq!(handle, self.handle, "closed a handle that was never opened");
        self.record(Op::Close, Call::Close)
    }

    fn start_doc_printer(
        &self,
        _handle: RawHandle,
        document_name: &str,
        data_type: DataType,
    ) -> NativeResult<u32> {
        self.record(
            Op::StartDoc,
            Call::StartDoc {
                name: document_name.to_string(),
                data_type,
            },
        )?;
        Ok(TEST_JOB_ID)
    }

    fn end_doc_printer(&self, _handle: RawHandle) -> NativeResult<()> {
        self.record(Op::EndDoc, Call::EndDoc)
    }

    fn start_page_printer(&self, _handle: RawHandle) -> NativeResult<()> {
        self.record(Op::StartPage, Call::StartPage)
    }

    fn end_page_printer(&self, _handle: RawHandle) -> NativeResult<()> {
        self.record(Op::EndPage, Call::EndPage)
    }

    fn write_printer(&self, _handle: RawHandle, data: &[u8]) -> NativeResult<usize> {
        self.record(Op::Write, Call::Write(data.len()))?;
        let accepted = if self.short_writes {
            data.len().saturating_sub(1)
        } else {
            data.len()
        };
        self.written
            .lock()
            .unwrap()
            .extend_from_slice(&data[..accepted]);
        Ok(accepted)
    }

    fn pause_job(&self, _handle: RawHandle, job_id: u32) -> NativeResult<()> {
        self.record(Op::Pause, Call::Pause(job_id))
    }

    fn driver_dependent_files(
        &self,
        _handle: RawHandle,
    ) -> std::result::Result<Vec<String>, DriverQueryError> {
        self.record(Op::QueryDriver, Call::QueryDriver)
            .map_err(|e| DriverQueryError {
                phase: QueryPhase::Fetch,
                code: e.code,
            })?;
        Ok(self.dependent_files.clone())
    }
}
