// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Windows print spooler backend over `winapi::um::winspool`.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use winapi::shared::minwindef::{DWORD, LPBYTE, LPVOID};
use winapi::shared::winerror::ERROR_INSUFFICIENT_BUFFER;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::winnt::HANDLE;
use winapi::um::winspool::{
    ClosePrinter, DOC_INFO_1W, DRIVER_INFO_3W, EndDocPrinter, EndPagePrinter, GetPrinterDriverW,
    OpenPrinterW, PRINTER_DEFAULTSW, SetJobW, StartDocPrinterW, StartPagePrinter, WritePrinter,
};

use rawspool_core::types::{DataType, PrinterAccess, QueryPhase};

use crate::driver::{multi_sz_len, parse_multi_sz};
use crate::spooler::{DriverQueryError, NativeError, NativeResult, RawHandle, Spooler};

const JOB_CONTROL_PAUSE: DWORD = 1;

/// The local Windows print spooler.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinSpooler;

impl WinSpooler {
    pub fn new() -> Self {
        Self
    }
}

/// NUL-terminated UTF-16 copy of `s`.
fn wide(s: &str) -> Vec<u16> {
    OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

fn last_error() -> NativeError {
    NativeError::new(unsafe { GetLastError() })
}

fn check(ok: i32) -> NativeResult<()> {
    if ok == 0 { Err(last_error()) } else { Ok(()) }
}

fn raw(handle: RawHandle) -> HANDLE {
    handle.0 as HANDLE
}

/// View a `MULTI_SZ` block, including its terminating empty string.
///
/// # Safety
/// `ptr` must be null or point to a double-NUL-terminated UTF-16 block that
/// outlives the returned slice.
unsafe fn multi_sz_block<'a>(ptr: *const u16) -> &'a [u16] {
    if ptr.is_null() {
        return &[];
    }
    let len = multi_sz_len((0..).map(|i| unsafe { *ptr.add(i) }));
    unsafe { std::slice::from_raw_parts(ptr, len) }
}

impl Spooler for WinSpooler {
    fn open_printer(&self, printer_name: &str, access: PrinterAccess) -> NativeResult<RawHandle> {
        let mut name = wide(printer_name);
        let mut defaults = PRINTER_DEFAULTSW {
            pDatatype: ptr::null_mut(),
            pDevMode: ptr::null_mut(),
            DesiredAccess: access.mask(),
        };
        let mut handle: HANDLE = ptr::null_mut();
        check(unsafe { OpenPrinterW(name.as_mut_ptr(), &mut handle, &mut defaults) })?;
        Ok(RawHandle(handle as isize))
    }

    fn close_printer(&self, handle: RawHandle) -> NativeResult<()> {
        check(unsafe { ClosePrinter(raw(handle)) })
    }

    fn start_doc_printer(
        &self,
        handle: RawHandle,
        document_name: &str,
        data_type: DataType,
    ) -> NativeResult<u32> {
        let mut doc_name = wide(document_name);
        let mut tag = wide(data_type.as_tag());
        let mut info = DOC_INFO_1W {
            pDocName: doc_name.as_mut_ptr(),
            pOutputFile: ptr::null_mut(),
            pDatatype: tag.as_mut_ptr(),
        };
        let id = unsafe { StartDocPrinterW(raw(handle), 1, &mut info as *mut DOC_INFO_1W as LPBYTE) };
        if id == 0 { Err(last_error()) } else { Ok(id) }
    }

    fn end_doc_printer(&self, handle: RawHandle) -> NativeResult<()> {
        check(unsafe { EndDocPrinter(raw(handle)) })
    }

    fn start_page_printer(&self, handle: RawHandle) -> NativeResult<()> {
        check(unsafe { StartPagePrinter(raw(handle)) })
    }

    fn end_page_printer(&self, handle: RawHandle) -> NativeResult<()> {
        check(unsafe { EndPagePrinter(raw(handle)) })
    }

    fn write_printer(&self, handle: RawHandle, data: &[u8]) -> NativeResult<usize> {
        // A single call can carry at most u32::MAX bytes; the session treats
        // the shortfall as a failed write.
        let len = DWORD::try_from(data.len()).unwrap_or(DWORD::MAX);
        let mut written: DWORD = 0;
        check(unsafe {
            WritePrinter(raw(handle), data.as_ptr() as LPVOID, len, &mut written)
        })?;
        Ok(written as usize)
    }

    fn pause_job(&self, handle: RawHandle, job_id: u32) -> NativeResult<()> {
        check(unsafe { SetJobW(raw(handle), job_id, 0, ptr::null_mut(), JOB_CONTROL_PAUSE) })
    }

    fn driver_dependent_files(
        &self,
        handle: RawHandle,
    ) -> std::result::Result<Vec<String>, DriverQueryError> {
        let mut needed: DWORD = 0;
        let probed = unsafe {
            GetPrinterDriverW(raw(handle), ptr::null_mut(), 3, ptr::null_mut(), 0, &mut needed)
        };
        let code = unsafe { GetLastError() };
        if probed != 0 || code != ERROR_INSUFFICIENT_BUFFER {
            return Err(DriverQueryError {
                phase: QueryPhase::Probe,
                code,
            });
        }

        // u64 backing keeps DRIVER_INFO_3W suitably aligned.
        let mut buffer = vec![0u64; (needed as usize).div_ceil(8)];
        let fetched = unsafe {
            GetPrinterDriverW(
                raw(handle),
                ptr::null_mut(),
                3,
                buffer.as_mut_ptr() as LPBYTE,
                needed,
                &mut needed,
            )
        };
        if fetched == 0 {
            return Err(DriverQueryError {
                phase: QueryPhase::Fetch,
                code: unsafe { GetLastError() },
            });
        }

        let info = unsafe { &*(buffer.as_ptr() as *const DRIVER_INFO_3W) };
        let block = unsafe { multi_sz_block(info.pDependentFiles) };
        Ok(parse_multi_sz(block))
    }
}
