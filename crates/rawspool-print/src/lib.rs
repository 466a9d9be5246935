// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rawspool Print — raw job submission to the local print spooler.
//
// `JobSubmitter` frames opaque printer-ready bytes as a spooler job and
// streams them through a `PrinterSession`, which owns the printer handle.
// The native calls sit behind the `Spooler` trait so the whole flow runs
// off-Windows against the stub or an in-memory double.

pub mod driver;
pub mod session;
pub mod spooler;
pub mod submitter;

#[cfg(windows)]
pub mod winspool;

#[cfg(not(windows))]
pub mod stub;

#[cfg(test)]
mod testing;

pub use driver::{classify_driver, multi_sz_len, parse_multi_sz};
pub use session::PrinterSession;
pub use spooler::{NativeError, RawHandle, Spooler};
pub use submitter::{JobCreatedObserver, JobSubmitter};

/// The spooler for the target operating system.
pub fn platform_spooler() -> Box<dyn Spooler> {
    #[cfg(windows)]
    {
        Box::new(winspool::WinSpooler::new())
    }
    #[cfg(not(windows))]
    {
        // No print spooler: every open fails with ERROR_NOT_SUPPORTED.
        Box::new(stub::StubSpooler)
    }
}
