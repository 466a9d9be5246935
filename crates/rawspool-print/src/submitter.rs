// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raw job submission.
//
// Drives one `PrinterSession` through a complete job:
//
//   open -> query driver -> start doc -> [pause] -> notify -> start page ->
//   write* -> end page -> (start page, end page) x (pages - 1) -> end doc ->
//   close
//
// End-document and close run on every exit path once their matching start
// succeeded. When one of them fails while an earlier step has already
// failed, the cleanup failure is logged and the earlier error is returned.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use rawspool_core::config::SpoolConfig;
use rawspool_core::error::{RawSpoolError, Result};
use rawspool_core::types::{JobCreated, JobId, JobOptions};

use crate::driver::classify_driver;
use crate::session::PrinterSession;
use crate::spooler::Spooler;

/// Callback told about each job right after it is created.
pub type JobCreatedObserver = Box<dyn Fn(&JobCreated) + Send + Sync>;

/// Submits pre-rendered printer data to spool queues.
pub struct JobSubmitter<S = Box<dyn Spooler>> {
    spooler: S,
    config: SpoolConfig,
    observer: Option<JobCreatedObserver>,
}

impl JobSubmitter {
    /// A submitter backed by this platform's print spooler.
    pub fn platform() -> Self {
        Self::new(crate::platform_spooler())
    }
}

impl<S: Spooler> JobSubmitter<S> {
    pub fn new(spooler: S) -> Self {
        Self {
            spooler,
            config: SpoolConfig::default(),
            observer: None,
        }
    }

    pub fn with_config(spooler: S, config: SpoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            spooler,
            config,
            observer: None,
        })
    }

    pub fn config(&self) -> &SpoolConfig {
        &self.config
    }

    pub fn spooler(&self) -> &S {
        &self.spooler
    }

    /// Set the job-created observer, replacing any previous one.
    ///
    /// It runs synchronously on the submitting thread, after the optional
    /// pause and before any page data is written.
    pub fn on_job_created<F>(&mut self, observer: F)
    where
        F: Fn(&JobCreated) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Submit the whole of `source` (from offset zero) as one job.
    #[instrument(
        skip_all,
        fields(
            printer = printer_name,
            document = document_name,
            paused = options.paused,
            pages = options.page_count
        )
    )]
    pub fn submit<R: Read + Seek + ?Sized>(
        &self,
        printer_name: &str,
        source: &mut R,
        document_name: &str,
        options: &JobOptions,
    ) -> Result<()> {
        if printer_name.is_empty() {
            return Err(RawSpoolError::InvalidArgument(
                "printer name must not be empty".into(),
            ));
        }
        if options.page_count == 0 {
            return Err(RawSpoolError::InvalidArgument(
                "page count must be at least 1".into(),
            ));
        }

        let mut session =
            PrinterSession::open(&self.spooler, printer_name, self.config.desired_access)?;
        let outcome = self.run_document(&mut session, source, document_name, options);
        let closed = session.close();
        keep_first_error(outcome, closed, "close printer")?;

        info!("job submitted");
        Ok(())
    }

    /// Submit a file. The document name defaults to the path.
    pub fn submit_file(
        &self,
        printer_name: &str,
        path: impl AsRef<Path>,
        document_name: Option<&str>,
        options: &JobOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let fallback = path.display().to_string();
        let document_name = document_name.unwrap_or(&fallback);
        self.submit(printer_name, &mut file, document_name, options)
    }

    fn run_document<R: Read + Seek + ?Sized>(
        &self,
        session: &mut PrinterSession<'_, S>,
        source: &mut R,
        document_name: &str,
        options: &JobOptions,
    ) -> Result<()> {
        let data_type = classify_driver(&session.query_dependent_files()?);
        let job_id = session.begin_document(document_name, data_type)?;

        let outcome = self.fill_document(session, job_id, source, options);
        let ended = session.end_document();
        keep_first_error(outcome, ended, "end document")
    }

    fn fill_document<R: Read + Seek + ?Sized>(
        &self,
        session: &mut PrinterSession<'_, S>,
        job_id: JobId,
        source: &mut R,
        options: &JobOptions,
    ) -> Result<()> {
        if options.paused {
            session.pause_job()?;
        }

        if let Some(observer) = &self.observer {
            observer(&JobCreated {
                id: job_id,
                printer_name: session.printer_name().to_string(),
            });
        }

        session.begin_page()?;
        let streamed = self.stream_payload(session, source);
        let ended = session.end_page();
        let total = match streamed {
            Ok(total) => {
                ended?;
                total
            }
            Err(e) => return keep_first_error(Err(e), ended, "end page"),
        };
        info!(%job_id, bytes = total, "payload written");

        // Declared pages past the first are empty; they only fix the
        // spooler's page count.
        for _ in 1..options.page_count {
            session.begin_page()?;
            session.end_page()?;
        }
        Ok(())
    }

    /// Copy `source` into the open page in `chunk_size` pieces.
    fn stream_payload<R: Read + Seek + ?Sized>(
        &self,
        session: &mut PrinterSession<'_, S>,
        source: &mut R,
    ) -> Result<u64> {
        source.seek(SeekFrom::Start(0))?;

        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut total: u64 = 0;
        loop {
            let read = match source.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            session.write_bytes(&buffer[..read])?;
            total += read as u64;
            debug!(chunk = read, total, "chunk written");
        }
        Ok(total)
    }
}

/// Combine a step's outcome with the cleanup that followed it. The first
/// failure wins; a cleanup failure after an earlier one is only logged.
fn keep_first_error(outcome: Result<()>, cleanup: Result<()>, step: &'static str) -> Result<()> {
    match (outcome, cleanup) {
        (Ok(()), cleanup) => cleanup,
        (Err(original), Ok(())) => Err(original),
        (Err(original), Err(cleanup_err)) => {
            warn!(step, error = %cleanup_err, "cleanup failed after an earlier error");
            Err(original)
        }
    }
}
