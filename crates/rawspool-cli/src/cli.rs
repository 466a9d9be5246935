// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use rawspool_core::config::{DEFAULT_CHUNK_SIZE, SpoolConfig};
use rawspool_core::types::{JobOptions, PrinterAccess};

/// Send printer-ready data (ZPL, PostScript, XPS, ...) straight to a print queue.
#[derive(Debug, Parser)]
#[command(name = "rawspool", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Submit a file to a printer as a single raw job
    Print {
        /// Printer name as shown in the system printer list
        #[arg(value_name = "PRINTER")]
        printer: String,

        /// File holding the printer-ready bytes
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Document name shown in the queue. Default: the file path
        #[arg(long)]
        name: Option<String>,

        /// Hold the job in the queue instead of printing it
        #[arg(long)]
        paused: bool,

        /// Page count to declare to the spooler
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// Access to request when opening the printer
        #[arg(long, value_enum, default_value_t = AccessArg::Use)]
        access: AccessArg,

        /// Bytes per spooler write
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Print the job-created event as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AccessArg {
    Use,
    Administer,
}

impl From<AccessArg> for PrinterAccess {
    fn from(arg: AccessArg) -> Self {
        match arg {
            AccessArg::Use => PrinterAccess::Use,
            AccessArg::Administer => PrinterAccess::Administer,
        }
    }
}

pub fn spool_config(access: AccessArg, chunk_size: usize) -> SpoolConfig {
    SpoolConfig {
        chunk_size,
        desired_access: access.into(),
    }
}

pub fn job_options(paused: bool, pages: u32) -> JobOptions {
    JobOptions {
        paused,
        page_count: pages,
    }
}
