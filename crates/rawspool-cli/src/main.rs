// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rawspool — raw print submission from the command line.
//
// Entry point. Initialises logging, parses arguments, and submits one job.

mod cli;

use clap::Parser;

use rawspool_core::human_errors::humanize_error;
use rawspool_print::{JobSubmitter, platform_spooler};

use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Print {
            printer,
            file,
            name,
            paused,
            pages,
            access,
            chunk_size,
            json,
        } => {
            let config = cli::spool_config(access, chunk_size);
            let options = cli::job_options(paused, pages);
            JobSubmitter::with_config(platform_spooler(), config).and_then(|mut submitter| {
                submitter.on_job_created(move |event| {
                    if json {
                        match serde_json::to_string(event) {
                            Ok(line) => println!("{line}"),
                            Err(e) => tracing::warn!(error = %e, "could not encode job event"),
                        }
                    } else {
                        println!("job {} created on {}", event.id, event.printer_name);
                    }
                });
                submitter.submit_file(&printer, &file, name.as_deref(), &options)
            })
        }
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "submission failed");
        let human = humanize_error(&err);
        eprintln!("{}", human.message);
        eprintln!("{}", human.suggestion);
        std::process::exit(1);
    }
}
