// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer driver metadata: decoding the dependent-file list and deciding
// which data type tag the driver wants.

use rawspool_core::types::DataType;

/// Dependent file shipped only by XPS-pipeline drivers.
pub const XPS_PIPELINE_MARKER: &str = "pipelineconfig.xml";

/// Decode a Win32 `MULTI_SZ` block: UTF-16 strings separated by NUL and
/// terminated by an empty string.
///
/// Decoding stops at the first empty string or at the end of the slice,
/// whichever comes first. Unpaired surrogates are replaced.
pub fn parse_multi_sz(block: &[u16]) -> Vec<String> {
    block
        .split(|&unit| unit == 0)
        .take_while(|entry| !entry.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}

/// Number of UTF-16 units in a `MULTI_SZ` block, counting the NUL of the
/// terminating empty string.
///
/// Reads `units` no further than that NUL. If the units run out first, the
/// number consumed is returned.
pub fn multi_sz_len(units: impl IntoIterator<Item = u16>) -> usize {
    let mut previous_was_nul = true;
    let mut len = 0;
    for unit in units {
        len += 1;
        if unit == 0 {
            if previous_was_nul {
                break;
            }
            previous_was_nul = true;
        } else {
            previous_was_nul = false;
        }
    }
    len
}

/// Whether any dependent file marks the driver as XPS-based.
pub fn is_xps_driver<S: AsRef<str>>(dependent_files: &[S]) -> bool {
    dependent_files
        .iter()
        .any(|file| ends_with_ignore_ascii_case(file.as_ref(), XPS_PIPELINE_MARKER))
}

/// Pick the data type tag for a driver from its dependent files.
pub fn classify_driver<S: AsRef<str>>(dependent_files: &[S]) -> DataType {
    if is_xps_driver(dependent_files) {
        DataType::XpsPass
    } else {
        DataType::Raw
    }
}

fn ends_with_ignore_ascii_case(value: &str, suffix: &str) -> bool {
    value
        .len()
        .checked_sub(suffix.len())
        .and_then(|start| value.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
