// SPDX-License-Identifier: PMPL-1.0
#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &str| {
    // Filename parsing must reject arbitrary input without panicking.
    let _ = shotsort::scanner::parse_filename(Path::new(data));

    // Sanitization is total and idempotent.
    let once = shotsort::sanitize::sanitize(data);
    assert_eq!(shotsort::sanitize::sanitize(&once), once);
});
