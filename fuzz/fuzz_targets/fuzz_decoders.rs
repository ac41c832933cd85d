//! Fuzz target for the decoders and value parsers.
//!
//! Malformed input must come back as `None`, never as a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ringtext::{NumberLocale, StrExt};

fuzz_target!(|data: &str| {
    let _ = data.base64_decoded();
    let _ = data.url_decoded();
    let _ = data.ascii_decoded(false);
    let _ = data.ascii_decoded(true);
    let _ = data.unicode_decoded();
    let _ = data.url_value();
    let _ = data.integer_value::<i64>();
    let _ = data.f64_value(NumberLocale::GERMAN);
    let _ = data.date_time_value();

    if let Some(encoded) = data.url_encoded() {
        assert_eq!(encoded.url_decoded().as_deref(), Some(data));
    }
    if let Some(encoded) = data.base64_encoded() {
        assert_eq!(encoded.base64_decoded().as_deref(), Some(data));
    }
});
