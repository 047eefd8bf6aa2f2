#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(reference) = vxi::query::parse_reference(data) {
        // Anything accepted must survive a display round trip
        let again = vxi::query::parse_reference(&reference.to_string());
        assert!(again.is_some());
    }
});
