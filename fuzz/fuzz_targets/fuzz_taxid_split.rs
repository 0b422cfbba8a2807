#![no_main]

use libfuzzer_sys::fuzz_target;

use ustid::VatId;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The strict split must round-trip any input unchanged.
        assert_eq!(VatId::split_strict(s).prefixed(), s);
        let _ = ustid::require_plausible(s);
        let _ = VatId::split_lenient(s, "DE");
    }
});
