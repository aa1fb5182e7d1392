#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz a single environment's host list in isolation
        if let Ok(value) = serde_yaml_ng::from_str::<serde_yaml_ng::Value>(content) {
            let _ = arbor::parse_environment(&value, "projects.fuzz.web.production");
        }
    }
});
