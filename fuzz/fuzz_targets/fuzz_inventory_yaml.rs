#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use arbor::OutputFormat;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parse, compile and render; every stage may fail but none may panic
        let Ok(document) = arbor::parse_document(content, Path::new("fuzz.yml")) else {
            return;
        };
        if let Ok(inventory) = arbor::compile_inventory(&document) {
            let _ = arbor::render_inventory(&inventory, OutputFormat::Compact);
        }
    }
});
