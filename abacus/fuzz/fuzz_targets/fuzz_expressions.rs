#![no_main]

use abacus::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let engine = Engine::new();

        if let Ok(response) = engine.explain(s) {
            // A canonical result must evaluate to itself
            let again = engine.evaluate(&response.result.to_string());
            assert_eq!(again, Ok(response.result));
        }
    }
});
