#![no_main]

use abacus::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|depth: u16| {
    let engine = Engine::new();

    let depth = (depth as usize % 512) + 1;

    let mut expr = String::from("1");
    for _ in 0..depth {
        expr = format!("sqrt({} + 1)", expr);
    }

    let result = engine.evaluate(&expr);
    assert_eq!(result.is_ok(), depth <= 256);
});
