#![no_main]
use libfuzzer_sys::fuzz_target;
use seqcodec::{ArithmeticCoder, Lz78Coder};

fuzz_target!(|data: (Vec<bool>, u8, Vec<String>)| {
    let (raw, length, alphabet) = data;
    if alphabet.is_empty() {
        return;
    }
    let bits: String = raw.iter().map(|&b| if b { '1' } else { '0' }).collect();
    let length = length as usize;

    let decoded = ArithmeticCoder::new()
        .with_max_tokens(64)
        .decode(&bits, length, &alphabet)
        .unwrap();
    assert!(decoded.len() <= length);

    let decoded = Lz78Coder::new().decode(&bits, length, &alphabet).unwrap();
    assert!(decoded.len() <= length);
});
