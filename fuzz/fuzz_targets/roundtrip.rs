#![no_main]
use libfuzzer_sys::fuzz_target;
use seqcodec::{normalize_sequence, ArithmeticCoder, Lz78Coder};

fuzz_target!(|input: Vec<String>| {
    if input.is_empty() || input.len() > 256 {
        return;
    }
    let expected = normalize_sequence(&input);

    let lz = Lz78Coder::new();
    let encoded = lz.encode(&input).unwrap();
    let decoded = lz.decode(&encoded.bits, input.len(), &encoded.alphabet).unwrap();
    assert_eq!(decoded, expected);

    let ac = ArithmeticCoder::new();
    let encoded = ac.encode(&input).unwrap();
    if encoded.exact {
        let decoded = ac.decode(&encoded.bits, input.len(), &encoded.symbols).unwrap();
        assert_eq!(decoded, expected);
    }
});
