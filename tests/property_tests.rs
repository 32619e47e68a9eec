use proptest::prelude::*;
use seqcodec::tokenize::split_words;
use seqcodec::{normalize_sequence, ArithmeticCoder, Lz78Coder};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]",
        "[a-z]{2,5}",
        prop::sample::select(vec!["'", ",", ".", "42", "Ab"]).prop_map(String::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_arithmetic_roundtrip(input in prop::collection::vec(token(), 1..60)) {
        let coder = ArithmeticCoder::new();
        let encoded = coder.encode(&input).unwrap();
        let decoded = coder.decode(&encoded.bits, input.len(), &encoded.symbols).unwrap();
        prop_assert_eq!(decoded, normalize_sequence(&input));
    }

    #[test]
    fn test_lz78_roundtrip(input in prop::collection::vec(token(), 1..300)) {
        let coder = Lz78Coder::new();
        let encoded = coder.encode(&input).unwrap();
        let decoded = coder.decode(&encoded.bits, input.len(), &encoded.alphabet).unwrap();
        prop_assert_eq!(decoded, normalize_sequence(&input));
    }

    #[test]
    fn test_encoding_is_deterministic(input in prop::collection::vec(token(), 1..40)) {
        let ac = ArithmeticCoder::new();
        prop_assert_eq!(ac.encode(&input).unwrap(), ac.encode(&input).unwrap());
        let lz = Lz78Coder::new();
        prop_assert_eq!(lz.encode(&input).unwrap(), lz.encode(&input).unwrap());
    }

    #[test]
    fn test_symbols_in_first_occurrence_order(input in prop::collection::vec(token(), 1..40)) {
        let normalized = normalize_sequence(&input);
        let mut expected: Vec<String> = Vec::new();
        for t in &normalized {
            if !expected.contains(t) {
                expected.push(t.clone());
            }
        }
        prop_assert_eq!(&ArithmeticCoder::new().encode(&input).unwrap().symbols, &expected);
        prop_assert_eq!(&Lz78Coder::new().encode(&input).unwrap().alphabet, &expected);
    }

    #[test]
    fn test_arbitrary_bits_never_panic(
        bits in "[01xz ]{0,200}",
        length in 0usize..64,
        alphabet in prop::collection::vec("[a-z]{1,3}", 1..6),
    ) {
        let decoded = ArithmeticCoder::new().decode(&bits, length, &alphabet).unwrap();
        prop_assert!(decoded.len() <= length);
        let decoded = Lz78Coder::new().decode(&bits, length, &alphabet).unwrap();
        prop_assert!(decoded.len() <= length);
    }
}

#[test]
fn test_sentence_roundtrip_both_coders() {
    let input = split_words("to be or not to be that is the question to be");

    let ac = ArithmeticCoder::new();
    let encoded = ac.encode(&input).unwrap();
    assert!(encoded.efficiency(input.len()) < 1.0);
    assert_eq!(ac.decode(&encoded.bits, input.len(), &encoded.symbols).unwrap(), input);

    let lz = Lz78Coder::new();
    let encoded = lz.encode(&input).unwrap();
    assert_eq!(lz.decode(&encoded.bits, input.len(), &encoded.alphabet).unwrap(), input);
}

#[test]
fn test_prefix_reencoding_still_decodes() {
    let long = split_words("a b a b c a b c d a b c d e");
    let short = &long[..7];
    let lz = Lz78Coder::new();

    let encoded = lz.encode(short).unwrap();
    assert_eq!(lz.decode(&encoded.bits, short.len(), &encoded.alphabet).unwrap(), short);

    let wrong = lz.decode(&encoded.bits, long.len(), &encoded.alphabet).unwrap();
    assert!(wrong.len() <= long.len());
}
