#![no_main]
use huffman::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (bits, tree) = encode(data);
    let output = decode(&bits, &tree);
    assert_eq!(data, output.as_slice());

    let table = tree.code_table();
    for code in table.values() {
        assert!(!code.is_empty());
        assert!(code.iter().all(|&b| b <= 1));
    }
});
