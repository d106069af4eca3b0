use huffman::{decode, encode};

fn main() {
    let corpus = "the quick brown fox jumps over the lazy dog ".repeat(250);
    let input: Vec<char> = corpus.chars().collect();

    for _ in 0..1000 {
        let (bits, tree) = encode(&input);
        let output = decode(&bits, &tree);
        assert_eq!(output.len(), input.len());
    }
}
