use huffman::{decode, encode, Node};
use proptest::prelude::*;

fn weights_consistent<S>(node: &Node<S>) -> bool {
    match node {
        Node::Leaf { .. } => true,
        Node::Inner {
            left,
            right,
            weight,
        } => {
            let child_sum = left.weight() + right.as_deref().map_or(0, |r| r.weight());
            *weight == child_sum
                && weights_consistent(left)
                && right.as_deref().map_or(true, weights_consistent)
        }
    }
}

proptest! {
    #[test]
    fn test_roundtrip_bytes(input in prop::collection::vec(any::<u8>(), 0..200)) {
        let (bits, tree) = encode(&input);
        prop_assert_eq!(decode(&bits, &tree), input);
    }

    #[test]
    fn test_roundtrip_text(text in ".*") {
        let input: Vec<char> = text.chars().collect();
        let (bits, tree) = encode(&input);
        prop_assert_eq!(decode(&bits, &tree), input);
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(any::<u8>(), 1..200)) {
        let (_, tree) = encode(&input);
        let table = tree.code_table();
        let codes: Vec<&[u8]> = table.values().map(|c| c.as_slice()).collect();
        for i in 0..codes.len() {
            for j in 0..codes.len() {
                if i != j {
                    prop_assert!(!codes[i].starts_with(codes[j]));
                }
            }
        }
    }

    #[test]
    fn test_encoded_length_matches_table(input in prop::collection::vec(any::<u8>(), 0..200)) {
        let (bits, tree) = encode(&input);
        let table = tree.code_table();
        let expected: usize = input.iter().map(|s| table[s].len()).sum();
        prop_assert_eq!(bits.len(), expected);
    }

    #[test]
    fn test_frequency_conservation(input in prop::collection::vec(any::<u8>(), 0..200)) {
        let (_, tree) = encode(&input);
        prop_assert_eq!(tree.weight(), input.len() as u64);
        if let Some(root) = tree.root() {
            prop_assert!(weights_consistent(root));
        }
        let distinct = input.iter().collect::<std::collections::HashSet<_>>().len();
        prop_assert_eq!(tree.leaf_count(), distinct);
    }
}
