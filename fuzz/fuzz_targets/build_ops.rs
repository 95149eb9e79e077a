#![no_main]
use fstrie::bits::read_bit;
use fstrie::FstBuilder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<Vec<u8>>| {
    // 0xFF is the reserved terminator label.
    let mut keys: Vec<Vec<u8>> = data
        .into_iter()
        .map(|key| key.into_iter().filter(|&b| b != 0xFF).collect())
        .collect();
    keys.sort();
    if keys.is_empty() {
        return;
    }

    let fst = FstBuilder::new().build(&keys).unwrap();

    keys.dedup();
    assert_eq!(fst.num_keys(), keys.len());

    // LOUDS popcount matches the maintained node count, and every
    // sparse level opens with a node start.
    let start = fst.sparse_start_level();
    for (rel, labels) in fst.labels().iter().enumerate() {
        let louds = &fst.louds_bits()[rel];
        let ones = (0..labels.len()).filter(|&p| read_bit(louds, p)).count();
        assert_eq!(ones, fst.node_counts()[start + rel]);
        assert!(read_bit(louds, 0));
    }

    // A dense child indicator always has a matching label bit.
    for (level, labels) in fst.bitmap_labels().iter().enumerate() {
        let children = &fst.bitmap_child_indicator_bits()[level];
        for (label_word, child_word) in labels.iter().zip(children.iter()) {
            assert_eq!(child_word & !label_word, 0);
        }
    }
});
