//! Properties of the capability-gated copy.

use proptest::prelude::*;
use tola_target::copy::{general_copy, general_copy_n, BitCursor, PushBack, SliceCursor, SliceOutput};

fn unpack(bytes: &[u8], len: usize) -> Vec<bool> {
    (0..len).map(|i| bytes[i / 8] & (1 << (i % 8)) != 0).collect()
}

proptest! {
    // Direct assignment: reference into a typed slot
    #[test]
    fn direct_copy_round_trips(src in proptest::collection::vec(any::<i64>(), 0..64)) {
        let mut dst = vec![0i64; src.len()];
        let (mut first, last) = SliceCursor::range(&src);
        let out = general_copy(&mut first, &last, SliceOutput::new(&mut dst));
        prop_assert_eq!(out.position(), src.len());
        prop_assert!(first == last);
        prop_assert_eq!(dst, src);
    }

    // Proxy references go through a temporary of the value type
    #[test]
    fn bit_copy_converts_through_value(bytes in proptest::collection::vec(any::<u8>(), 1..8), cut in 0usize..64) {
        let len = cut.min(bytes.len() * 8);
        let mut dst = vec![false; len];
        let (mut first, last) = BitCursor::range(&bytes, len);
        let out = general_copy(&mut first, &last, SliceOutput::new(&mut dst));
        prop_assert_eq!(out.position(), len);
        prop_assert_eq!(dst, unpack(&bytes, len));
    }

    // Untyped output slots
    #[test]
    fn push_back_collects_everything(src in proptest::collection::vec(any::<u16>(), 0..64)) {
        let mut sink: Vec<u16> = Vec::new();
        let (mut first, last) = SliceCursor::range(&src);
        let out = general_copy(&mut first, &last, PushBack::new(&mut sink));
        prop_assert_eq!(out.written(), src.len());
        prop_assert_eq!(sink, src);
    }

    #[test]
    fn copy_and_copy_n_agree(src in proptest::collection::vec(any::<u32>(), 0..64), seed in any::<usize>()) {
        let n = if src.is_empty() { 0 } else { seed % (src.len() + 1) };

        let mut by_end = vec![0u32; src.len()];
        let mut first_a = SliceCursor::new(&src);
        let mut last = SliceCursor::new(&src);
        for _ in 0..n {
            tola_target::copy::Cursor::advance(&mut last);
        }
        let out_a = general_copy(&mut first_a, &last, SliceOutput::new(&mut by_end));
        let pos_a = out_a.position();

        let mut by_count = vec![0u32; src.len()];
        let mut first_b = SliceCursor::new(&src);
        let out_b = general_copy_n(&mut first_b, n, SliceOutput::new(&mut by_count));
        let pos_b = out_b.position();

        prop_assert_eq!(pos_a, n);
        prop_assert_eq!(pos_a, pos_b);
        prop_assert!(first_a == first_b);
        prop_assert_eq!(first_b.position(), n);
        prop_assert_eq!(by_end, by_count);
    }
}

#[test]
fn test_zero_length_leaves_output_untouched() {
    let src = [1u8, 2, 3];
    let mut dst = [7u8; 3];
    let mut first = SliceCursor::new(&src);
    let last = first;
    let out = general_copy(&mut first, &last, SliceOutput::new(&mut dst));
    assert_eq!(out.position(), 0);
    assert_eq!(dst, [7, 7, 7]);
}
