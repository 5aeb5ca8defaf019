#![no_main]
use libfuzzer_sys::fuzz_target;
use rrrbits::bitvec::BitVector;
use rrrbits::rrr::RrrVector;

fuzz_target!(|data: (Vec<u64>, usize, u8, u8)| {
    let (words, len_raw, u_raw, mult_raw) = data;
    if words.is_empty() {
        return;
    }

    let len = len_raw % (words.len() * 64);
    if len == 0 {
        return;
    }
    let block_nbits = (u_raw % 64) as u32 + 1;
    let marker_nbits = block_nbits * ((mult_raw % 8) as u32 + 1);

    let bits = BitVector::from_words(&words, len);
    let rrr = RrrVector::new(&bits, block_nbits, marker_nbits);

    // Check total rank
    let mut expected_total = 0;
    for i in 0..len {
        if (words[i / 64] >> (i % 64)) & 1 == 1 {
            expected_total += 1;
        }
    }

    assert_eq!(rrr.num_ones(), expected_total);
    assert_eq!(rrr.rank1(len), expected_total);

    // Check select1 for a random rank
    if expected_total > 0 {
        let k = (len_raw / 13) % expected_total;
        match rrr.select1(k) {
            Some(pos) => {
                assert!(pos < len);
                assert!(rrr.get(pos));
                assert_eq!(rrr.rank1(pos), k);
                assert_eq!(rrr.rank1(pos + 1), k + 1);
            }
            None => panic!("select1({k}) failed for expected_total={expected_total}"),
        }
    }

    // A serialized image must decode to an equivalent bitmap.
    let decoded = RrrVector::from_bytes(&rrr.to_bytes()).unwrap();
    assert_eq!(decoded.num_ones(), expected_total);
    assert_eq!(decoded.rank1(len / 2), rrr.rank1(len / 2));
});
