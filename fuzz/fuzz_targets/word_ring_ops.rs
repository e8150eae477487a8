#![no_main]
use bitwords::{BitRing, WordRing};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, Vec<u8>)| {
    let (len_raw, max_raw, overlap_raw, ops) = data;
    let word_length = (len_raw % 16) as usize + 1;
    let max_words = (max_raw % 32) as usize + 1;

    let overlap = overlap_raw as usize;
    let ring = if overlap_raw & 0x80 != 0 {
        WordRing::new(word_length, max_words)
    } else {
        WordRing::with_overlap(word_length, max_words, overlap % (word_length + 1))
    };
    let mut ring = match ring {
        Ok(ring) => ring,
        Err(_) => {
            assert!(overlap % (word_length + 1) >= word_length);
            return;
        }
    };
    let mut bits = BitRing::new(word_length).unwrap();

    for op in ops {
        match op % 4 {
            0 | 1 => bits.insert_bit(op & 0x10 != 0),
            2 => {
                let ready = bits.is_ready();
                let start = bits.window_start();
                match ring.try_extract_and_store(&mut bits) {
                    Ok(value) => {
                        assert!(ready);
                        assert!(value < (1u64 << word_length));
                        assert_eq!(ring.last(), Some(value));
                    }
                    Err(_) => {
                        assert!(!ready);
                        assert_eq!(bits.window_start(), start);
                    }
                }
            }
            _ => bits.reset(),
        }
        assert!(bits.window_start() < word_length);
        assert!(bits.write_cursor() < word_length);
        assert!(ring.len() <= max_words);
    }

    let h = ring.histogram();
    assert_eq!(h.total(), ring.len() as u64);
});
