use bitwords::{BitRing, Error, WordRing, WordsBuffer, WordsConfig};

#[test]
fn test_three_bit_stream_scenario() {
    let mut bits = BitRing::new(3).unwrap();
    let mut ring = WordRing::new(3, 4).unwrap();
    let stream = [1u8, 0, 1, 1, 0, 0];

    let mut outcomes = Vec::new();
    for &b in &stream {
        bits.insert_bit(b == 1);
        outcomes.push(ring.try_extract_and_store(&mut bits));
    }

    assert_eq!(outcomes[0], Err(Error::InsufficientBits { have: 1, need: 3 }));
    assert_eq!(outcomes[1], Err(Error::InsufficientBits { have: 2, need: 3 }));
    // Windows 101, 011, 110, 100.
    assert_eq!(outcomes[2], Ok(5));
    assert_eq!(outcomes[3], Ok(3));
    assert_eq!(outcomes[4], Ok(6));
    assert_eq!(outcomes[5], Ok(4));

    assert!(ring.is_full());
    assert_eq!(ring.iter().collect::<Vec<_>>(), vec![5, 3, 6, 4]);
    assert!(ring.matches_last(&[true, false, false]));

    // Two more zeros evict 5 and 3.
    for _ in 0..2 {
        bits.insert_bit(false);
        ring.try_extract_and_store(&mut bits).unwrap();
    }
    assert_eq!(ring.iter().collect::<Vec<_>>(), vec![6, 4, 0, 0]);
    let h = ring.histogram();
    assert_eq!(h.counts(), &[2, 0, 0, 0, 1, 0, 1, 0]);
    assert_eq!(h.get(5), 0);
}

#[test]
fn test_window_bits_read_across_storage_end() {
    let mut buf = WordsBuffer::new(WordsConfig::new(4, 8)).unwrap();
    buf.insert_bits([true, true, false, false]);
    buf.store_word().unwrap();
    buf.store_word().unwrap();
    buf.store_word().unwrap();

    // Window starts at cell 3: cells 3, 0, 1, 2.
    assert_eq!(buf.bits().window_start(), 3);
    assert_eq!(buf.current_window_bits(), vec![false, true, true, false]);
    assert_eq!(buf.peek_word().unwrap(), 0b0110);
}

#[test]
fn test_continuous_sliding_without_reset() {
    let mut buf = WordsBuffer::new(WordsConfig::new(2, 16)).unwrap();
    buf.insert_bits([true, false]);

    // Readiness persists across stores; the window keeps rotating.
    let words: Vec<u64> = (0..4).map(|_| buf.store_word().unwrap()).collect();
    assert_eq!(words, vec![0b10, 0b01, 0b10, 0b01]);
}

#[test]
fn test_overlapping_words() {
    let mut buf = WordsBuffer::new(WordsConfig::new(4, 8).with_overlap(2)).unwrap();
    let stream = [1u8, 1, 0, 1, 0, 0, 1, 1];

    buf.insert_bits(stream[..4].iter().map(|&b| b == 1));
    assert_eq!(buf.store_word().unwrap(), 0b1101);
    buf.insert_bits(stream[4..6].iter().map(|&b| b == 1));
    assert_eq!(buf.store_word().unwrap(), 0b0100);
    buf.insert_bits(stream[6..8].iter().map(|&b| b == 1));
    assert_eq!(buf.store_word().unwrap(), 0b0011);

    assert_eq!(buf.words().iter().collect::<Vec<_>>(), vec![13, 4, 3]);
}
