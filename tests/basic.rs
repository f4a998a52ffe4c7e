use samplering::{Error, RingBuffer};

#[test]
fn basic_push_next_roundtrip() {
    let mut rb = RingBuffer::new(5).expect("capacity 5");

    rb.push(1.0);
    rb.push(2.0);
    rb.push(3.0);
    rb.push(4.0);

    // Drain past the end: FIFO order, then absence instead of an error.
    let mut out = Vec::new();
    for _ in 0..10 {
        if let Some(n) = rb.next() {
            out.push(n);
        }
    }
    assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn zero_capacity_rejected() {
    assert_eq!(RingBuffer::<f32>::new(0).unwrap_err(), Error::InvalidCapacity);
}

#[test]
fn consumer_keeping_pace_never_fills() {
    let mut rb = RingBuffer::new(100).expect("capacity 100");

    for i in 0..200u32 {
        rb.push(i);
        assert_eq!(rb.next(), Some(i));
        assert!(rb.is_empty());
    }

    assert_eq!(rb.read_pos(), 0);
    assert_eq!(rb.write_pos(), 0);
}

#[test]
fn full_buffer_overwrites_oldest() {
    let mut rb = RingBuffer::new(1).expect("capacity 1");

    rb.push(7);
    rb.push(8); // 7 is discarded

    assert_eq!(rb.next(), Some(8));
    assert_eq!(rb.next(), None);
}

#[test]
fn wrapped_drain_takes_two_block_reads() {
    let mut rb = RingBuffer::new(8).expect("capacity 8");

    // Advance both cursors, then refill past the physical end.
    rb.push_block(&[0u8; 6]);
    assert_eq!(rb.next_block(), Some(vec![0; 6]));
    rb.push_block(&[1, 2, 3, 4, 5]); // slots 6, 7, 0, 1, 2

    assert_eq!(rb.next_block(), Some(vec![1, 2]));
    assert_eq!(rb.next_block(), Some(vec![3, 4, 5]));
    assert_eq!(rb.next_block(), None);
}
