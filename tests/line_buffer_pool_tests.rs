use demosaic_stream::linebuffer::*;

#[test]
fn fill_starts_with_the_reserved_slot() {
    let pool = LineBufferPool::<u8>::new(8, BUFFER_SIZE);

    assert_eq!(pool.fill_count(), 1);
}

#[test]
#[should_panic]
fn rejects_pools_smaller_than_four() {
    LineBufferPool::<u8>::new(8, 3);
}

#[test]
fn read_cursors_expose_three_adjacent_lines() {
    let mut pool = LineBufferPool::<u8>::new(4, BUFFER_SIZE);

    // Three lines: 10.., 20.., 30..
    for line in 0..3u8 {
        for column in 0..4 {
            pool.write(column, (line + 1) * 10 + column as u8);
        }
        pool.advance_write();
    }

    // Before any retire the centre cursor sits on the first written line
    assert_eq!(pool.read1(0), 10);
    assert_eq!(pool.read1(3), 13);
    assert_eq!(pool.read2(0), 20);

    // The top cursor sits on the reserved slot, which was never written
    assert_eq!(pool.read0(0), 0);

    // After one retire the three cursors cover the three written lines
    pool.advance_read1();
    assert_eq!(pool.read0(1), 11);
    assert_eq!(pool.read1(1), 21);
    assert_eq!(pool.read2(1), 31);
}

#[test]
fn write_advance_raises_the_fill_level() {
    let mut pool = LineBufferPool::<u8>::new(4, BUFFER_SIZE);

    pool.advance_write();
    pool.advance_write();

    assert_eq!(pool.fill_count(), 3);
}

#[test]
fn retires_lower_the_fill_level() {
    let mut pool = LineBufferPool::<u8>::new(4, BUFFER_SIZE);

    pool.advance_write();
    pool.advance_write();
    pool.advance_write();
    pool.advance_read1();

    assert_eq!(pool.fill_count(), 3);

    pool.advance_read2();

    assert_eq!(pool.fill_count(), 1);
}

#[test]
fn same_tick_write_advance_and_retire_cancel() {
    let mut pool = LineBufferPool::<u8>::new(4, BUFFER_SIZE);

    pool.advance_write();
    let before = pool.fill_count();

    // Both advances land within one tick of the core: the fill level is unchanged
    pool.advance_write();
    pool.advance_read1();

    assert_eq!(pool.fill_count(), before);
}

#[test]
fn two_line_retire_moves_all_cursors_two_buffers() {
    let mut pool = LineBufferPool::<u8>::new(2, BUFFER_SIZE);

    for line in 0..4u8 {
        pool.write(0, line + 1);
        pool.write(1, line + 1);
        pool.advance_write();
    }

    pool.advance_read2();

    // The base cursor moved from the reserved slot across the first written line
    assert_eq!(pool.read0(0), 2);
    assert_eq!(pool.read1(0), 3);
    assert_eq!(pool.read2(0), 4);
}

#[test]
fn fill_level_stays_within_bounds() {
    let mut pool = LineBufferPool::<u8>::new(4, BUFFER_SIZE);

    for _ in 0..4 {
        assert!(pool.fill_count() < BUFFER_SIZE);
        pool.advance_write();
        assert!(pool.fill_count() <= BUFFER_SIZE);
    }

    for _ in 0..5 {
        pool.advance_read1();
    }

    assert_eq!(pool.fill_count(), 0);
}
