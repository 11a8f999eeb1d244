use super::*;

#[test]
fn ids_are_prefixed_and_sized() {
    let mut pool = UniqueIdPool::new(7, 6);
    let id = pool.allocate();
    assert!(id.starts_with('u'));
    assert_eq!(id.len(), 7);
    assert!(id[1..].bytes().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn same_seed_same_sequence() {
    let mut a = UniqueIdPool::new(42, 8);
    let mut b = UniqueIdPool::new(42, 8);
    for _ in 0..16 {
        assert_eq!(a.allocate(), b.allocate());
    }
}

#[test]
fn issued_ids_are_distinct_until_released() {
    let mut pool = UniqueIdPool::new(1, MIN_TOKEN_LEN);
    let ids: Vec<_> = (0..2000).map(|_| pool.allocate()).collect();
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(pool.len(), ids.len());

    assert!(pool.release(&ids[0]));
    assert!(!pool.is_issued(&ids[0]));
    assert!(!pool.release(&ids[0]));
    assert_eq!(pool.len(), ids.len() - 1);
}

#[test]
fn token_len_is_clamped() {
    assert_eq!(UniqueIdPool::new(0, 0).allocate().len(), MIN_TOKEN_LEN + 1);
    assert_eq!(UniqueIdPool::new(0, 99).allocate().len(), MAX_TOKEN_LEN + 1);
}
