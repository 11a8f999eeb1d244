use std::collections::HashSet;

use crate::foundation::math::SplitMix64;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const PREFIX: char = 'u';

/// Shortest token accepted by [`UniqueIdPool::new`].
pub const MIN_TOKEN_LEN: usize = 4;
/// Longest token accepted by [`UniqueIdPool::new`].
pub const MAX_TOKEN_LEN: usize = 12;

#[derive(Debug)]
/// Document-unique identifiers for `<defs>` references.
///
/// Ids stay reserved until released, so two live instances never share one.
pub struct UniqueIdPool {
    rng: SplitMix64,
    token_len: usize,
    issued: HashSet<String>,
}

impl UniqueIdPool {
    /// `token_len` is clamped to `MIN_TOKEN_LEN..=MAX_TOKEN_LEN`.
    pub fn new(seed: u64, token_len: usize) -> Self {
        Self {
            rng: SplitMix64::new(seed),
            token_len: token_len.clamp(MIN_TOKEN_LEN, MAX_TOKEN_LEN),
            issued: HashSet::new(),
        }
    }

    pub fn allocate(&mut self) -> String {
        loop {
            let id = self.token();
            if self.issued.insert(id.clone()) {
                return id;
            }
            tracing::trace!(%id, "unique id collision, drawing again");
        }
    }

    /// Returns `false` if `id` was not issued by this pool.
    pub fn release(&mut self, id: &str) -> bool {
        self.issued.remove(id)
    }

    pub fn is_issued(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    fn token(&mut self) -> String {
        let mut out = String::with_capacity(self.token_len + 1);
        out.push(PREFIX);
        let mut bits = self.rng.next_u64();
        for _ in 0..self.token_len {
            out.push(ALPHABET[(bits % 36) as usize] as char);
            bits /= 36;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/identity/unique.rs"]
mod tests;
