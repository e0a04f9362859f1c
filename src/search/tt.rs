use crate::board::Side;

/// A solved node: exact verdict for (board, side to move, plies left).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: u64,
    pub side: Side,
    pub remaining: u32,
    pub win: bool,
}

impl Entry {
    fn matches(&self, key: u64, side: Side, remaining: u32) -> bool {
        self.key == key && self.side == side && self.remaining == remaining
    }
}

const DEFAULT_WAYS: usize = 4;

#[derive(Default, Clone, Copy)]
struct Bucket {
    slots: [Option<Entry>; DEFAULT_WAYS],
}

/// Fixed-capacity, single-owner table of exact search results.
#[derive(Default)]
pub struct Tt {
    buckets: Vec<Bucket>,
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

impl Tt {
    pub fn new() -> Self { Self { buckets: Vec::new() } }

    pub fn with_capacity(entries: usize) -> Self {
        let mut t = Self::new();
        t.set_capacity_entries(entries);
        t
    }

    pub fn clear(&mut self) {
        for b in &mut self.buckets { *b = Bucket::default(); }
    }

    fn bucket_index(&self, key: u64, side: Side, remaining: u32) -> usize {
        let mixed = splitmix64(key ^ ((remaining as u64) << 1 | side.index() as u64).rotate_right(7));
        (mixed as usize) % self.buckets.len().max(1)
    }

    pub fn get(&self, key: u64, side: Side, remaining: u32) -> Option<bool> {
        if self.buckets.is_empty() { return None; }
        let b = &self.buckets[self.bucket_index(key, side, remaining)];
        b.slots.iter().flatten().find(|e| e.matches(key, side, remaining)).map(|e| e.win)
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.slots.iter().flatten().count()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn set_capacity_entries(&mut self, cap: usize) {
        let entries = cap.max(DEFAULT_WAYS);
        let buckets = (entries + DEFAULT_WAYS - 1) / DEFAULT_WAYS;
        self.buckets.clear();
        self.buckets.resize(buckets, Bucket::default());
    }

    pub fn put(&mut self, e: Entry) {
        if self.buckets.is_empty() { return; }
        let idx = self.bucket_index(e.key, e.side, e.remaining);
        let b = &mut self.buckets[idx];
        // Same node: results are exact, so just overwrite.
        if let Some(slot) = b.slots.iter_mut().find(|s| s.map_or(false, |cur| cur.matches(e.key, e.side, e.remaining))) {
            *slot = Some(e);
            return;
        }
        if let Some(slot) = b.slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some(e);
            return;
        }
        // Evict the shallowest subtree; it is the cheapest to recompute.
        let mut victim = 0usize;
        let mut least = u32::MAX;
        for (i, slot) in b.slots.iter().enumerate() {
            if let Some(cur) = slot {
                if cur.remaining < least { least = cur.remaining; victim = i; }
            }
        }
        b.slots[victim] = Some(e);
    }
}
