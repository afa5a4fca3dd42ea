/// Generates collection-scoped record ids: a fixed prefix plus a
/// monotonically increasing counter, zero-padded to three digits
/// ("P001", "INV012"). Counters never reuse an id after deletion, and
/// ids are only unique within their own collection.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: u32,
}

impl IdSequence {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// Seed the counter past any preloaded ids so demo data and fresh
    /// inserts never collide.
    pub fn seeded_from<'a>(prefix: &'static str, existing: impl Iterator<Item = &'a str>) -> Self {
        let max = existing
            .filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        Self {
            prefix,
            next: max + 1,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{:03}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
