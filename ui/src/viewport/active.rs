use super::observer::ObserverEntry;
use crate::config::TieBreak;

/// Tracks which section the navbar highlights.
///
/// Fed with the entry batches of a repeating observer over every section.
/// Keys must be given in document order.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker<K> {
    order: Vec<K>,
    intersecting: Vec<K>,
    active: Option<K>,
    tie_break: TieBreak,
}

impl<K> ActiveSectionTracker<K>
where
    K: Copy + PartialEq,
{
    pub fn new(order: Vec<K>, tie_break: TieBreak) -> Self {
        Self {
            order,
            intersecting: Vec::new(),
            active: None,
            tie_break,
        }
    }

    pub fn with_initial(mut self, active: K) -> Self {
        self.active = Some(active);
        self
    }

    pub fn active(&self) -> Option<K> {
        self.active
    }

    fn position(&self, key: K) -> usize {
        self.order
            .iter()
            .position(|k| *k == key)
            .unwrap_or(usize::MAX)
    }

    fn topmost<'a>(&self, keys: impl Iterator<Item = &'a K>) -> Option<K>
    where
        K: 'a,
    {
        keys.copied().min_by_key(|k| self.position(*k))
    }

    /// Apply one batch. Returns true when the active section changed.
    pub fn apply(&mut self, entries: &[ObserverEntry<K>]) -> bool {
        for entry in entries {
            self.intersecting.retain(|k| *k != entry.target);
            if entry.is_intersecting {
                self.intersecting.push(entry.target);
            }
        }

        let entered: Vec<&K> = entries
            .iter()
            .filter(|e| e.is_intersecting)
            .map(|e| &e.target)
            .collect();

        let next = if entered.is_empty() {
            // Only the topmost policy recovers from the active section leaving;
            // last-write-wins stays on it until something else enters.
            let active_left = self.active.is_some_and(|active| {
                entries
                    .iter()
                    .any(|e| e.target == active && !e.is_intersecting)
            });
            match self.tie_break {
                TieBreak::Topmost if active_left => {
                    self.topmost(self.intersecting.iter()).or(self.active)
                }
                _ => self.active,
            }
        } else {
            match self.tie_break {
                TieBreak::Last => entered.last().map(|k| **k),
                TieBreak::Topmost => self.topmost(entered.into_iter()),
            }
        };

        let changed = next != self.active;
        self.active = next;
        changed
    }
}
