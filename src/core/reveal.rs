/// Tracks which fade-in sections have already played their sound cue.
///
/// Sections are addressed by the index assigned when they were registered
/// with the observer. A flag, once set, stays set for the page session.
#[derive(Clone, Debug, Default)]
pub struct RevealLedger {
    played: Vec<bool>,
}

impl RevealLedger {
    pub fn new(count: usize) -> Self {
        Self {
            played: vec![false; count],
        }
    }

    /// Record an intersection; returns true only the first time for `index`.
    pub fn mark_played(&mut self, index: usize) -> bool {
        match self.played.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn has_played(&self, index: usize) -> bool {
        self.played.get(index).copied().unwrap_or(false)
    }

    pub fn played_count(&self) -> usize {
        self.played.iter().filter(|p| **p).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.played.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }
}

/// Source to swap into a lazy image, if it declares a usable one.
#[inline]
pub fn deferred_source(data_src: Option<String>) -> Option<String> {
    data_src.filter(|s| !s.trim().is_empty())
}
