use crate::constants::{
    FLOWER_FADE_EASING, FLOWER_FALL_EASING, FLOWER_LANES, FLOWER_LANE_JITTER, FLOWER_LIFETIME_MS,
    MAX_FLOWERS,
};
use instant::Instant;
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// Horizontal start position (px) for a falling particle.
///
/// The viewport is split into equal lanes; a lane is picked uniformly and the
/// particle lands at a random offset inside the leading part of that lane.
pub fn lane_position<R: Rng + ?Sized>(rng: &mut R, viewport_width: f64) -> f64 {
    let lane_width = viewport_width.max(0.0) / FLOWER_LANES as f64;
    let lane = rng.gen_range(0..FLOWER_LANES) as f64;
    lane * lane_width + rng.gen::<f64>() * lane_width * FLOWER_LANE_JITTER
}

/// CSS `transition` for a particle: eased fall, linear fade-out, both over
/// the particle lifetime.
pub fn flower_transition() -> String {
    format!(
        "transform {FLOWER_LIFETIME_MS}ms {FLOWER_FALL_EASING}, \
         opacity {FLOWER_LIFETIME_MS}ms {FLOWER_FADE_EASING}"
    )
}

/// Identifier handed out for each spawned particle, increasing in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowerId(pub u64);

#[derive(Debug)]
struct LiveFlower<T> {
    id: FlowerId,
    born: Instant,
    payload: T,
}

/// Live particles in creation order, bounded by a cap.
///
/// `T` is whatever the caller needs to tear a particle down (the DOM element
/// in the browser). Removal paths hand the payload back to the caller.
#[derive(Debug)]
pub struct FlowerBuffer<T> {
    live: VecDeque<LiveFlower<T>>,
    next_id: u64,
    cap: usize,
    lifetime: Duration,
}

impl<T> Default for FlowerBuffer<T> {
    fn default() -> Self {
        Self::new(MAX_FLOWERS, Duration::from_millis(FLOWER_LIFETIME_MS))
    }
}

impl<T> FlowerBuffer<T> {
    pub fn new(cap: usize, lifetime: Duration) -> Self {
        Self {
            live: VecDeque::with_capacity(cap),
            next_id: 0,
            cap,
            lifetime,
        }
    }

    pub fn push(&mut self, payload: T, now: Instant) -> FlowerId {
        let id = FlowerId(self.next_id);
        self.next_id += 1;
        self.live.push_back(LiveFlower {
            id,
            born: now,
            payload,
        });
        id
    }

    /// Drop the oldest particles until at most `cap` remain.
    pub fn evict_excess(&mut self) -> Vec<T> {
        let excess = self.live.len().saturating_sub(self.cap);
        self.live.drain(..excess).map(|f| f.payload).collect()
    }

    /// Remove a particle whose own timer fired. `None` if it was already evicted.
    pub fn release(&mut self, id: FlowerId) -> Option<T> {
        // ids are ascending, so the position can be found by binary search
        let pos = self.live.binary_search_by_key(&id, |f| f.id).ok()?;
        self.live.remove(pos).map(|f| f.payload)
    }

    /// Remove every particle that has outlived its lifetime at `now`.
    pub fn sweep(&mut self, now: Instant) -> Vec<T> {
        let lifetime = self.lifetime;
        let expired = self
            .live
            .iter()
            .take_while(|f| f.born + lifetime <= now)
            .count();
        self.live.drain(..expired).map(|f| f.payload).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn ids(&self) -> impl Iterator<Item = FlowerId> + '_ {
        self.live.iter().map(|f| f.id)
    }
}
