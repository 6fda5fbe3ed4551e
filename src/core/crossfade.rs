use crate::constants::VOLUME_RAMP_STEP;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Ramp {
    direction: RampDirection,
    pause_at_silence: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct TrackState {
    volume: f64,
    ramp: Option<Ramp>,
}

/// What the caller must do after a track starts playing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossfadePlan {
    /// Track that now ramps up to full volume.
    pub fade_in: usize,
    /// Audible tracks that now ramp down and pause once silent.
    pub fade_out: SmallVec<[usize; 4]>,
    /// Already-silent tracks that only need pausing.
    pub pause_now: SmallVec<[usize; 4]>,
}

/// Result of advancing one track's ramp by a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RampTick {
    /// Volume moved but the bound is not reached yet.
    Step(f64),
    /// Bound reached; the ramp is over and its timer should be cleared.
    Finished { volume: f64, pause: bool },
    /// No ramp was active for this track.
    Idle,
}

/// Volume state of a fixed set of tracks where at most one is audible.
///
/// Each track holds at most one active ramp; starting a new ramp replaces the
/// previous one, so the caller must cancel the old tick timer first.
#[derive(Clone, Debug)]
pub struct Crossfader {
    tracks: Vec<TrackState>,
    step: f64,
}

impl Crossfader {
    /// All tracks start silent.
    pub fn new(track_count: usize) -> Self {
        Self {
            tracks: vec![TrackState::default(); track_count],
            step: VOLUME_RAMP_STEP,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// `track` started playing: ramp it up and every other track down.
    pub fn play(&mut self, track: usize) -> Option<CrossfadePlan> {
        if track >= self.tracks.len() {
            return None;
        }
        let mut plan = CrossfadePlan {
            fade_in: track,
            ..CrossfadePlan::default()
        };
        for (i, state) in self.tracks.iter_mut().enumerate() {
            if i == track {
                state.ramp = Some(Ramp {
                    direction: RampDirection::Up,
                    pause_at_silence: false,
                });
            } else if state.volume > 0.0 || state.ramp.is_some() {
                state.ramp = Some(Ramp {
                    direction: RampDirection::Down,
                    pause_at_silence: true,
                });
                plan.fade_out.push(i);
            } else {
                plan.pause_now.push(i);
            }
        }
        Some(plan)
    }

    /// `track` was paused. Returns true when a fade-out ramp was started;
    /// a track that is already silent just drops any ramp it had.
    pub fn pause(&mut self, track: usize) -> bool {
        let Some(state) = self.tracks.get_mut(track) else {
            return false;
        };
        if state.volume <= 0.0 {
            state.volume = 0.0;
            state.ramp = None;
            return false;
        }
        state.ramp = Some(Ramp {
            direction: RampDirection::Down,
            pause_at_silence: false,
        });
        true
    }

    /// Advance `track`'s ramp by one step.
    pub fn tick(&mut self, track: usize) -> RampTick {
        let step = self.step;
        let Some(state) = self.tracks.get_mut(track) else {
            return RampTick::Idle;
        };
        let Some(ramp) = state.ramp else {
            return RampTick::Idle;
        };
        // snap within half a step so float drift can't add an extra tick
        let (next, target, reached) = match ramp.direction {
            RampDirection::Up => {
                let next = state.volume + step;
                (next, 1.0, next >= 1.0 - step * 0.5)
            }
            RampDirection::Down => {
                let next = state.volume - step;
                (next, 0.0, next <= step * 0.5)
            }
        };
        if reached {
            state.volume = target;
            state.ramp = None;
            RampTick::Finished {
                volume: target,
                pause: ramp.pause_at_silence && target == 0.0,
            }
        } else {
            state.volume = next;
            RampTick::Step(next)
        }
    }

    pub fn volume(&self, track: usize) -> Option<f64> {
        self.tracks.get(track).map(|t| t.volume)
    }

    pub fn ramp_direction(&self, track: usize) -> Option<RampDirection> {
        self.tracks.get(track)?.ramp.map(|r| r.direction)
    }

    #[inline]
    pub fn is_ramping(&self, track: usize) -> bool {
        self.ramp_direction(track).is_some()
    }
}
