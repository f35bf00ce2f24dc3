use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    pressed_at: Instant,
    last_move: Option<Instant>,
}

/// Auto-repeat state of one direction key.
///
/// The press itself moves once (the caller does that when [`Self::press`]
/// returns `true`). While held, a repeat is due once the initial delay has
/// passed since the press and the repeat interval has passed since the last
/// repeat that actually moved the piece.
#[derive(Debug, Clone)]
pub(crate) struct KeyRepeat {
    initial_delay: Duration,
    interval: Duration,
    held: Option<HeldKey>,
}

impl KeyRepeat {
    pub(crate) fn new(initial_delay: Duration, interval: Duration) -> Self {
        Self {
            initial_delay,
            interval,
            held: None,
        }
    }

    /// Records a press. Returns `false` if the key was already held.
    pub(crate) fn press(&mut self, now: Instant) -> bool {
        if self.held.is_some() {
            return false;
        }
        self.held = Some(HeldKey {
            pressed_at: now,
            last_move: None,
        });
        true
    }

    pub(crate) fn release(&mut self) {
        self.held = None;
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.held.is_some_and(|held| {
            now.saturating_duration_since(held.pressed_at) >= self.initial_delay
                && held
                    .last_move
                    .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
        })
    }

    /// Call only when a repeat actually moved the piece.
    pub(crate) fn record_move(&mut self, now: Instant) {
        if let Some(held) = &mut self.held {
            held.last_move = Some(now);
        }
    }
}
