//! Input cadence for the terminal host.
//!
//! The session has no clock. Everything time-based lives here:
//!
//! - [`DropClock`] - gravity, with a faster interval while soft drop is held
//! - [`KeyRepeat`] - delayed auto-repeat of a held direction key
//! - [`Controller`] - applies [`Intent`]s and elapsed time to a session

use std::time::Duration;

pub(crate) use self::{controller::*, drop_clock::*, intent::*, key_repeat::*};

mod controller;
mod drop_clock;
mod intent;
mod key_repeat;

/// Timing parameters of the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cadence {
    pub drop_interval: Duration,
    pub soft_drop_interval: Duration,
    pub initial_move_delay: Duration,
    pub move_repeat: Duration,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            drop_interval: Duration::from_millis(500),
            soft_drop_interval: Duration::from_millis(50),
            initial_move_delay: Duration::from_millis(200),
            move_repeat: Duration::from_millis(50),
        }
    }
}
