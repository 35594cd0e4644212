//! Game time tracker driven by host timer events
//!
//! The host forwards its start/reset/undo-split/update notifications as
//! [`TimerEvent`]s and carries out the [`HostCommand`]s it gets back. The
//! tracker never touches the host itself.

use log::debug;
use smallvec::{smallvec, SmallVec};
use std::time::Duration;

/// Notification from the host timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Run started
    Start,
    /// Run reset
    Reset,
    /// Last split undone; carries the game time of the split before it, if any
    UndoSplit { previous_split_game_time: Option<Duration> },
    /// A bonus tally began; real time pauses for `duration`
    BeginTally { duration: Duration },
    /// Per-frame tick with the host's accumulated pause time
    Update { pause_time: Duration },
}

/// Action the host should perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    SetGameTime(Duration),
    PauseGameTime,
    /// Flip the real-time timer between paused and running
    TogglePause,
}

pub type HostCommands = SmallVec<[HostCommand; 2]>;

/// Tracks whether a run is live and whether a tally pause is pending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameTimeTracker {
    running: bool,
    pending_pause: Option<Duration>,
}

impl GameTimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Length of the tally pause still waiting to end
    #[inline]
    pub fn pending_pause(&self) -> Option<Duration> {
        self.pending_pause
    }

    /// Advance the tracker and return what the host has to do
    pub fn apply(&mut self, event: TimerEvent) -> HostCommands {
        debug!("Timer event {:?}", event);
        match event {
            TimerEvent::Start => {
                self.running = true;
                self.pending_pause = None;
                smallvec![HostCommand::PauseGameTime, HostCommand::SetGameTime(Duration::ZERO)]
            }
            TimerEvent::Reset => {
                self.running = false;
                self.pending_pause = None;
                SmallVec::new()
            }
            TimerEvent::UndoSplit { previous_split_game_time } => {
                smallvec![HostCommand::SetGameTime(
                    previous_split_game_time.unwrap_or(Duration::ZERO)
                )]
            }
            TimerEvent::BeginTally { duration } => {
                if !self.running || self.pending_pause.is_some() || duration.is_zero() {
                    return SmallVec::new();
                }
                self.pending_pause = Some(duration);
                smallvec![HostCommand::TogglePause]
            }
            TimerEvent::Update { pause_time } => match self.pending_pause {
                Some(duration) if pause_time >= duration => {
                    self.pending_pause = None;
                    smallvec![HostCommand::TogglePause]
                }
                _ => SmallVec::new(),
            },
        }
    }
}
