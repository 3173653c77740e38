use std::time::{Duration, Instant};

use tracing::info;

use crate::game::{Round, TickReport};
use crate::input::GameInput;
use crate::scheduler::TickScheduler;

/// Session controller: routes input to the round and drives its ticks.
#[derive(Debug, Clone)]
pub struct App {
    round: Round,
    scheduler: TickScheduler,
    started: bool,
    quit: bool,
}

impl App {
    /// Creates a session showing the start screen; nothing ticks until the
    /// first start request.
    #[must_use]
    pub fn new(round: Round, tick_interval: Duration) -> Self {
        Self {
            round,
            scheduler: TickScheduler::new(tick_interval),
            started: false,
            quit: false,
        }
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// True until the player starts the first round.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        !self.started
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one input intent received at `now`.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::Heading(heading) if self.started => self.round.queue_heading(heading),
            GameInput::Heading(_) => {}
            GameInput::Start => self.start(now),
            GameInput::Quit => self.quit = true,
        }
    }

    /// Re-initializes the board and (re)arms the tick timer.
    pub fn start(&mut self, now: Instant) {
        self.round.reset();
        self.scheduler.start(now);
        self.started = true;
        info!(interval = ?self.scheduler.interval(), "round started");
    }

    /// Runs a tick if one is due at `now`. Scheduling stops once the round
    /// is over.
    pub fn update(&mut self, now: Instant) -> Option<TickReport> {
        if !self.scheduler.poll(now) {
            return None;
        }

        let report = self.round.tick();
        if self.round.is_over() {
            self.scheduler.cancel();
        }

        report
    }
}
