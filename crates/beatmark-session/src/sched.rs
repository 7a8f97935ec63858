//! Cooperative tick-driven scheduler for long-running operations.
//!
//! All long-running work (batch bake, chunked paste) is a state machine
//! advanced by a host-delivered periodic timer event on one thread. Each
//! tick does a bounded amount of work and control returns to the host
//! event loop between ticks. Cancellation is cooperative and checked once
//! per event; already-applied partial work is retained.

use crate::error::Result;
use crate::session::Session;

/// Events delivered to a running modal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Periodic timer tick; the only event that advances work.
    Timer,
    /// User-initiated abort.
    Cancel,
    /// Any other input event (scroll, clicks, ...); ignored.
    Passthrough,
}

/// Outcome of advancing a modal operation by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    Running,
    Finished,
    Cancelled,
}

/// A long-running action advanced one bounded step at a time.
pub trait ModalOp {
    /// Advance by one timer tick.
    fn tick(&mut self, session: &mut Session) -> Result<OpStatus>;

    /// Request cooperative cancellation. Applied work is retained.
    fn cancel(&mut self);

    fn is_done(&self) -> bool;

    /// Progress text for the info side channel.
    fn progress(&self) -> Option<String>;
}

/// Opaque periodic timer identifier handed out by a [`TimerService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(pub u64);

/// Host timer collaborator delivering periodic tick events.
pub trait TimerService {
    fn start_timer(&mut self, interval: f64) -> TimerHandle;
    fn stop_timer(&mut self, handle: TimerHandle);
}

/// Simple in-process [`TimerService`] for headless use and tests.
///
/// Hands out sequential handles and tracks which are live. It does not
/// deliver events itself; the caller feeds [`ModalEvent::Timer`]s to the
/// runner at whatever cadence it wants.
#[derive(Debug, Default)]
pub struct ManualTimer {
    next_id: u64,
    active: Vec<TimerHandle>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_timers(&self) -> usize {
        self.active.len()
    }
}

impl TimerService for ManualTimer {
    fn start_timer(&mut self, _interval: f64) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.active.push(handle);
        handle
    }

    fn stop_timer(&mut self, handle: TimerHandle) {
        self.active.retain(|h| *h != handle);
    }
}

/// Lifecycle of a runner-driven operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Done,
    Cancelled,
}

/// Drives one [`ModalOp`] from host events.
///
/// Started runs hold the periodic timer; both terminal states release it
/// and clear the progress text. Terminal states are final; later events
/// are ignored, and a new invocation starts a fresh runner.
pub struct ModalRunner<O> {
    op: O,
    state: RunState,
    timer: Option<TimerHandle>,
    progress: Option<String>,
}

impl<O: ModalOp> ModalRunner<O> {
    /// Start a fresh run, acquiring the periodic timer.
    pub fn start(op: O, timer: &mut dyn TimerService, interval: f64) -> Self {
        let handle = timer.start_timer(interval);
        Self {
            op,
            state: RunState::Running,
            timer: Some(handle),
            progress: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, RunState::Done | RunState::Cancelled)
    }

    /// Progress text to display while the run is live.
    pub fn progress_text(&self) -> Option<&str> {
        self.progress.as_deref()
    }

    pub fn op(&self) -> &O {
        &self.op
    }

    /// Feed one host event into the run.
    ///
    /// Only `Timer` advances work and only `Cancel` aborts; everything
    /// else passes through without affecting progress or state. An error
    /// from the operation terminates the run (work already applied is
    /// kept) and is returned to the caller.
    pub fn handle_event(
        &mut self,
        event: ModalEvent,
        session: &mut Session,
        timer: &mut dyn TimerService,
    ) -> Result<RunState> {
        if self.is_finished() {
            return Ok(self.state);
        }

        match event {
            ModalEvent::Passthrough => Ok(self.state),
            ModalEvent::Cancel => {
                self.op.cancel();
                self.finish(RunState::Cancelled, timer);
                Ok(self.state)
            }
            ModalEvent::Timer => match self.op.tick(session) {
                Ok(OpStatus::Running) => {
                    self.progress = self.op.progress();
                    Ok(RunState::Running)
                }
                Ok(OpStatus::Finished) => {
                    self.finish(RunState::Done, timer);
                    Ok(RunState::Done)
                }
                Ok(OpStatus::Cancelled) => {
                    self.finish(RunState::Cancelled, timer);
                    Ok(RunState::Cancelled)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "modal operation failed");
                    self.finish(RunState::Cancelled, timer);
                    Err(err)
                }
            },
        }
    }

    fn finish(&mut self, state: RunState, timer: &mut dyn TimerService) {
        if let Some(handle) = self.timer.take() {
            timer.stop_timer(handle);
        }
        self.progress = None;
        self.state = state;
        tracing::debug!(?state, "modal operation finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bake::NullBaker;
    use crate::scene::Scene;

    struct CountOp {
        ticks: usize,
        total: usize,
        cancelled: bool,
    }

    impl CountOp {
        fn new(total: usize) -> Self {
            Self {
                ticks: 0,
                total,
                cancelled: false,
            }
        }
    }

    impl ModalOp for CountOp {
        fn tick(&mut self, _session: &mut Session) -> Result<OpStatus> {
            if self.cancelled {
                return Ok(OpStatus::Cancelled);
            }
            self.ticks += 1;
            if self.ticks >= self.total {
                Ok(OpStatus::Finished)
            } else {
                Ok(OpStatus::Running)
            }
        }

        fn cancel(&mut self) {
            self.cancelled = true;
        }

        fn is_done(&self) -> bool {
            self.cancelled || self.ticks >= self.total
        }

        fn progress(&self) -> Option<String> {
            Some(format!("{} of {}", self.ticks, self.total))
        }
    }

    fn test_session() -> Session {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Session::new(Scene::new(1, 250), NullBaker)
    }

    #[test]
    fn test_run_to_completion_releases_timer() {
        let mut session = test_session();
        let mut timer = ManualTimer::new();
        let mut runner = ModalRunner::start(CountOp::new(3), &mut timer, 0.002);
        assert_eq!(timer.active_timers(), 1);

        for _ in 0..2 {
            let state = runner
                .handle_event(ModalEvent::Timer, &mut session, &mut timer)
                .unwrap();
            assert_eq!(state, RunState::Running);
        }
        assert_eq!(runner.progress_text(), Some("2 of 3"));

        let state = runner
            .handle_event(ModalEvent::Timer, &mut session, &mut timer)
            .unwrap();
        assert_eq!(state, RunState::Done);
        assert_eq!(timer.active_timers(), 0);
        assert_eq!(runner.progress_text(), None);
    }

    #[test]
    fn test_cancel_releases_timer_and_clears_progress() {
        let mut session = test_session();
        let mut timer = ManualTimer::new();
        let mut runner = ModalRunner::start(CountOp::new(10), &mut timer, 0.002);

        runner
            .handle_event(ModalEvent::Timer, &mut session, &mut timer)
            .unwrap();
        let state = runner
            .handle_event(ModalEvent::Cancel, &mut session, &mut timer)
            .unwrap();

        assert_eq!(state, RunState::Cancelled);
        assert_eq!(timer.active_timers(), 0);
        assert_eq!(runner.progress_text(), None);
        // Work applied before the cancel is retained.
        assert_eq!(runner.op().ticks, 1);
    }

    #[test]
    fn test_passthrough_does_not_advance() {
        let mut session = test_session();
        let mut timer = ManualTimer::new();
        let mut runner = ModalRunner::start(CountOp::new(2), &mut timer, 0.002);

        for _ in 0..5 {
            let state = runner
                .handle_event(ModalEvent::Passthrough, &mut session, &mut timer)
                .unwrap();
            assert_eq!(state, RunState::Running);
        }
        assert_eq!(runner.op().ticks, 0);
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut session = test_session();
        let mut timer = ManualTimer::new();
        let mut runner = ModalRunner::start(CountOp::new(1), &mut timer, 0.002);

        let state = runner
            .handle_event(ModalEvent::Timer, &mut session, &mut timer)
            .unwrap();
        assert_eq!(state, RunState::Done);

        let state = runner
            .handle_event(ModalEvent::Timer, &mut session, &mut timer)
            .unwrap();
        assert_eq!(state, RunState::Done);
        assert_eq!(runner.op().ticks, 1);
    }
}
