//! One-tick orchestration and the fixed-cadence run loop.
//!
//! The [`Controller`] owns every collaborator plus the countdown core. Each
//! [`Controller::tick`] reads the clock once, samples the buttons once, feeds
//! both to the state machine and then applies the outcome: render if asked,
//! issue at most one audio command. Nothing in a tick blocks.

use core::fmt::Debug;

use countdown::{InputDispatcher, Score, TickOutcome, TimerConfig, TimerStateMachine};
use embassy_time::{Duration, Ticker};
use platform::{AudioDriver, ButtonSource, Clock, DisplayPresenter};
use thiserror_no_std::Error;

/// A collaborator failed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError<I: Debug, D: Debug, A: Debug> {
    /// Button sampling failed; the tick was skipped.
    #[error("button input failed: {0:?}")]
    Input(I),
    /// Drawing the face failed.
    #[error("display render failed: {0:?}")]
    Display(D),
    /// The audio command could not be issued.
    #[error("audio output failed: {0:?}")]
    Audio(A),
}

impl<I: Debug, D: Debug, A: Debug> ControllerError<I, D, A> {
    /// Which collaborator failed, for log output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Display(_) => "display",
            Self::Audio(_) => "audio",
        }
    }
}

/// [`ControllerError`] spelled in terms of the collaborator types.
pub type TickError<B, P, A> = ControllerError<
    <B as ButtonSource>::Error,
    <P as DisplayPresenter>::Error,
    <A as AudioDriver>::Error,
>;

/// Owns the collaborators and the countdown core.
pub struct Controller<'a, C, B, P, A> {
    clock: C,
    buttons: B,
    presenter: P,
    audio: A,
    dispatcher: InputDispatcher,
    timer: TimerStateMachine<'a>,
}

impl<'a, C, B, P, A> Controller<'a, C, B, P, A>
where
    C: Clock,
    B: ButtonSource,
    P: DisplayPresenter,
    A: AudioDriver,
{
    /// Assemble a controller in the Idle state. Nothing is drawn or played
    /// until [`start`](Self::start).
    pub fn new(
        config: TimerConfig,
        score: Score<'a>,
        clock: C,
        buttons: B,
        presenter: P,
        audio: A,
    ) -> Self {
        Self {
            clock,
            buttons,
            presenter,
            audio,
            dispatcher: InputDispatcher::new(),
            timer: TimerStateMachine::new(config, score),
        }
    }

    /// Power-on presentation: draw the Idle face and silence the output.
    pub fn start(&mut self) -> Result<(), TickError<B, P, A>> {
        self.presenter
            .render(&self.timer.snapshot())
            .map_err(ControllerError::Display)?;
        self.audio.mute().map_err(ControllerError::Audio)
    }

    /// Run exactly one tick.
    ///
    /// On an input failure the state machine is not advanced. A render
    /// failure does not hold back the audio command: the state has already
    /// moved, so a `Mute` is still issued before the display error is
    /// returned. If both fail, the audio error wins.
    pub fn tick(&mut self) -> Result<TickOutcome, TickError<B, P, A>> {
        let now_ms = self.clock.now_ms();
        let events = self
            .dispatcher
            .poll(&mut self.buttons)
            .map_err(ControllerError::Input)?;

        let outcome = self.timer.tick(now_ms, events);

        let rendered = if outcome.render {
            self.presenter
                .render(&self.timer.snapshot())
                .map_err(ControllerError::Display)
        } else {
            Ok(())
        };
        if let Some(command) = outcome.audio {
            #[cfg(feature = "emulator")]
            tracing::trace!(command = command.label(), now_ms, "audio");
            self.audio.apply(command).map_err(ControllerError::Audio)?;
        }
        rendered.map(|()| outcome)
    }

    /// Best-effort silence after a failure. The result is ignored; there is
    /// nothing left to report it to.
    pub fn silence(&mut self) {
        let _ = self.audio.mute();
    }

    /// The countdown core.
    pub const fn timer(&self) -> &TimerStateMachine<'a> {
        &self.timer
    }

    /// The clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The button source.
    pub const fn buttons(&self) -> &B {
        &self.buttons
    }

    /// The button source, mutably.
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// The presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The audio driver.
    pub const fn audio(&self) -> &A {
        &self.audio
    }

    /// The audio driver, mutably.
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}

/// Start `controller` and tick it every `period` until a collaborator fails.
///
/// Before returning the error the output is silenced, so a failed loop never
/// leaves a tone running.
///
/// The only suspension point is the ticker. A tick that overruns its slot
/// does not queue extra ticks; the countdown measures real elapsed time, so
/// late ticks cost latency but never accuracy.
pub async fn run<C, B, P, A>(
    controller: &mut Controller<'_, C, B, P, A>,
    period: Duration,
) -> TickError<B, P, A>
where
    C: Clock,
    B: ButtonSource,
    P: DisplayPresenter,
    A: AudioDriver,
{
    if let Err(err) = controller.start() {
        report(&err);
        controller.silence();
        return err;
    }

    let mut ticker = Ticker::every(period);
    loop {
        if let Err(err) = controller.tick() {
            report(&err);
            controller.silence();
            return err;
        }
        ticker.next().await;
    }
}

#[allow(unused_variables)]
fn report<I: Debug, D: Debug, A: Debug>(err: &ControllerError<I, D, A>) {
    #[cfg(feature = "defmt")]
    defmt::error!("{=str} collaborator failed, stopping", err.label());

    #[cfg(feature = "emulator")]
    tracing::error!(source = err.label(), error = ?err, "collaborator failed, stopping");
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use countdown::TimerState;
    use platform::mocks::{MockAudio, MockButtons, MockClock, MockError, MockPresenter};
    use platform::{AudioCommand, ButtonLevels, TimerSnapshot};

    type Rig<'c> = Controller<'static, &'c MockClock, MockButtons, MockPresenter, MockAudio>;

    fn rig(clock: &MockClock) -> Rig<'_> {
        Controller::new(
            TimerConfig::new(3, 1, 10).expect("valid config"),
            Score::alarm(),
            clock,
            MockButtons::new(),
            MockPresenter::new(),
            MockAudio::new(),
        )
    }

    #[test]
    fn test_start_renders_idle_and_mutes() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        c.start().unwrap();
        assert_eq!(c.presenter().last(), Some(TimerSnapshot::IDLE));
        assert_eq!(c.audio().last(), Some(AudioCommand::Mute));
    }

    #[test]
    fn test_quiet_tick_does_nothing() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        let out = c.tick().unwrap();
        assert!(!out.render);
        assert_eq!(out.audio, None);
        assert_eq!(c.presenter().render_count(), 0);
    }

    #[test]
    fn test_press_renders_counting_face() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        c.buttons_mut().set_levels(ButtonLevels::primary());
        assert!(c.tick().unwrap().render);
        let frame = c.presenter().last().unwrap();
        assert_eq!(frame.state, TimerState::Counting);
        assert_eq!(frame.remaining_secs, 3);
    }

    #[test]
    fn test_input_failure_skips_the_tick() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        c.buttons_mut().set_levels(ButtonLevels::primary());
        c.buttons_mut().fail_after(0);
        assert_eq!(c.tick(), Err(ControllerError::Input(MockError)));
        assert_eq!(c.timer().state(), TimerState::Idle);
    }

    #[test]
    fn test_render_failure_is_reported() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        c.buttons_mut().set_levels(ButtonLevels::secondary());
        c.presenter_mut().fail_next();
        let err = c.tick().unwrap_err();
        assert_eq!(err, ControllerError::Display(MockError));
        assert_eq!(err.label(), "display");
        // the mute still went out
        assert_eq!(c.audio().mute_count(), 1);
    }

    #[test]
    fn test_audio_error_wins_over_render_error() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        c.buttons_mut().set_levels(ButtonLevels::secondary());
        c.presenter_mut().fail_next();
        c.audio_mut().fail_next();
        assert_eq!(c.tick(), Err(ControllerError::Audio(MockError)));
    }

    #[test]
    fn test_silence_ignores_audio_failure() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        c.audio_mut().fail_next();
        c.silence();
        c.silence();
        assert_eq!(c.audio().last(), Some(AudioCommand::Mute));
    }

    #[test]
    fn test_audio_failure_is_reported() {
        let clock = MockClock::new(0);
        let mut c = rig(&clock);
        c.buttons_mut().set_levels(ButtonLevels::secondary());
        c.audio_mut().fail_next();
        assert_eq!(c.tick(), Err(ControllerError::Audio(MockError)));
    }

    #[test]
    fn test_error_messages() {
        let err: ControllerError<MockError, MockError, MockError> =
            ControllerError::Input(MockError);
        assert_eq!(err.to_string(), "button input failed: MockError");
    }
}
