//! LED pattern handler with frame timing and pattern transitions.
//!
//! Provides [`LedHandler`], which plays catalog animations on a set of status
//! LEDs, follows "play N cycles then switch" links and remembers which pattern
//! to return to after a transient effect. Also defines the [`LedOutput`] trait
//! for hardware abstraction.

use crate::animation::{Animation, ServiceTiming};
use crate::catalog::Catalog;
use crate::command::LedAction;
use crate::logging::{debug, trace};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Frame, Pattern};

/// Trait for abstracting the LED hardware.
///
/// Implement this for your LED hardware (GPIO, shift register, I/O expander,
/// etc.) to allow the handler to control it.
pub trait LedOutput {
    /// Sets every LED at once. Bit i of `leds` set means LED i is lit.
    ///
    /// Apply any polarity inversion here. Handle hardware errors internally,
    /// this method cannot fail. It may be called repeatedly with the same value.
    fn write_leds(&mut self, leds: u8);
}

static UNSET_FRAMES: [Frame; 1] = [Frame::hold(0)];

/// Placeholder played before the first pattern is applied.
static UNSET: Animation = Animation::new(&UNSET_FRAMES);

/// Plays controller LED patterns on a board with `LEDS` status LEDs.
///
/// The handler is polled: call [`run`](Self::run) from the main loop at least
/// as often as the shortest frame (one tick). It never blocks and owns all of
/// its state, so sharing it between execution contexts needs an external lock.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `O` - LED output implementation type
/// * `T` - Time source implementation type
/// * `LEDS` - Number of LEDs on the board, 1 or 4
pub struct LedHandler<'t, I: TimeInstant, O: LedOutput, T: TimeSource<I>, const LEDS: usize> {
    output: O,
    time_source: &'t T,
    current_pattern: Pattern,
    previous_pattern: Pattern,
    animation: &'static Animation,
    frame_index: usize,
    cycle_count: u8,
    frame_start: I,
    last_frame: u8,
    output_enabled: bool,
    linking: bool,
}

impl<'t, I: TimeInstant, O: LedOutput, T: TimeSource<I>, const LEDS: usize>
    LedHandler<'t, I, O, T, LEDS>
{
    /// Creates a handler with every LED turned off and no pattern applied.
    ///
    /// Fails to compile unless `LEDS` is 1 or 4.
    pub fn new(mut output: O, time_source: &'t T) -> Self {
        let () = Catalog::<LEDS>::SUPPORTED;
        output.write_leds(0);

        Self {
            output,
            time_source,
            current_pattern: Pattern::Null,
            previous_pattern: Pattern::Null,
            animation: &UNSET,
            frame_index: 0,
            cycle_count: 0,
            frame_start: time_source.now(),
            last_frame: 0,
            output_enabled: true,
            linking: false,
        }
    }

    /// Applies the `Off` pattern.
    pub fn begin(&mut self) {
        self.set_pattern(Pattern::Off);
    }

    /// Switches to `pattern` immediately and stops following animation links.
    ///
    /// Finite animations loop until the next request. `Previous` and `Null`
    /// are ignored.
    pub fn set_pattern(&mut self, pattern: Pattern) {
        if pattern.is_meta() {
            return;
        }
        self.linking = false;
        self.change_pattern(pattern, true);
    }

    /// Requests `pattern` and follows animation links from now on.
    ///
    /// A request for the pattern the current animation is already heading to
    /// is left for playback to reach. A flash request for the player already
    /// shown is ignored. `Previous` and `Null` are ignored.
    pub fn link_pattern(&mut self, pattern: Pattern) {
        if pattern.is_meta() {
            return;
        }
        self.linking = true;
        self.change_pattern(pattern, false);
    }

    /// [`set_pattern`](Self::set_pattern) with a host driver byte.
    ///
    /// Values past `Alternating` are ignored.
    pub fn set_pattern_raw(&mut self, value: u8) {
        if let Some(pattern) = Pattern::from_wire(value) {
            self.set_pattern(pattern);
        }
    }

    /// [`link_pattern`](Self::link_pattern) with a host driver byte.
    ///
    /// Values past `Alternating` are ignored.
    pub fn link_pattern_raw(&mut self, value: u8) {
        if let Some(pattern) = Pattern::from_wire(value) {
            self.link_pattern(pattern);
        }
    }

    /// Handles an LED action by dispatching to the matching method.
    pub fn handle_action(&mut self, action: LedAction) {
        match action {
            LedAction::Set(pattern) => self.set_pattern(pattern),
            LedAction::Link(pattern) => self.link_pattern(pattern),
            LedAction::SetRaw(value) => self.set_pattern_raw(value),
            LedAction::LinkRaw(value) => self.link_pattern_raw(value),
            LedAction::Pause => self.pause_output(),
            LedAction::Resume => self.resume_output(),
            LedAction::Rewrite => self.rewrite_frame(),
        }
    }

    /// Advances the animation if the current frame has run its course.
    ///
    /// # Returns
    /// - `ServiceTiming::Delay(duration)` - Time left in the current frame
    /// - `ServiceTiming::Steady` - Frame is held until the pattern changes
    pub fn run(&mut self) -> ServiceTiming<I::Duration> {
        let frame = self.current_frame();
        if self.animation.frame_count() == 1 || frame.is_hold() {
            return ServiceTiming::Steady;
        }

        let now = self.time_source.now();
        let elapsed = now.duration_since(self.frame_start);
        let frame_millis = frame.duration_millis();
        if elapsed.as_millis() < frame_millis {
            let remaining = I::Duration::from_millis(frame_millis).saturating_sub(elapsed);
            return ServiceTiming::Delay(remaining);
        }

        // Keep frame boundaries on the tick grid unless the loop fell a full frame behind
        self.frame_start = if elapsed.as_millis() < frame_millis * 2 {
            self.frame_start
                .checked_add(I::Duration::from_millis(frame_millis))
                .unwrap_or(now)
        } else {
            now
        };

        self.frame_index += 1;
        if self.frame_index >= self.animation.frame_count() {
            self.cycle_count = self.cycle_count.saturating_add(1);

            if self.linking
                && self.animation.auto_transitions()
                && self.cycle_count >= self.animation.cycles()
            {
                let next = self.animation.next();
                if self.change_pattern(next, true) {
                    return self.timing();
                }
                // Renamed onto the animation already playing, start it over
                self.cycle_count = 0;
            }
            self.frame_index = 0;
        }

        trace!(
            "frame {} of {:?}, cycle {}",
            self.frame_index,
            self.current_pattern,
            self.cycle_count
        );
        self.render_frame();
        self.timing()
    }

    /// Stops writing to the LEDs. Animation state keeps advancing.
    pub fn pause_output(&mut self) {
        self.output_enabled = false;
    }

    /// Writes to the LEDs again, starting with the last computed frame.
    pub fn resume_output(&mut self) {
        self.output_enabled = true;
        self.output.write_leds(self.last_frame);
    }

    /// Writes the last computed frame again, unless output is paused.
    pub fn rewrite_frame(&mut self) {
        if self.output_enabled {
            self.output.write_leds(self.last_frame);
        }
    }

    /// Returns the current logical pattern.
    pub fn pattern(&self) -> Pattern {
        self.current_pattern
    }

    /// Returns the pattern a transient effect returns to.
    pub fn previous_pattern(&self) -> Pattern {
        self.previous_pattern
    }

    /// Returns the last computed LED states, bit i = LED i lit.
    pub fn last_frame(&self) -> u8 {
        self.last_frame
    }

    /// Returns the animation currently playing.
    pub fn animation(&self) -> &'static Animation {
        self.animation
    }

    /// Index of the frame currently shown.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Completed passes through the current animation.
    pub fn cycle_count(&self) -> u8 {
        self.cycle_count
    }

    /// Returns true if hardware writes are suppressed.
    pub fn is_output_paused(&self) -> bool {
        !self.output_enabled
    }

    /// Returns true if animation links are followed.
    pub fn is_linking(&self) -> bool {
        self.linking
    }

    /// Number of LEDs on the board.
    pub fn led_count(&self) -> usize {
        LEDS
    }

    /// Returns a reference to the LED output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the handler and returns the LED output.
    pub fn release(self) -> O {
        self.output
    }

    /// Applies a pattern request. Returns true if a new animation was started.
    fn change_pattern(&mut self, pattern: Pattern, immediate: bool) -> bool {
        if pattern == self.current_pattern {
            return false;
        }

        // Playback gets there on its own
        if !immediate && pattern == self.animation.next() {
            return false;
        }

        // Don't fall back from the steady indicator to the flash leading up to it
        if self.linking && pattern.flash_target() == Some(self.current_pattern) {
            return false;
        }

        let pattern = match pattern {
            Pattern::Previous => match self.previous_pattern {
                Pattern::Previous | Pattern::Null => Pattern::Off,
                previous => previous,
            },
            pattern => pattern,
        };

        // A transient effect must hand back to what was shown before it
        if !self.animation.is_transient() {
            self.previous_pattern = self.current_pattern;
        }
        self.current_pattern = pattern;

        let animation = Catalog::<LEDS>::lookup(pattern);
        if core::ptr::eq(animation, self.animation) {
            return false;
        }

        debug!(
            "pattern {:?} (previous {:?})",
            self.current_pattern,
            self.previous_pattern
        );
        self.start_animation(animation);
        true
    }

    fn start_animation(&mut self, animation: &'static Animation) {
        self.animation = animation;
        self.frame_index = 0;
        self.cycle_count = 0;
        self.frame_start = self.time_source.now();
        self.render_frame();
    }

    fn current_frame(&self) -> Frame {
        self.animation
            .frame(self.frame_index)
            .copied()
            .unwrap_or(Frame::hold(0))
    }

    fn render_frame(&mut self) {
        self.last_frame = self.current_frame().leds;
        if self.output_enabled {
            self.output.write_leds(self.last_frame);
        }
    }

    fn timing(&self) -> ServiceTiming<I::Duration> {
        let frame = self.current_frame();
        if self.animation.frame_count() == 1 || frame.is_hold() {
            return ServiceTiming::Steady;
        }

        let elapsed = self.time_source.now().duration_since(self.frame_start);
        ServiceTiming::Delay(I::Duration::from_millis(frame.duration_millis()).saturating_sub(elapsed))
    }
}
