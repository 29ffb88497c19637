//! Shared test infrastructure for x360-controller-leds integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use x360_controller_leds::{LedHandler, LedOutput, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing: a 32-bit millisecond counter that wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestInstant(pub u32);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0) as u64)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        let millis = u32::try_from(duration.0).ok()?;
        Some(TestInstant(self.0.wrapping_add(millis)))
    }
}

// ============================================================================
// Mock Output
// ============================================================================

/// Mock output that records every LED write
pub struct MockOutput {
    leds: u8,
    history: heapless::Vec<u8, 256>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            leds: 0,
            history: heapless::Vec::new(),
        }
    }

    pub fn leds(&self) -> u8 {
        self.leds
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn write_count(&self) -> usize {
        self.history.len()
    }
}

impl LedOutput for MockOutput {
    fn write_leds(&mut self, leds: u8) {
        self.leds = leds;
        let _ = self.history.push(leds);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(millis)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0.wrapping_add(millis)));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type QuadHandler<'t> = LedHandler<'t, TestInstant, MockOutput, MockTimeSource, 4>;
pub type SingleHandler<'t> = LedHandler<'t, TestInstant, MockOutput, MockTimeSource, 1>;

/// Advance time one millisecond at a time, running the handler after each step
pub fn run_for<const LEDS: usize>(
    handler: &mut LedHandler<'_, TestInstant, MockOutput, MockTimeSource, LEDS>,
    timer: &MockTimeSource,
    millis: u32,
) {
    for _ in 0..millis {
        timer.advance(1);
        handler.run();
    }
}
