//! Plays the host "player 2 connected" sequence on a console-rendered 4-LED ring.
//!
//! Run with `cargo run --example terminal --features std`.

use std::thread::sleep;
use std::time::Duration;

use x360_controller_leds::{LedHandler, LedOutput, Pattern, ServiceTiming, StdClock};

struct ConsoleLeds;

impl LedOutput for ConsoleLeds {
    fn write_leds(&mut self, leds: u8) {
        let ring: String = (0..4)
            .map(|i| if leds & (1 << i) != 0 { '●' } else { '○' })
            .collect();
        println!("{ring}");
    }
}

fn main() {
    let clock = StdClock;
    let mut leds = LedHandler::<_, _, _, 4>::new(ConsoleLeds, &clock);
    leds.begin();

    // Host reports: blink while enumerating, then flash player 2
    leds.link_pattern(Pattern::Rotating);
    let mut elapsed = Duration::ZERO;
    while elapsed < Duration::from_secs(2) {
        if let ServiceTiming::Delay(wait) = leds.run() {
            sleep(wait);
            elapsed += wait;
        }
    }

    leds.link_pattern(Pattern::Flash2);
    while leds.pattern() != Pattern::Player2 {
        match leds.run() {
            ServiceTiming::Delay(wait) => sleep(wait),
            ServiceTiming::Steady => break,
        }
    }
}
