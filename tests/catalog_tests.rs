//! Integration tests for the animation catalogs

use x360_controller_leds::{Catalog, Pattern, TICK_MILLIS};

fn cycle_millis(ticks: Option<u32>) -> Option<u64> {
    ticks.map(|t| t as u64 * TICK_MILLIS)
}

#[test]
fn every_named_pattern_has_frames_on_both_boards() {
    for pattern in Pattern::ALL {
        assert!(Catalog::<1>::lookup(pattern).frame_count() >= 1);
        assert!(Catalog::<4>::lookup(pattern).frame_count() >= 1);
    }
}

#[test]
fn off_is_dark_and_held() {
    for anim in [Catalog::<1>::lookup(Pattern::Off), Catalog::<4>::lookup(Pattern::Off)] {
        assert_eq!(anim.frame_count(), 1);
        assert_eq!(anim.frames()[0].leds, 0);
        assert!(anim.frames()[0].is_hold());
        assert_eq!(anim.cycles(), 0);
    }
}

#[test]
fn quad_timings_match_host_led_language() {
    assert_eq!(cycle_millis(Catalog::<4>::lookup(Pattern::Blinking).cycle_ticks()), Some(600));
    assert_eq!(cycle_millis(Catalog::<4>::lookup(Pattern::BlinkSlow).cycle_ticks()), Some(1000));
    assert_eq!(cycle_millis(Catalog::<4>::lookup(Pattern::BlinkOnce).cycle_ticks()), Some(1000));
    assert_eq!(cycle_millis(Catalog::<4>::lookup(Pattern::Flash1).cycle_ticks()), Some(600));
    assert_eq!(cycle_millis(Catalog::<4>::lookup(Pattern::Rotating).cycle_ticks()), Some(400));
    assert_eq!(cycle_millis(Catalog::<4>::lookup(Pattern::Alternating).cycle_ticks()), Some(600));
}

#[test]
fn single_timings_match_host_led_language() {
    assert_eq!(cycle_millis(Catalog::<1>::lookup(Pattern::Blinking).cycle_ticks()), Some(900));
    assert_eq!(cycle_millis(Catalog::<1>::lookup(Pattern::Flash4).cycle_ticks()), Some(200));
    assert_eq!(Catalog::<1>::lookup(Pattern::Flash4).cycles(), 10);
    assert_eq!(Catalog::<1>::lookup(Pattern::Player2).cycle_ticks(), None);
}

#[test]
fn flash_frames_blink_the_player_led() {
    let flashes = [
        Pattern::Flash1,
        Pattern::Flash2,
        Pattern::Flash3,
        Pattern::Flash4,
    ];
    for (index, pattern) in flashes.into_iter().enumerate() {
        let masks: Vec<u8> = Catalog::<4>::lookup(pattern)
            .frames()
            .iter()
            .map(|frame| frame.leds)
            .collect();
        assert_eq!(masks, vec![0, 1 << index]);
    }
}

#[test]
fn alternating_lights_opposite_pairs() {
    let anim = Catalog::<4>::lookup(Pattern::Alternating);
    assert_eq!(anim.frames()[0].leds, 0b1010);
    assert_eq!(anim.frames()[1].leds, 0b0101);
    assert_eq!(anim.frames()[0].leds & anim.frames()[1].leds, 0);
}
