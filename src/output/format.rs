//! Formatting helpers shared by the status templates.

use crate::types::StatusSnapshot;

/// Formats seconds as `MM:SS`, switching to `HH:MM:SS` from one hour up.
pub fn format_hhmmss(total_seconds: u32) -> String {
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Draws the position within the current long-break cycle.
///
/// Each session contributes a work slot `w` and a break slot, the last
/// break of the cycle being the long one `l`. The active slot is wrapped
/// in brackets, e.g. `w-[b]-w-b-w-b-w-l` for the first break of four.
pub fn progress_bar(snapshot: &StatusSnapshot) -> String {
    let cycles = snapshot.cycles_before_long_break.max(1);
    let position = (snapshot.session.max(1) - 1) % cycles;
    let active = 2 * position + u32::from(snapshot.active_phase.is_break());

    let mut slots = Vec::with_capacity(2 * cycles as usize);
    for i in 0..cycles {
        slots.push("w");
        slots.push(if i + 1 == cycles { "l" } else { "b" });
    }

    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            if i as u32 == active {
                format!("[{}]", slot)
            } else {
                (*slot).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PomodoroConfig, TimerPhase, TimerState};

    mod hhmmss_tests {
        use super::*;

        #[test]
        fn test_seconds_only() {
            assert_eq!(format_hhmmss(0), "00:00");
            assert_eq!(format_hhmmss(1), "00:01");
        }

        #[test]
        fn test_minutes_and_seconds() {
            assert_eq!(format_hhmmss(111), "01:51");
            assert_eq!(format_hhmmss(25 * 60), "25:00");
            assert_eq!(format_hhmmss(3599), "59:59");
        }

        #[test]
        fn test_hours() {
            assert_eq!(format_hhmmss(3600), "01:00:00");
            assert_eq!(format_hhmmss(3611), "01:00:11");
            assert_eq!(format_hhmmss(24 * 3600), "24:00:00");
        }
    }

    mod progress_bar_tests {
        use super::*;

        #[test]
        fn test_first_phases_of_four_cycles() {
            let mut state = TimerState::new(PomodoroConfig::default());
            assert_eq!(progress_bar(&state.snapshot()), "[w]-b-w-b-w-b-w-l");

            state.complete_phase();
            assert_eq!(progress_bar(&state.snapshot()), "w-[b]-w-b-w-b-w-l");

            state.complete_phase();
            assert_eq!(progress_bar(&state.snapshot()), "w-b-[w]-b-w-b-w-l");
        }

        #[test]
        fn test_long_break_slot() {
            let mut state = TimerState::new(PomodoroConfig::default().with_start_session(4));
            state.complete_phase();
            assert_eq!(state.phase, TimerPhase::LongBreak);
            assert_eq!(progress_bar(&state.snapshot()), "w-b-w-b-w-b-w-[l]");
        }

        #[test]
        fn test_wraps_after_cycle() {
            let state = TimerState::new(PomodoroConfig::default().with_start_session(5));
            assert_eq!(progress_bar(&state.snapshot()), "[w]-b-w-b-w-b-w-l");
        }

        #[test]
        fn test_paused_keeps_slot() {
            let mut state = TimerState::new(PomodoroConfig::default());
            state.complete_phase();
            state.pause();
            assert_eq!(progress_bar(&state.snapshot()), "w-[b]-w-b-w-b-w-l");
        }

        #[test]
        fn test_custom_cycle_length() {
            let state = TimerState::new(PomodoroConfig::default().with_cycles(2));
            assert_eq!(progress_bar(&state.snapshot()), "[w]-b-w-l");

            let state = TimerState::new(PomodoroConfig::default().with_cycles(1));
            assert_eq!(progress_bar(&state.snapshot()), "[w]-l");
        }
    }
}
