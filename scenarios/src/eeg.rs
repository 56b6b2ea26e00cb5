use std::collections::{HashSet, VecDeque};

/// A journal of what the behaviors were thinking. Every message is also
/// forwarded to the `log` facade.
pub struct EEG {
    current_time: f32,
    pub log: VecDeque<String>,
    pub events: HashSet<Event>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Event {
    ArrivalTriggered,
    CollisionHazard,
    EndOfLane,
    TimeOut,
}

impl EEG {
    const MAX_LOG_LINES: usize = 250;

    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            log: VecDeque::new(),
            events: HashSet::new(),
        }
    }

    pub fn begin(&mut self, time: f32) {
        self.current_time = time;
    }

    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();

        log::debug!("{:>8.3} {}", self.current_time, message);

        self.log.push_back(message);

        // Limit RAM usage
        while self.log.len() > Self::MAX_LOG_LINES {
            self.log.pop_front();
        }
    }

    pub fn track(&mut self, event: Event) {
        self.events.insert(event);
    }
}

impl Default for EEG {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::eeg::{Event, EEG};

    #[test]
    fn log_is_bounded() {
        let mut eeg = EEG::new();
        for i in 0..300 {
            eeg.log(format!("line {}", i));
        }
        assert_eq!(eeg.log.len(), 250);
        assert_eq!(eeg.log.front().map(String::as_str), Some("line 50"));
    }

    #[test]
    fn events_are_deduplicated() {
        let mut eeg = EEG::new();
        eeg.track(Event::TimeOut);
        eeg.track(Event::TimeOut);
        assert_eq!(eeg.events.len(), 1);
    }
}
