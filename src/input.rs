use crossterm::event::{poll, read, Event};
use std::io;
use std::time::Duration;

/// Where terminal events come from
pub(crate) trait EventSource {
    /// Wait at most `timeout` for the next event.  A zero timeout checks for
    /// a pending event without blocking.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Events read from the real terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if poll(timeout)? {
            read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// A fixed queue of events that never blocks, recording each timeout it was
/// asked to wait for
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScriptedEvents {
    pub(crate) events: std::collections::VecDeque<Event>,
    pub(crate) timeouts: Vec<Duration>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub(crate) fn new<I: IntoIterator<Item = Event>>(events: I) -> ScriptedEvents {
        ScriptedEvents {
            events: events.into_iter().collect(),
            timeouts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        self.timeouts.push(timeout);
        Ok(self.events.pop_front())
    }
}
