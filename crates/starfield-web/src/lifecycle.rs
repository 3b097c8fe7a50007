// When the starfield is built relative to the page's `load` event.
// Pure so the decision can be tested off the browser.

use crate::constants::READY_STATE_COMPLETE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartTrigger {
    /// `load` already fired before the module finished instantiating.
    Immediately,
    OnLoad,
}

pub fn start_trigger(ready_state: &str) -> StartTrigger {
    if ready_state == READY_STATE_COMPLETE {
        StartTrigger::Immediately
    } else {
        StartTrigger::OnLoad
    }
}
