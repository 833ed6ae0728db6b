//! Command routing by application state.
//!
//! The router never changes state itself. It reads the state inside the
//! state cell's critical section, picks the owning task and overwrites
//! that task's inbox. The other inboxes are not touched.

use log::debug;

use super::channels::Inbox;
use crate::app::commands::Command;
use crate::fsm::context::StateCell;
use crate::fsm::Owner;

pub struct Router<'a> {
    state: &'a StateCell,
    menu: &'a Inbox,
    led: &'a Inbox,
    rtc: &'a Inbox,
}

impl<'a> Router<'a> {
    pub fn new(state: &'a StateCell, menu: &'a Inbox, led: &'a Inbox, rtc: &'a Inbox) -> Self {
        Self {
            state,
            menu,
            led,
            rtc,
        }
    }

    fn inbox(&self, owner: Owner) -> &'a Inbox {
        match owner {
            Owner::Menu => self.menu,
            Owner::Led => self.led,
            Owner::Rtc => self.rtc,
        }
    }

    /// Deliver `cmd` to the task owning the current state and report
    /// which one that was.
    pub fn dispatch(&self, cmd: Command) -> Owner {
        let state = self.state.get();
        let owner = state.owner();
        debug!("router: {} bytes in {} -> {:?}", cmd.len(), state.name(), owner);
        self.inbox(owner).signal(cmd);
        owner
    }
}
