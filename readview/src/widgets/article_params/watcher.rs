use std::cell::Cell;
use std::fmt;

thread_local! {
    static LIVE_WATCHERS: Cell<usize> = const { Cell::new(0) };
}

/// Identity of one acquisition of the outside-press listener.
///
/// The app subscription is keyed by the token, so a new token means a new
/// listener and dropping the token tears the listener down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct WatchToken(u64);

impl fmt::Display for WatchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scoped owner of the outside-press listener.
///
/// At most one token is live at a time. Acquiring while a token is live
/// returns that token instead of issuing a second one.
#[derive(Debug, Default)]
pub(crate) struct DismissWatcher {
    active: Option<WatchToken>,
    issued: u64,
}

impl DismissWatcher {
    /// Start watching, or keep the current listener when already watching.
    pub(crate) fn acquire(&mut self) -> WatchToken {
        if let Some(token) = self.active {
            return token;
        }

        self.issued += 1;
        let token = WatchToken(self.issued);
        self.active = Some(token);
        let live = LIVE_WATCHERS.with(|live| {
            live.set(live.get() + 1);
            live.get()
        });
        log::debug!("outside-press watcher {token} acquired ({live} live)");
        token
    }

    /// Stop watching. Returns the released token, if any.
    pub(crate) fn release(&mut self) -> Option<WatchToken> {
        let released = self.active.take();
        if let Some(token) = released {
            let live = LIVE_WATCHERS.with(|live| {
                live.set(live.get().saturating_sub(1));
                live.get()
            });
            log::debug!(
                "outside-press watcher {token} released ({live} live)"
            );
        }
        released
    }

    /// Token of the live listener.
    pub(crate) fn active(&self) -> Option<WatchToken> {
        self.active
    }

    /// Whether a signal tagged with `token` comes from the live listener.
    pub(crate) fn is_current(&self, token: WatchToken) -> bool {
        self.active == Some(token)
    }
}

impl Drop for DismissWatcher {
    fn drop(&mut self) {
        self.release();
    }
}

/// Number of watchers holding a listener on the current thread.
#[cfg(test)]
pub(crate) fn live_watchers() -> usize {
    LIVE_WATCHERS.with(Cell::get)
}
