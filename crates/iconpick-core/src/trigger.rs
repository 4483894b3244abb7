/// A visibility subscription that fires at most once.
///
/// Once fired (or cancelled) the subscription is detached and every further
/// notification is ignored. Preview loading and the scroll sentinel both rely
/// on this to avoid duplicate fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot {
    armed: bool,
}

impl OneShot {
    pub fn armed() -> Self {
        Self { armed: true }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Report that the observed target became visible.
    /// Returns true only for the first notification.
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    /// Detach without firing.
    pub fn cancel(&mut self) {
        self.armed = false;
    }
}

impl Default for OneShot {
    fn default() -> Self {
        Self::armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut trigger = OneShot::armed();

        assert!(trigger.fire());
        assert!(!trigger.fire());
        assert!(!trigger.is_armed());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut trigger = OneShot::armed();
        trigger.cancel();

        assert!(!trigger.fire());
    }
}
