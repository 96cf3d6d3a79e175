use std::time::Duration;

/// A short message that disappears on its own after `duration`, or
/// earlier if the player closes it.
#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    shown_at: f64,
    duration: Duration,
    dismissed: bool,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
        now: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            shown_at: now,
            duration,
            dismissed: false,
        }
    }

    pub fn is_visible(&self, now: f64) -> bool {
        !self.dismissed && now - self.shown_at < self.duration.as_secs_f64()
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(now: f64) -> Toast {
        Toast::new("Game Over", "You ate yourself!", Duration::from_secs(9), now)
    }

    #[test]
    fn expires_after_duration() {
        let t = toast(10.0);
        assert!(t.is_visible(10.0));
        assert!(t.is_visible(18.9));
        assert!(!t.is_visible(19.0));
    }

    #[test]
    fn dismiss_hides_immediately() {
        let mut t = toast(0.0);
        t.dismiss();
        assert!(!t.is_visible(0.5));
    }
}
