use std::time::Duration;

/// Pages the portal can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Dashboard,
    Admin,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
            Destination::Admin => "/admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Adds a history entry.
    Push(Destination),
    /// Replaces the current history entry, so back does not return here.
    Replace(Destination),
}

pub trait Navigate {
    fn push(&self, to: Destination);
    fn replace(&self, to: Destination);

    fn navigate(&self, navigation: Navigation) {
        match navigation {
            Navigation::Push(to) => self.push(to),
            Navigation::Replace(to) => self.replace(to),
        }
    }
}

/// A navigation to perform once `delay` has elapsed.
///
/// Nothing happens if the [`fire`](Self::fire) future is dropped before the
/// delay runs out, which is how a page cancels it on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedRedirect {
    pub navigation: Navigation,
    pub delay: Duration,
}

impl DelayedRedirect {
    pub fn replace(to: Destination, delay: Duration) -> Self {
        Self {
            navigation: Navigation::Replace(to),
            delay,
        }
    }

    pub async fn fire<F, Fut>(self, navigator: &impl Navigate, sleep: F)
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        sleep(self.delay).await;
        tracing::debug!(navigation = ?self.navigation, "delayed redirect fired");
        navigator.navigate(self.navigation);
    }
}
