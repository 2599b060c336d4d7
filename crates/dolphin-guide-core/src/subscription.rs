//! Scoped listener subscriptions.
//!
//! Every listener a section installs (window scroll, window resize, the body
//! ResizeObserver) is represented by a [`Subscription`] that runs its release
//! callback exactly once: on [`Subscription::release`] or on drop. A section
//! keeps its subscriptions in a [`SubscriptionSet`] that is dropped with the
//! section, so nothing outlives the instance that registered it.

use std::fmt;

type Release = Box<dyn FnOnce()>;

/// Handle for one registered listener.
pub struct Subscription {
    name: &'static str,
    release: Option<Release>,
}

impl Subscription {
    /// Wrap a registered listener with the callback that removes it.
    pub fn new(name: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            name,
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Remove the listener now. Later calls and the eventual drop are no-ops.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(listener = self.name, "Releasing subscription");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .field("active", &self.is_active())
            .finish()
    }
}

/// All subscriptions held by one owner.
#[derive(Debug)]
pub struct SubscriptionSet {
    owner: String,
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            subscriptions: Vec::new(),
        }
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Number of listeners not yet released.
    pub fn active(&self) -> usize {
        self.subscriptions.iter().filter(|s| s.is_active()).count()
    }

    /// Release every listener in registration order.
    pub fn release_all(&mut self) {
        let active = self.active();
        if active > 0 {
            tracing::debug!(owner = %self.owner, listeners = active, "Releasing listeners");
        }
        for subscription in &mut self.subscriptions {
            subscription.release();
        }
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.release_all();
    }
}
