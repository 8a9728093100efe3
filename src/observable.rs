//! Synchronous publish/subscribe primitives.
//!
//! `Subject` only broadcasts, `Observable` also holds the current value.
//! Notification always runs on the caller's thread, in subscription order.

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// Handle returned by `subscribe`, usable to drop the subscription later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A typed event channel with synchronous, ordered delivery.
pub struct Subject<T> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the handle was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, value: &T) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(value);
        }
    }

    pub fn subscribers_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Holds exactly one value and broadcasts every replacement.
pub struct Observable<T> {
    value: T,
    subject: Subject<T>,
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subject: Subject::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Live access to the held value. Changes made here are not broadcast;
    /// they become visible to subscribers on the next `set` or `notify`.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value, then notifies every subscriber with the new one.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Re-broadcasts the current value without replacing it.
    pub fn notify(&mut self) {
        self.subject.publish(&self.value);
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.subject.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subject.unsubscribe(id)
    }
}
