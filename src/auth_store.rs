use crate::session::Session;


// Holds the current session and updates subscribers on any change. Views
// observe the signed-in identity through this store instead of reaching for
// ambient auth state; the host feeds it from the auth provider.
pub type AuthStore = ObservableValue<Session>;

#[derive(Default, Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct SubscriptionId(usize);

// Generic update-broadcasting cell. Single-threaded by design: the client
// runs on one logical thread, so subscribers don't need `Send`.
pub struct ObservableValue<V> {
    value: V,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn(&V)>)>,
    next_subscription_id: SubscriptionId,
}

impl<V: Default> ObservableValue<V> {
    pub fn new() -> Self {
        Self {
            value: V::default(),
            subscribers: Vec::new(),
            next_subscription_id: SubscriptionId(0),
        }
    }
}

impl<V> ObservableValue<V> {
    pub fn get(&self) -> &V { &self.value }

    // Replaces the value and notifies all subscribers, in subscription order.
    // Notifies even if the new value equals the old one: deciding whether a
    // change is interesting is the observer's job.
    pub fn set(&mut self, value: V) {
        self.value = value;
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.value);
        }
    }

    // Registers a subscriber and immediately calls it with the current value,
    // so late subscribers still observe the present state.
    pub fn subscribe(&mut self, subscriber: impl Fn(&V) + 'static) -> SubscriptionId {
        let subscription_id = self.next_subscription_id;
        self.next_subscription_id.0 += 1;
        subscriber(&self.value);
        self.subscribers.push((subscription_id, Box::new(subscriber)));
        subscription_id
    }

    pub fn unsubscribe(&mut self, subscription_id: SubscriptionId) {
        self.subscribers.retain(|(id, _)| *id != subscription_id);
    }
}
