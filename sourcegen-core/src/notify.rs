use std::fmt;

pub type ListenerId = u64;

type Listener = Box<dyn FnMut(&str)>;

/// Tells interested observers that a named dialog field changed.
///
/// Listeners run synchronously, in subscription order, on the caller's thread.
#[derive(Default)]
pub struct PropertyNotifier {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: ListenerId,
}

impl PropertyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&str) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn notify(&mut self, property: &str) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(property);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for PropertyNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
