// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Synchronous, single-threaded change notification.
//!
//! Every stateful type in the crate owns an [`Observable`] and calls
//! [`notify_changed`][Observable::notify_changed] after each mutation. Handlers run
//! immediately, on the caller's stack, in the order they were registered. There is no
//! queueing and no cross-thread delivery.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use log::trace;

/// Token identifying a registered handler. Pass it to
/// [`Observable::unsubscribe`] to stop receiving events.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Subscription(u64);

type Handler<E> = Rc<dyn Fn(&E)>;

/// List of handlers notified of every event of type `E`.
pub struct Observable<E> {
    /// Registered handlers in registration order.
    handlers: RefCell<Vec<(Subscription, Handler<E>)>>,

    /// Next subscription token to hand out.
    next_id: Cell<u64>,
}

impl<E> Observable<E> {
    /// Construct an [`Observable`] with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Register a handler. It is invoked for every subsequent event until it is
    /// unsubscribed.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&E) + 'static,
    {
        let sub = Subscription(self.next_id.get());
        self.next_id.set(sub.0 + 1);
        self.handlers.borrow_mut().push((sub, Rc::new(handler)));
        trace!("subscribed handler {:?}", sub);
        sub
    }

    /// Remove a previously registered handler. Returns false if the handler was not
    /// registered, for example because it was already removed.
    pub fn unsubscribe(&self, sub: Subscription) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().position(|(id, _)| *id == sub) {
            Some(idx) => {
                handlers.remove(idx);
                trace!("unsubscribed handler {:?}", sub);
                true
            }
            None => false,
        }
    }

    /// Deliver `event` to every registered handler, in registration order.
    ///
    /// The handler list is captured before delivery starts, so handlers may subscribe or
    /// unsubscribe while being notified; those changes apply from the next event.
    pub fn notify_changed(&self, event: &E) {
        let snapshot: Vec<Handler<E>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in snapshot {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Returns true if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }
}

impl<E> Default for Observable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observable<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Observable")
            .field("subscribers", &self.len())
            .finish()
    }
}
