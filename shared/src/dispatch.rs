// Main-context mailbox.
//
// Timer blocks, menu actions and button actions never touch application
// state themselves. They post an event here; the mailbox hands events to a
// single consumer one at a time. A post made while the consumer is running
// (for example from inside a platform call) is queued and delivered after
// the current event returns, so state is never mutated re-entrantly.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

type Consumer<E> = Box<dyn FnMut(E)>;

struct Inner<E> {
    queue: RefCell<VecDeque<E>>,
    consumer: RefCell<Option<Consumer<E>>>,
    draining: Cell<bool>,
}

/// Cheap to clone; all clones share one queue. Not `Send`: lives on the
/// thread that runs the UI event loop.
pub struct Mailbox<E> {
    inner: Rc<Inner<E>>,
}

impl<E> Clone for Mailbox<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for Mailbox<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Mailbox<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailbox")
            .field("pending", &self.pending())
            .field("draining", &self.inner.draining.get())
            .finish()
    }
}

impl<E> Mailbox<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                queue: RefCell::new(VecDeque::new()),
                consumer: RefCell::new(None),
                draining: Cell::new(false),
            }),
        }
    }

    /// Install the consumer and deliver anything posted before it existed.
    /// Ignored when called from inside the running consumer.
    pub fn set_consumer<F>(&self, consumer: F)
    where
        F: FnMut(E) + 'static,
    {
        if self.inner.draining.get() {
            warn!("Mailbox consumer replaced while draining; ignored");
            return;
        }
        *self.inner.consumer.borrow_mut() = Some(Box::new(consumer));
        self.drain();
    }

    pub fn post(&self, event: E) {
        self.inner.queue.borrow_mut().push_back(event);
        self.drain();
    }

    pub fn pending(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    fn drain(&self) {
        if self.inner.draining.replace(true) {
            return;
        }

        let mut consumer = self.inner.consumer.borrow_mut();
        if let Some(consumer) = consumer.as_mut() {
            loop {
                let next = self.inner.queue.borrow_mut().pop_front();
                match next {
                    Some(event) => consumer(event),
                    None => break,
                }
            }
        }
        drop(consumer);

        self.inner.draining.set(false);
    }
}
