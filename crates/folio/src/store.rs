//! Reactive state stores.
//!
//! A [`Store`] owns one piece of shared application state and is passed down
//! explicitly as a cheap handle; there are no global or static stores. State
//! changes go through [`Store::dispatch`], which runs the state's [`Reducer`]
//! and then notifies subscribers.
//!
//! # Ordering
//!
//! - The reducer runs under a mutable borrow which is released before any
//!   listener runs, so listeners always observe committed state.
//! - Listeners run in subscription order.
//! - A dispatch issued from inside a listener is queued and reduced after the
//!   current notification round finishes. The last committed value is
//!   therefore always the last one listeners see.
//! - Listeners are only notified when the reducer reports a change.
//!
//! ```rust
//! use folio::store::{Reducer, Store};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Counter(u32);
//!
//! impl Reducer for Counter {
//!     type Action = u32;
//!     fn reduce(&mut self, by: u32) -> bool {
//!         self.0 += by;
//!         by != 0
//!     }
//! }
//!
//! let store = Store::new(Counter::default());
//! let seen = Rc::new(Cell::new(0));
//! let sink = seen.clone();
//! let _sub = store.subscribe(move |c: &Counter| sink.set(c.0));
//!
//! store.dispatch(2);
//! assert_eq!(seen.get(), 2);
//! ```

use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// State that changes in response to actions.
pub trait Reducer {
    /// The actions this state understands.
    type Action;

    /// Applies an action. Returns `true` if the state changed.
    fn reduce(&mut self, action: Self::Action) -> bool;
}

type Listener<S> = Rc<dyn Fn(&S)>;

struct Inner<S: Reducer> {
    state: RefCell<S>,
    listeners: RefCell<Vec<(u64, Listener<S>)>>,
    next_id: Cell<u64>,
    pending: RefCell<VecDeque<S::Action>>,
    dispatching: Cell<bool>,
}

/// A shared handle to reactive state.
///
/// Cloning the handle shares the same state and subscribers.
pub struct Store<S: Reducer> {
    inner: Rc<Inner<S>>,
}

impl<S: Reducer> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Reducer + fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl<S: Reducer + 'static> Store<S> {
    /// Creates a store holding `state`.
    pub fn new(state: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Borrows the current state.
    ///
    /// The borrow must not be held across a [`dispatch`](Self::dispatch).
    pub fn state(&self) -> Ref<'_, S> {
        self.inner.state.borrow()
    }

    /// Reads a value out of the current state.
    pub fn select<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.inner.state.borrow())
    }

    /// Clones the current state.
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.inner.state.borrow().clone()
    }

    /// Applies an action and notifies subscribers if the state changed.
    ///
    /// Called from inside a listener, the action is queued and applied once
    /// the current notification round completes.
    pub fn dispatch(&self, action: S::Action) {
        self.inner.pending.borrow_mut().push_back(action);
        if self.inner.dispatching.get() {
            tracing::trace!("dispatch queued behind running notification round");
            return;
        }

        let _guard = DispatchGuard::enter(&self.inner.dispatching, &self.inner.pending);
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            let changed = self.inner.state.borrow_mut().reduce(action);
            if changed {
                self.notify();
            }
        }
    }

    /// Registers a listener called after every committed change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        let listeners: Vec<(u64, Listener<S>)> = self.inner.listeners.borrow().clone();
        tracing::trace!(listeners = listeners.len(), "notifying store subscribers");
        for (id, listener) in listeners {
            // Skip listeners unsubscribed earlier in this round.
            let live = self
                .inner
                .listeners
                .borrow()
                .iter()
                .any(|(lid, _)| *lid == id);
            if live {
                let state = self.inner.state.borrow();
                listener(&state);
            }
        }
    }
}

/// Marks a dispatch loop as running. On exit, including unwinding out of a
/// panicking listener, it clears the flag and discards queued actions.
struct DispatchGuard<'a, A> {
    flag: &'a Cell<bool>,
    pending: &'a RefCell<VecDeque<A>>,
}

impl<'a, A> DispatchGuard<'a, A> {
    fn enter(flag: &'a Cell<bool>, pending: &'a RefCell<VecDeque<A>>) -> Self {
        flag.set(true);
        Self { flag, pending }
    }
}

impl<A> Drop for DispatchGuard<'_, A> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.try_borrow_mut() {
            if !pending.is_empty() {
                tracing::warn!(dropped = pending.len(), "discarding actions queued by an aborted dispatch");
                pending.clear();
            }
        }
        self.flag.set(false);
    }
}

/// Keeps a store listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Leaves the listener registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.unsubscribe.take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
