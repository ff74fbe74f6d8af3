//! Minimal state subscription: selector and dispatch bindings that feed
//! shared state into component render functions.
//!
//! The model is single-threaded and cooperative. A [`Store`] owns the
//! shared state and an externally supplied reducer; components subscribe to
//! derived slices through [`use_selector`] and submit tagged intents through
//! the callable returned by [`use_dispatch`]. A component re-renders only
//! when its projected value changes by value (shallow `PartialEq`
//! comparison), never on unrelated state changes.

use core::fmt;
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

use tracing::trace;

/// Lifecycle phase of a component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not yet mounted; selectors read without subscribing, dispatch is a
    /// no-op.
    Unmounted,
    /// Live: selector subscriptions are active and dispatch submits.
    Mounted,
    /// Tearing down: subscriptions still exist but dispatch is already a
    /// no-op, so teardown cannot corrupt a live subscription list.
    Unmounting,
}

struct ComponentInner {
    phase: Cell<Phase>,
    render: Box<dyn Fn()>,
    guards: RefCell<Vec<SubscriptionGuard>>,
}

/// A component instance owning a render callback and its subscriptions.
///
/// Cloning yields another reference to the same instance.
#[derive(Clone)]
pub struct Component {
    inner: Rc<ComponentInner>,
}

impl Component {
    /// Creates an unmounted component with the given re-render callback.
    pub fn new(render: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(ComponentInner {
                phase: Cell::new(Phase::Unmounted),
                render: Box::new(render),
                guards: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Transitions to [`Phase::Mounted`]; selectors used from now on
    /// subscribe.
    pub fn mount(&self) {
        self.inner.phase.set(Phase::Mounted);
    }

    /// Begins teardown. Dispatch bindings become no-ops immediately;
    /// subscriptions are dropped by [`Component::unmount`].
    pub fn begin_unmount(&self) {
        self.inner.phase.set(Phase::Unmounting);
    }

    /// Completes teardown, dropping every live subscription.
    pub fn unmount(&self) {
        self.inner.phase.set(Phase::Unmounted);
        self.inner.guards.borrow_mut().clear();
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.phase.get()
    }

    fn downgrade(&self) -> Weak<ComponentInner> {
        Rc::downgrade(&self.inner)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("phase", &self.phase())
            .field("subscriptions", &self.inner.guards.borrow().len())
            .finish()
    }
}

trait Deactivate {
    fn deactivate(&self);
}

/// Keeps one subscription alive; dropping it unsubscribes.
pub struct SubscriptionGuard(Rc<dyn Deactivate>);

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.0.deactivate();
    }
}

impl fmt::Debug for SubscriptionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubscriptionGuard")
    }
}

struct Subscriber<S> {
    active: Cell<bool>,
    notify: RefCell<Box<dyn FnMut(&S)>>,
}

impl<S> Deactivate for Subscriber<S> {
    fn deactivate(&self) {
        self.active.set(false);
    }
}

/// The shared state container.
///
/// The reducer is supplied at construction; the store itself knows nothing
/// about the shape of state transitions. Dispatch is synchronous from the
/// caller's point of view: the call returns once the intent has been applied
/// and subscribers notified.
pub struct Store<S, A> {
    state: RefCell<S>,
    reducer: Box<dyn Fn(&S, &A) -> S>,
    subscribers: RefCell<Vec<Rc<Subscriber<S>>>>,
}

impl<S: 'static, A> Store<S, A> {
    /// Creates a store with the given initial state and reducer.
    pub fn new(initial: S, reducer: impl Fn(&S, &A) -> S + 'static) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(initial),
            reducer: Box::new(reducer),
            subscribers: RefCell::new(Vec::new()),
        })
    }

    /// Borrows the current state.
    ///
    /// # Panics
    ///
    /// Panics if called while a dispatch is mutating the state.
    #[must_use]
    pub fn state(&self) -> Ref<'_, S> {
        self.state.borrow()
    }

    /// Reads a derived value from the current state.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Submits a tagged intent: runs the reducer, stores the resulting
    /// state, and notifies subscribers in subscription order.
    ///
    /// # Panics
    ///
    /// Panics on re-entrant dispatch — a subscriber notification must not
    /// dispatch another intent while this one is being applied.
    pub fn dispatch(&self, action: &A) {
        let next = (self.reducer)(&self.state.borrow(), action);
        *self
            .state
            .try_borrow_mut()
            .expect("re-entrant dispatch while subscribers are being notified") = next;
        self.notify();
    }

    fn notify(&self) {
        // Snapshot the subscriber list so notifications may add or drop
        // subscriptions without invalidating the iteration.
        let snapshot: Vec<Rc<Subscriber<S>>> = self.subscribers.borrow().clone();
        {
            let state = self.state.borrow();
            for subscriber in &snapshot {
                if subscriber.active.get() {
                    (subscriber.notify.borrow_mut())(&state);
                }
            }
        }
        self.subscribers
            .borrow_mut()
            .retain(|subscriber| subscriber.active.get());
    }

    fn subscribe(&self, notify: impl FnMut(&S) + 'static) -> SubscriptionGuard {
        let subscriber = Rc::new(Subscriber {
            active: Cell::new(true),
            notify: RefCell::new(Box::new(notify)),
        });
        self.subscribers.borrow_mut().push(subscriber.clone());
        SubscriptionGuard(subscriber)
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<S, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

/// Reads a derived slice of store state and subscribes `component` to
/// re-render whenever that slice changes by value.
///
/// The projection must be pure. While the component is mounted, every
/// dispatch re-runs the projection against the new state and invokes the
/// component's render callback only when the result differs from the
/// previously projected value (shallow `PartialEq`). Calling this on an
/// unmounted component reads the current value without subscribing.
///
/// The subscription is owned by the component and torn down on
/// [`Component::unmount`]. Call this once per component and store slice, at
/// mount time; it is a binding, not a per-render hook.
pub fn use_selector<S, A, V, F>(component: &Component, store: &Rc<Store<S, A>>, projection: F) -> V
where
    S: 'static,
    A: 'static,
    V: PartialEq + Clone + 'static,
    F: Fn(&S) -> V + 'static,
{
    let current = store.with(&projection);
    if component.phase() != Phase::Mounted {
        return current;
    }

    let weak = component.downgrade();
    let mut cached = current.clone();
    let guard = store.subscribe(move |state: &S| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if inner.phase.get() != Phase::Mounted {
            return;
        }
        let next = projection(state);
        if next != cached {
            cached = next;
            (inner.render)();
        }
    });
    component.inner.guards.borrow_mut().push(guard);
    current
}

/// A callable submitting tagged intents on behalf of one component.
///
/// Cloning yields another binding to the same component and store.
pub struct Dispatch<S: 'static, A: 'static> {
    store: Weak<Store<S, A>>,
    component: Weak<ComponentInner>,
}

impl<S, A> Clone for Dispatch<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            component: self.component.clone(),
        }
    }
}

impl<S, A> Dispatch<S, A> {
    /// Submits one intent. A no-op when the owning component is unmounting
    /// or unmounted, or when the store has been dropped.
    pub fn call(&self, action: &A) {
        let Some(component) = self.component.upgrade() else {
            return;
        };
        if component.phase.get() != Phase::Mounted {
            trace!("ignored dispatch from a component that is not mounted");
            return;
        }
        if let Some(store) = self.store.upgrade() {
            store.dispatch(action);
        }
    }
}

impl<S, A> fmt::Debug for Dispatch<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dispatch")
    }
}

/// Returns a dispatch binding for `component` against `store`.
pub fn use_dispatch<S: 'static, A: 'static>(
    component: &Component,
    store: &Rc<Store<S, A>>,
) -> Dispatch<S, A> {
    Dispatch {
        store: Rc::downgrade(store),
        component: component.downgrade(),
    }
}
