//! The responsive layout resolver and its change subscription.
//!
//! A [`ViewportResolver`] owns the last viewport reported by the host and
//! the host's [`DisplayMetrics`]. Every read recomputes from that state, so
//! a consumer that re-reads after a change notification never sees stale
//! layout.
//!
//! The resolver is single-threaded: the host delivers updates on the UI
//! thread and handlers run to completion before the next one.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use gridline_layout::{DisplayMetrics, Orientation, Viewport, ViewportResolver};
//!
//! let mut resolver = ViewportResolver::new(Viewport::new(375.0, 667.0), DisplayMetrics::default());
//! assert_eq!(resolver.grid_columns(), 2);
//!
//! let last = Rc::new(Cell::new(None));
//! let seen = Rc::clone(&last);
//! let subscription = resolver.subscribe(move |change| seen.set(Some(change.orientation)));
//!
//! resolver.update(Viewport::new(667.0, 375.0));
//! assert_eq!(last.get(), Some(Orientation::Landscape));
//! assert_eq!(resolver.grid_columns(), 4);
//!
//! subscription.unsubscribe();
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::scale::{SpacingScale, TypographyScale, adaptive_padding};
use crate::viewport::{
    DeviceClass, DisplayMetrics, Orientation, Viewport, classify_device, grid_columns, is_tablet,
};

/// Payload delivered to subscribers on every viewport update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportChange {
    /// The new viewport.
    pub viewport: Viewport,
    /// Orientation computed from the new viewport.
    pub orientation: Orientation,
}

/// Every derived layout value for one viewport, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLayout {
    /// The viewport the values were computed from.
    pub viewport: Viewport,
    /// Device class.
    pub device_class: DeviceClass,
    /// Orientation.
    pub orientation: Orientation,
    /// Whether the viewport is tablet sized.
    pub is_tablet: bool,
    /// Grid column count.
    pub grid_columns: usize,
    /// Spacing scale.
    pub spacing: SpacingScale,
    /// Typography scale.
    pub typography: TypographyScale,
    /// Horizontal container inset.
    pub adaptive_padding: u32,
}

impl ResolvedLayout {
    /// Resolves every layout value for a viewport.
    #[must_use]
    pub fn compute(viewport: Viewport, metrics: &DisplayMetrics) -> Self {
        Self {
            viewport,
            device_class: classify_device(&viewport, metrics),
            orientation: viewport.orientation(),
            is_tablet: is_tablet(&viewport, metrics),
            grid_columns: grid_columns(&viewport, metrics),
            spacing: SpacingScale::for_viewport(&viewport, metrics),
            typography: TypographyScale::for_viewport(&viewport, metrics),
            adaptive_padding: adaptive_padding(&viewport, metrics),
        }
    }
}

type Handler = Rc<dyn Fn(&ViewportChange)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl Registry {
    /// Takes the handler out so the caller can drop it after releasing the
    /// borrow; the handler may own subscriptions of its own.
    fn remove(&mut self, id: u64) -> Option<Handler> {
        let position = self
            .handlers
            .iter()
            .position(|(handler_id, _)| *handler_id == id)?;
        Some(self.handlers.remove(position).1)
    }
}

/// Resolves layout values from the current viewport.
pub struct ViewportResolver {
    viewport: Viewport,
    metrics: DisplayMetrics,
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for ViewportResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportResolver")
            .field("viewport", &self.viewport)
            .field("metrics", &self.metrics)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl ViewportResolver {
    /// Creates a resolver for an initial viewport.
    #[must_use]
    pub fn new(viewport: Viewport, metrics: DisplayMetrics) -> Self {
        Self {
            viewport,
            metrics,
            registry: Rc::default(),
        }
    }

    /// Returns the last observed viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the display metrics in effect.
    #[must_use]
    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    /// Replaces the display metrics. Subscribers are not notified.
    pub fn set_metrics(&mut self, metrics: DisplayMetrics) {
        self.metrics = metrics;
    }

    /// Returns the current device class.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        classify_device(&self.viewport, &self.metrics)
    }

    /// Returns the current orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.viewport.orientation()
    }

    /// Returns whether the current viewport is tablet sized.
    #[must_use]
    pub fn is_tablet(&self) -> bool {
        is_tablet(&self.viewport, &self.metrics)
    }

    /// Returns the current grid column count.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        grid_columns(&self.viewport, &self.metrics)
    }

    /// Returns the current spacing scale.
    #[must_use]
    pub fn spacing(&self) -> SpacingScale {
        SpacingScale::for_viewport(&self.viewport, &self.metrics)
    }

    /// Returns the current typography scale.
    #[must_use]
    pub fn typography(&self) -> TypographyScale {
        TypographyScale::for_viewport(&self.viewport, &self.metrics)
    }

    /// Returns the current horizontal container inset.
    #[must_use]
    pub fn adaptive_padding(&self) -> u32 {
        adaptive_padding(&self.viewport, &self.metrics)
    }

    /// Resolves every layout value for the current viewport.
    #[must_use]
    pub fn snapshot(&self) -> ResolvedLayout {
        ResolvedLayout::compute(self.viewport, &self.metrics)
    }

    /// Registers a handler for viewport updates.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&ViewportChange) + 'static,
    {
        let handler: Handler = Rc::new(handler);
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, handler));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Removes a subscription. Calling this more than once is a no-op.
    pub fn unsubscribe(&self, subscription: &Subscription) {
        subscription.unsubscribe();
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    /// Records a new viewport reported by the host and notifies subscribers.
    ///
    /// The viewport is stored before any handler runs. Handlers may
    /// subscribe or unsubscribe while being notified; a handler removed
    /// during delivery may still receive the in-flight change.
    pub fn update(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let change = ViewportChange {
            viewport,
            orientation: viewport.orientation(),
        };

        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in handlers {
            handler(&change);
        }
    }
}

/// Handle for a registered viewport handler.
///
/// Unsubscribing is idempotent and safe after the resolver is gone.
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    /// Stops further notifications to this handler.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            let removed = registry.borrow_mut().remove(self.id);
            drop(removed);
        }
    }

    /// Returns `true` while the handler is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().handlers.iter().any(|(id, _)| *id == self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
