//! Generic input bound to a value of an owning object.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::config::InputConfig;
use crate::error::EmitError;
use crate::event::SubscriptionId;

/// The concrete control behind an [`Input`].
///
/// Implementations only move values in and out of the control; all syncing
/// with the owning object is done by [`Input`].
pub trait InputWidget<T> {
    /// Value currently shown by the control.
    fn input_value(&self) -> T;

    /// Replaces the value shown by the control.
    fn set_input_value(&mut self, value: T);

    /// Enables or greys out the control. Must not change its value.
    fn set_enabled(&mut self, enabled: bool);
}

/// Shared logic for controls mapped to a value of some modifiable object.
///
/// Construction subscribes to the config's change event. From then on every
/// emission re-reads the bound value into the widget and re-evaluates
/// enablement, whoever changed the object. Dropping the input unsubscribes.
///
/// The widget is redrawn only when the bound value differs from what it
/// already shows, so the write → emit → refresh loop after a user edit is
/// a no-op for the control that made the edit.
pub struct Input<M, T, W> {
    inner: Rc<InputInner<M, T, W>>,
}

struct InputInner<M, T, W> {
    mod_object: Rc<M>,
    config: InputConfig<M, T>,
    widget: RefCell<W>,
    enabled: Cell<Option<bool>>,
    subscription: Cell<Option<SubscriptionId>>,
}

impl<M, T, W> Input<M, T, W>
where
    M: 'static,
    T: PartialEq + Clone + 'static,
    W: InputWidget<T> + 'static,
{
    /// Binds `widget` to `mod_object` and subscribes to its change event.
    ///
    /// The widget is not touched until [`Input::init`] is called.
    pub fn new(mod_object: Rc<M>, config: InputConfig<M, T>, widget: W) -> Self {
        let inner = Rc::new(InputInner {
            mod_object,
            config,
            widget: RefCell::new(widget),
            enabled: Cell::new(None),
            subscription: Cell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let event = (inner.config.changed_event)(&*inner.mod_object);
        let id = event.subscribe(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.refresh();
            }
        });
        inner.subscription.set(Some(id));

        Self { inner }
    }

    /// Seeds the widget from the default value if one is configured,
    /// otherwise from the object's current value, then applies enablement.
    pub fn init(&self) {
        let inner = &self.inner;
        let value = match &inner.config.default_value {
            Some(default) => default.clone(),
            None => (inner.config.get_value)(&*inner.mod_object),
        };
        inner.show(value);
        inner.update_enabled();
    }

    /// Writes the widget's current value into the owning object.
    ///
    /// Widgets call this whenever the user edits the control.
    pub fn input_changed(&self) -> Result<(), EmitError> {
        let inner = &self.inner;
        let value = inner.widget.borrow().input_value();
        (inner.config.set_value)(&*inner.mod_object, value)
    }

    /// Applies a user edit to the widget, then propagates it.
    pub fn edit<F>(&self, edit: F) -> Result<(), EmitError>
    where
        F: FnOnce(&mut W),
    {
        {
            let mut widget = self.inner.widget.borrow_mut();
            edit(&mut widget);
        }
        self.input_changed()
    }

    pub fn with_widget<R>(&self, read: impl FnOnce(&W) -> R) -> R {
        read(&self.inner.widget.borrow())
    }

    /// Value currently displayed by the widget.
    pub fn displayed_value(&self) -> T {
        self.inner.widget.borrow().input_value()
    }

    /// Enablement after the last refresh; true before `init`.
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.get().unwrap_or(true)
    }

    pub fn label(&self) -> Option<&str> {
        self.inner.config.label.as_deref()
    }

    pub fn label_tooltip(&self) -> Option<&str> {
        self.inner.config.label_tooltip.as_deref()
    }

    pub fn mod_object(&self) -> &Rc<M> {
        &self.inner.mod_object
    }
}

impl<M, T, W> InputInner<M, T, W>
where
    T: PartialEq,
    W: InputWidget<T>,
{
    fn refresh(&self) {
        let value = (self.config.get_value)(&*self.mod_object);
        self.show(value);
        self.update_enabled();
    }

    fn show(&self, value: T) {
        let Ok(mut widget) = self.widget.try_borrow_mut() else {
            tracing::warn!("input widget busy during refresh; skipping redisplay");
            return;
        };
        if widget.input_value() != value {
            widget.set_input_value(value);
        }
    }

    fn update_enabled(&self) {
        let enabled = self.config.is_enabled_for(&*self.mod_object);
        if self.enabled.get() == Some(enabled) {
            return;
        }
        if let Ok(mut widget) = self.widget.try_borrow_mut() {
            widget.set_enabled(enabled);
            self.enabled.set(Some(enabled));
        }
    }
}

impl<M, T, W> Drop for InputInner<M, T, W> {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            (self.config.changed_event)(&*self.mod_object).unsubscribe(id);
        }
    }
}
