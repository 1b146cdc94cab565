//! Binding configuration shared by every input widget.

use std::fmt;
use std::rc::Rc;

use crate::error::EmitError;
use crate::event::ChangeEvent;

/// Selects the event on the owning object that signals the bound value changed.
pub type EventSelector<M> = fn(&M) -> &ChangeEvent;

pub type Getter<M, T> = Rc<dyn Fn(&M) -> T>;
pub type Setter<M, T> = Rc<dyn Fn(&M, T) -> Result<(), EmitError>>;
pub type Predicate<M> = Rc<dyn Fn(&M) -> bool>;

/// Data for creating a new input bound to a value of some owning object `M`.
///
/// The config never owns the object or the event; it only knows how to reach
/// them. Many configs may point at the same field.
pub struct InputConfig<M, T> {
    pub label: Option<String>,
    pub label_tooltip: Option<String>,

    /// Seeds the widget on `init` instead of the object's current value.
    pub default_value: Option<T>,

    pub changed_event: EventSelector<M>,
    pub get_value: Getter<M, T>,
    pub set_value: Setter<M, T>,

    /// If set, the input is disabled whenever this evaluates to false.
    pub enable_when: Option<Predicate<M>>,
}

impl<M, T> InputConfig<M, T> {
    pub fn new<G, S>(changed_event: EventSelector<M>, get_value: G, set_value: S) -> Self
    where
        G: Fn(&M) -> T + 'static,
        S: Fn(&M, T) -> Result<(), EmitError> + 'static,
    {
        Self {
            label: None,
            label_tooltip: None,
            default_value: None,
            changed_event,
            get_value: Rc::new(get_value),
            set_value: Rc::new(set_value),
            enable_when: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.label_tooltip = Some(tooltip.into());
        self
    }

    pub fn default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn enable_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&M) -> bool + 'static,
    {
        self.enable_when = Some(Rc::new(predicate));
        self
    }

    pub(crate) fn is_enabled_for(&self, object: &M) -> bool {
        self.enable_when
            .as_ref()
            .is_none_or(|predicate| predicate(object))
    }
}

impl<M, T: Clone> Clone for InputConfig<M, T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            label_tooltip: self.label_tooltip.clone(),
            default_value: self.default_value.clone(),
            changed_event: self.changed_event,
            get_value: Rc::clone(&self.get_value),
            set_value: Rc::clone(&self.set_value),
            enable_when: self.enable_when.clone(),
        }
    }
}

impl<M, T: fmt::Debug> fmt::Debug for InputConfig<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputConfig")
            .field("label", &self.label)
            .field("label_tooltip", &self.label_tooltip)
            .field("default_value", &self.default_value)
            .field("enable_when", &self.enable_when.is_some())
            .finish_non_exhaustive()
    }
}
