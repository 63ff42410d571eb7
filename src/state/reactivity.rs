// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Los subscribers se registran con un guard: al hacer drop del guard se
// eliminan, así un componente desmontado no sigue recibiendo notificaciones.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct ObserverList {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(u64, Callback)>>,
}

/// Lista de callbacks a notificar cuando cambia un estado
#[derive(Clone, Default)]
pub struct Observers {
    list: Rc<ObserverList>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> ObserverGuard
    where
        F: Fn() + 'static,
    {
        let id = self.list.next_id.get();
        self.list.next_id.set(id + 1);
        self.list.callbacks.borrow_mut().push((id, Rc::new(callback)));
        ObserverGuard {
            id,
            list: Rc::downgrade(&self.list),
        }
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Copia de la lista: un callback puede suscribir o desuscribir
        let callbacks: Vec<Callback> = self
            .list
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

/// Desuscribe al hacer drop
#[must_use = "dropping the guard removes the observer"]
pub struct ObserverGuard {
    id: u64,
    list: Weak<ObserverList>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        if let Some(list) = self.list.upgrade() {
            list.callbacks.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    observers: Observers,
}

impl<T: Clone> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            observers: Observers::new(),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Leer sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.observers.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.observers.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> ObserverGuard
    where
        F: Fn() + 'static,
    {
        self.observers.subscribe(callback)
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            observers: self.observers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_update_notify_subscribers() {
        let state = ReactiveState::new(1);
        let calls = Rc::new(Cell::new(0));
        let _guard = {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1))
        };

        state.set(2);
        state.update(|v| *v += 1);
        assert_eq!(state.get(), 3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn dropping_guard_stops_notifications() {
        let observers = Observers::new();
        let calls = Rc::new(Cell::new(0));
        let guard = {
            let calls = calls.clone();
            observers.subscribe(move || calls.set(calls.get() + 1))
        };
        observers.notify();
        drop(guard);
        observers.notify();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clones_share_value_and_observers() {
        let state = ReactiveState::new(String::from("a"));
        let clone = state.clone();
        let calls = Rc::new(Cell::new(0));
        let _guard = {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1))
        };

        clone.set("b".to_string());
        assert_eq!(state.get(), "b");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn callback_may_unsubscribe_during_notify() {
        let observers = Observers::new();
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<ObserverGuard>>> = Rc::new(RefCell::new(None));
        let guard = {
            let slot = slot.clone();
            let calls = calls.clone();
            observers.subscribe(move || {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(guard);

        observers.notify();
        observers.notify();
        assert_eq!(calls.get(), 1);
        assert!(slot.borrow().is_none());
    }
}
