use std::{
    any::{Any, TypeId},
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

use derive_ex::derive_ex;

use crate::{BindingOptions, ParamDescriptor, ParamSlot, ReadOnlyBindingError, SlotAccess};

#[cfg(test)]
mod tests;

/// A type whose fields are bound to query parameters.
///
/// Usually implemented with `#[derive(QueryBindings)]`.
pub trait QueryBindings: Sized + 'static {
    /// Name of the type, used in diagnostics.
    const NAME: &'static str;

    /// Registers the bound fields in declaration order.
    fn register(bindings: &mut ClassBindings<Self>) -> Result<(), ReadOnlyBindingError>;
}

/// One registered property of `C`.
#[derive_ex(Clone, bound())]
pub struct BoundProperty<C> {
    descriptor: Rc<ParamDescriptor>,
    slot: fn(&mut C) -> &mut dyn ParamSlot,
}

impl<C> BoundProperty<C> {
    pub fn descriptor(&self) -> &Rc<ParamDescriptor> {
        &self.descriptor
    }
    pub fn key(&self) -> &'static str {
        self.descriptor.key
    }
    pub fn slot<'a>(&self, component: &'a mut C) -> &'a mut dyn ParamSlot {
        (self.slot)(component)
    }
}

/// The bound properties of one type, in registration order.
#[derive_ex(Clone, bound())]
pub struct ClassBindings<C> {
    owner: &'static str,
    properties: Vec<BoundProperty<C>>,
}

impl<C> ClassBindings<C> {
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            properties: Vec::new(),
        }
    }

    /// Registers a property.
    ///
    /// Registering a key again replaces the earlier entry and keeps its position.
    pub fn register<S: ParamSlot + SlotAccess>(
        &mut self,
        key: &'static str,
        parameter: &str,
        options: BindingOptions,
        slot: fn(&mut C) -> &mut dyn ParamSlot,
    ) -> Result<(), ReadOnlyBindingError> {
        if S::READ_ONLY && !options.export {
            return Err(ReadOnlyBindingError {
                owner: self.owner,
                key,
            });
        }
        let property = BoundProperty {
            descriptor: Rc::new(ParamDescriptor {
                owner: self.owner,
                key,
                parameter: parameter.to_owned(),
                options,
            }),
            slot,
        };
        match self.properties.iter_mut().find(|p| p.key() == key) {
            Some(p) => *p = property,
            None => self.properties.push(property),
        }
        Ok(())
    }

    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoundProperty<C>> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a, C> IntoIterator for &'a ClassBindings<C> {
    type Item = &'a BoundProperty<C>;
    type IntoIter = std::slice::Iter<'a, BoundProperty<C>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

type Entry<C> = Result<Rc<ClassBindings<C>>, ReadOnlyBindingError>;

/// Bound properties of every type, keyed by type.
///
/// A type is registered on first lookup. The outcome, including a registration
/// error, is kept for the lifetime of the registry.
#[derive(Default)]
pub struct Registry {
    classes: RefCell<HashMap<TypeId, Rc<dyn Any>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries_for<C: QueryBindings>(&self) -> Entry<C> {
        let id = TypeId::of::<C>();
        if let Some(entry) = self.classes.borrow().get(&id) {
            if let Some(entry) = entry.downcast_ref::<Entry<C>>() {
                return entry.clone();
            }
        }
        let mut bindings = ClassBindings::new(C::NAME);
        let entry = C::register(&mut bindings).map(|()| Rc::new(bindings));
        match &entry {
            Ok(bindings) => tracing::debug!("registered {} bound properties of {}", bindings.len(), C::NAME),
            Err(e) => tracing::debug!("{e}"),
        }
        self.classes
            .borrow_mut()
            .insert(id, Rc::new(entry.clone()));
        entry
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.classes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.borrow().is_empty()
    }
}
