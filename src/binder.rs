use std::rc::Rc;

use crate::{BindError, Link, QueryBindings, Registry, UrlStore};

/// The post-construction hook of a component.
///
/// [`QueryBinder`] calls it exactly once, after the bound fields are initialized.
pub trait OnInit {
    fn on_init(&mut self) {}
}

/// Initializes bound properties of components against a [`UrlStore`].
pub struct QueryBinder {
    store: Rc<dyn UrlStore>,
    registry: Registry,
}

impl QueryBinder {
    pub fn new(store: impl UrlStore + 'static) -> Self {
        Self::from_rc(Rc::new(store))
    }

    pub fn from_rc(store: Rc<dyn UrlStore>) -> Self {
        Self {
            store,
            registry: Registry::new(),
        }
    }

    pub fn store(&self) -> &Rc<dyn UrlStore> {
        &self.store
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Binds every registered property of `component` in registration order,
    /// then calls [`OnInit::on_init`].
    ///
    /// `on_init` is called even if binding fails; binding stops at the first error.
    pub fn init<C: QueryBindings + OnInit>(&self, component: &mut C) -> Result<(), BindError> {
        let result = self.bind_all(component);
        component.on_init();
        result
    }

    /// Initializes a newly constructed component and returns it.
    pub fn create<C: QueryBindings + OnInit>(&self, mut component: C) -> Result<C, BindError> {
        self.init(&mut component)?;
        Ok(component)
    }

    fn bind_all<C: QueryBindings>(&self, component: &mut C) -> Result<(), BindError> {
        let bindings = self.registry.entries_for::<C>()?;
        for property in &*bindings {
            let link = Link::new(self.store.clone(), property.descriptor().clone());
            property.slot(component).bind(link)?;
        }
        Ok(())
    }
}
