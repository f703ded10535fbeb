use std::{cell::RefCell, fmt, rc::Rc};

use derive_ex::derive_ex;
use serde::{de::DeserializeOwned, Serialize};

use crate::{BindError, BindingOptions, EncodeError, ParseError, UrlStore, WriteMode};


/// Describes one bound property of a class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Name of the owning type.
    pub owner: &'static str,
    /// Name of the field.
    pub key: &'static str,
    /// Name of the query parameter.
    pub parameter: String,
    pub options: BindingOptions,
}

/// The live connection between one property and one query parameter.
#[derive_ex(Clone)]
pub struct Link {
    store: Rc<dyn UrlStore>,
    descriptor: Rc<ParamDescriptor>,
}

impl Link {
    pub fn new(store: Rc<dyn UrlStore>, descriptor: Rc<ParamDescriptor>) -> Self {
        Self { store, descriptor }
    }

    pub fn descriptor(&self) -> &ParamDescriptor {
        &self.descriptor
    }

    /// Returns `true` if the parameter is in the current query string.
    pub fn is_present(&self) -> bool {
        self.store
            .query_parameters()
            .has(&self.descriptor.parameter)
    }

    /// Decodes the current value of the parameter.
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, ParseError> {
        let d = &self.descriptor;
        let params = self.store.query_parameters();
        d.options.codec.decode(params.get(&d.parameter), &d.parameter)
    }

    /// Encodes `value` and writes it to the store.
    ///
    /// Returns `true` if the store was written.
    pub fn write<T: Serialize>(&self, value: Option<&T>) -> Result<bool, EncodeError> {
        let encoded = match value {
            Some(value) => self.descriptor.options.codec.encode(value, &self.descriptor)?,
            None => None,
        };
        Ok(self.write_out(encoded.as_deref()))
    }

    /// Sets or removes the parameter.
    ///
    /// The store is written only when the serialized query string changes.
    pub fn write_out(&self, encoded: Option<&str>) -> bool {
        let d = &self.descriptor;
        let mut params = self.store.query_parameters();
        let old = params.to_string();
        match encoded {
            Some(encoded) => params.set(&d.parameter, encoded),
            None => params.delete(&d.parameter),
        }
        let new = params.to_string();
        if new == old {
            return false;
        }
        let path = self.store.path();
        let path = if new.is_empty() {
            path
        } else {
            format!("{path}?{new}")
        };
        tracing::debug!(
            parameter = %d.parameter,
            mode = %d.options.write_mode,
            "{}#{} -> {path}",
            d.owner,
            d.key
        );
        match d.options.write_mode {
            WriteMode::Push => self.store.push_history_state(&path),
            WriteMode::Replace => self.store.replace_history_state(&path),
        }
        true
    }

    fn already_bound(&self) -> BindError {
        BindError::AlreadyBound {
            owner: self.descriptor.owner,
            key: self.descriptor.key,
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Link").field(&self.descriptor).finish()
    }
}

/// A field that [`QueryBinder`](crate::QueryBinder) can bind to a query parameter.
pub trait ParamSlot {
    fn is_bound(&self) -> bool;

    /// Connects the slot to the store and brings the property and the URL in sync.
    fn bind(&mut self, link: Link) -> Result<(), BindError>;
}

/// Whether a slot type can take values from the URL.
///
/// `#[derive(QueryBindings)]` checks this at compile time, so a read-only field without
/// `export` does not compile.
///
/// ```compile_fail
/// use query_binding::{Computed, QueryBindings};
///
/// #[derive(QueryBindings)]
/// struct Page {
///     #[query("doc-title")]
///     title: Computed<String>,
/// }
/// ```
///
/// ```
/// use query_binding::{Computed, QueryBindings};
///
/// #[derive(QueryBindings)]
/// struct Page {
///     #[query("doc-title", export)]
///     title: Computed<String>,
/// }
/// ```
pub trait SlotAccess {
    /// `true` if the slot has no write path.
    const READ_ONLY: bool;
}

/// A pre-existing getter/setter pair behind a bound property.
///
/// The accessor stays the source of truth for reads; writes are mirrored to the URL first.
pub trait Accessor<T> {
    fn get(&self) -> Option<T>;
    fn set(&mut self, value: Option<T>);
}

impl<T: Clone> Accessor<T> for Rc<RefCell<Option<T>>> {
    fn get(&self) -> Option<T> {
        self.borrow().clone()
    }
    fn set(&mut self, value: Option<T>) {
        *self.borrow_mut() = value;
    }
}

/// Creates an [`Accessor`] from a getter and a setter.
pub fn accessor<T>(
    get: impl Fn() -> Option<T> + 'static,
    set: impl FnMut(Option<T>) + 'static,
) -> impl Accessor<T> {
    struct FnAccessor<G, S> {
        get: G,
        set: S,
    }
    impl<T, G, S> Accessor<T> for FnAccessor<G, S>
    where
        G: Fn() -> Option<T>,
        S: FnMut(Option<T>),
    {
        fn get(&self) -> Option<T> {
            (self.get)()
        }
        fn set(&mut self, value: Option<T>) {
            (self.set)(value)
        }
    }
    FnAccessor { get, set }
}

enum Source<T: 'static> {
    Field(Option<T>),
    Accessor(Box<dyn Accessor<T>>),
}

/// A property kept in sync with a query parameter.
///
/// Until it is bound, the value is the declared default. Once bound, reads decode the
/// current URL and writes go to the URL, unless the property was built over an
/// [`Accessor`], which then stays the source of truth for reads.
pub struct QueryParam<T: 'static> {
    source: Source<T>,
    link: Option<Link>,
}

impl<T: 'static> QueryParam<T> {
    pub fn new(default: T) -> Self {
        Self {
            source: Source::Field(Some(default)),
            link: None,
        }
    }

    /// Creates a property without a default value.
    pub fn empty() -> Self {
        Self {
            source: Source::Field(None),
            link: None,
        }
    }

    pub fn with_accessor(accessor: impl Accessor<T> + 'static) -> Self {
        Self {
            source: Source::Accessor(Box::new(accessor)),
            link: None,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.link.is_some()
    }
}

impl<T> QueryParam<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    pub fn get(&self) -> Result<Option<T>, ParseError> {
        match (&self.source, &self.link) {
            (Source::Accessor(a), _) => Ok(a.get()),
            (Source::Field(_), Some(link)) => link.read(),
            (Source::Field(default), None) => Ok(default.clone()),
        }
    }

    /// Sets the value. `None` removes the parameter from the URL.
    pub fn set(&mut self, value: impl Into<Option<T>>) -> Result<(), EncodeError> {
        let value = value.into();
        if let Some(link) = &self.link {
            link.write(value.as_ref())?;
        }
        match &mut self.source {
            Source::Accessor(a) => a.set(value),
            Source::Field(default) => {
                if self.link.is_none() {
                    *default = value;
                }
            }
        }
        Ok(())
    }
}

impl<T> ParamSlot for QueryParam<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    fn is_bound(&self) -> bool {
        self.link.is_some()
    }

    fn bind(&mut self, link: Link) -> Result<(), BindError> {
        if self.link.is_some() {
            return Err(link.already_bound());
        }
        let initial = match link.read::<T>()? {
            Some(value) => Some(value),
            None => match &self.source {
                Source::Field(default) => default.clone(),
                Source::Accessor(a) => a.get(),
            },
        };
        self.link = Some(link);
        if let Err(e) = self.set(initial) {
            self.link = None;
            return Err(e.into());
        }
        Ok(())
    }
}

impl<T: 'static> SlotAccess for QueryParam<T> {
    const READ_ONLY: bool = false;
}

impl<T: 'static> Default for QueryParam<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for QueryParam<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("QueryParam");
        match &self.source {
            Source::Field(default) => d.field("default", default),
            Source::Accessor(_) => d.field("default", &format_args!("<accessor>")),
        };
        d.field("link", &self.link).finish()
    }
}

/// A getter-only property exported to a query parameter.
///
/// The URL is never read back into the property. Binding requires `export` in
/// the binding options.
pub struct Computed<T: 'static> {
    getter: Box<dyn Fn() -> Option<T>>,
    link: Option<Link>,
}

impl<T: 'static> Computed<T> {
    pub fn new(getter: impl Fn() -> Option<T> + 'static) -> Self {
        Self {
            getter: Box::new(getter),
            link: None,
        }
    }

    pub fn get(&self) -> Option<T> {
        (self.getter)()
    }
}

impl<T: Serialize + 'static> Computed<T> {
    /// Writes the current value of the getter to the URL.
    ///
    /// Returns `true` if the store was written.
    pub fn export(&self) -> Result<bool, EncodeError> {
        match &self.link {
            Some(link) => link.write(self.get().as_ref()),
            None => Ok(false),
        }
    }
}

impl<T: 'static> SlotAccess for Computed<T> {
    const READ_ONLY: bool = true;
}

impl<T: Serialize + 'static> ParamSlot for Computed<T> {
    fn is_bound(&self) -> bool {
        self.link.is_some()
    }

    fn bind(&mut self, link: Link) -> Result<(), BindError> {
        if self.link.is_some() {
            return Err(link.already_bound());
        }
        if !link.is_present() {
            link.write(self.get().as_ref())?;
        }
        self.link = Some(link);
        Ok(())
    }
}

impl<T: 'static> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("link", &self.link)
            .finish_non_exhaustive()
    }
}
