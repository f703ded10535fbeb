use std::cell::Cell;

use crate::{
    BindingOptions, ClassBindings, Computed, ParamSlot, QueryBindings, QueryParam,
    ReadOnlyBindingError, Registry,
};

struct Manual {
    a: QueryParam<String>,
    b: QueryParam<String>,
}

fn slot_a(this: &mut Manual) -> &mut dyn ParamSlot {
    &mut this.a
}
fn slot_b(this: &mut Manual) -> &mut dyn ParamSlot {
    &mut this.b
}

thread_local! {
    static REGISTER_CALLS: Cell<usize> = const { Cell::new(0) };
}

impl QueryBindings for Manual {
    const NAME: &'static str = "Manual";

    fn register(bindings: &mut ClassBindings<Self>) -> Result<(), ReadOnlyBindingError> {
        REGISTER_CALLS.with(|c| c.set(c.get() + 1));
        bindings.register::<QueryParam<String>>("a", "a-param", BindingOptions::new(), slot_a)?;
        bindings.register::<QueryParam<String>>("b", "b-param", BindingOptions::new(), slot_b)?;
        Ok(())
    }
}

struct ReadOnly {
    title: Computed<String>,
}

impl QueryBindings for ReadOnly {
    const NAME: &'static str = "ReadOnly";

    fn register(bindings: &mut ClassBindings<Self>) -> Result<(), ReadOnlyBindingError> {
        fn slot(this: &mut ReadOnly) -> &mut dyn ParamSlot {
            &mut this.title
        }
        bindings.register::<Computed<String>>("title", "doc-title", BindingOptions::new(), slot)
    }
}

fn keys<C>(bindings: &ClassBindings<C>) -> Vec<&'static str> {
    bindings.iter().map(|p| p.key()).collect()
}

#[test]
fn register_keeps_order() {
    let mut bindings = ClassBindings::<Manual>::new("Manual");
    bindings
        .register::<QueryParam<String>>("b", "b", BindingOptions::new(), slot_b)
        .unwrap();
    bindings
        .register::<QueryParam<String>>("a", "a", BindingOptions::new(), slot_a)
        .unwrap();
    assert_eq!(keys(&bindings), ["b", "a"]);
}

#[test]
fn register_same_key_overwrites_in_place() {
    let mut bindings = ClassBindings::<Manual>::new("Manual");
    bindings
        .register::<QueryParam<String>>("a", "first", BindingOptions::new(), slot_a)
        .unwrap();
    bindings
        .register::<QueryParam<String>>("b", "b", BindingOptions::new(), slot_b)
        .unwrap();
    bindings
        .register::<QueryParam<String>>(
            "a",
            "second",
            BindingOptions::new().use_json(true),
            slot_a,
        )
        .unwrap();

    assert_eq!(keys(&bindings), ["a", "b"]);
    let a = bindings.iter().next().unwrap().descriptor();
    assert_eq!(a.parameter, "second");
    assert_eq!(a.owner, "Manual");
    assert_eq!(a.options, BindingOptions::new().use_json(true));
}

#[test]
fn register_read_only_fails() {
    let mut bindings = ClassBindings::<ReadOnly>::new("ReadOnly");
    fn slot(this: &mut ReadOnly) -> &mut dyn ParamSlot {
        &mut this.title
    }
    let e = bindings
        .register::<Computed<String>>("title", "doc-title", BindingOptions::new(), slot)
        .unwrap_err();
    assert_eq!(
        e,
        ReadOnlyBindingError {
            owner: "ReadOnly",
            key: "title"
        }
    );
    assert_eq!(e.to_string(), "can not bind read-only value: ReadOnly.title");
    assert!(bindings.is_empty());

    bindings
        .register::<Computed<String>>(
            "title",
            "doc-title",
            BindingOptions::new().export(true),
            slot,
        )
        .unwrap();
    assert_eq!(bindings.len(), 1);
}

#[test]
fn entries_for_registers_once() {
    let registry = Registry::new();
    let before = REGISTER_CALLS.with(|c| c.get());

    let e0 = registry.entries_for::<Manual>().unwrap();
    let e1 = registry.entries_for::<Manual>().unwrap();

    assert_eq!(REGISTER_CALLS.with(|c| c.get()) - before, 1);
    assert!(std::rc::Rc::ptr_eq(&e0, &e1));
    assert_eq!(keys(&*e0), ["a", "b"]);
    assert_eq!(keys(&*e0), keys(&*e1));
    assert_eq!(registry.len(), 1);
}

#[test]
fn entries_for_keeps_registration_error() {
    let registry = Registry::new();
    let e0 = registry.entries_for::<ReadOnly>().err();
    let e1 = registry.entries_for::<ReadOnly>().err();
    assert_eq!(e0, e1);
    assert!(e0.is_some());
}

#[test]
fn separate_registries_are_independent() {
    let r0 = Registry::new();
    let r1 = Registry::new();
    r0.entries_for::<Manual>().unwrap();
    assert_eq!(r0.len(), 1);
    assert!(r1.is_empty());
}
