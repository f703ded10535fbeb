use std::{any::type_name, fmt::Debug};

#[cfg(test)]
mod tests;

/// Calls `f`, logging the arguments and the return value.
pub fn log_call<A: Debug, R: Debug>(
    owner: &str,
    key: &str,
    args: A,
    f: impl FnOnce(A) -> R,
) -> R {
    tracing::info!("{owner}.{key} args: {args:?}");
    let value = f(args);
    tracing::info!("{owner}.{key} returned: {} {value:?}", type_name::<R>());
    value
}

/// Calls a fallible `f`, logging the arguments and the returned value.
///
/// Errors are logged only if `log_errors` is set. The result is returned unchanged.
pub fn log_call_result<A: Debug, T: Debug, E: Debug>(
    owner: &str,
    key: &str,
    log_errors: bool,
    args: A,
    f: impl FnOnce(A) -> Result<T, E>,
) -> Result<T, E> {
    tracing::info!("{owner}.{key} args: {args:?}");
    let result = f(args);
    match &result {
        Ok(value) => tracing::info!("{owner}.{key} returned: {} {value:?}", type_name::<T>()),
        Err(e) if log_errors => tracing::info!("{owner}.{key} produced an error: {e:?}"),
        Err(_) => {}
    }
    result
}

/// A property that logs every read and write.
#[derive(Debug, Default)]
pub struct Logged<T> {
    owner: &'static str,
    key: &'static str,
    value: T,
}

impl<T: Debug> Logged<T> {
    pub fn new(owner: &'static str, key: &'static str, value: T) -> Self {
        Self { owner, key, value }
    }

    pub fn get(&self) -> &T {
        tracing::info!("{}.{} GET: {:?}", self.owner, self.key, self.value);
        &self.value
    }

    pub fn set(&mut self, value: T) {
        tracing::info!("{}.{} SET: {:?}", self.owner, self.key, value);
        self.value = value;
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}
