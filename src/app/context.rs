//! Capability store shared with every component of the application.

use std::any::{
    Any,
    TypeId,
    type_name,
};
use std::collections::HashMap;
use std::rc::Rc;

use super::AppError;

/// Type-keyed store of shared capabilities.
///
/// Plugins provide capabilities while the application is being set up;
/// components read them through the context they are rendered with. Each
/// type can be provided once.
#[derive(Default)]
pub struct AppContext {
    capabilities: HashMap<TypeId, (&'static str, Rc<dyn Any>)>,
}

impl AppContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a capability.
    ///
    /// # Errors
    /// Returns `DuplicateCapability` if a value of the same type was already provided.
    pub fn provide<T: 'static>(&mut self, value: Rc<T>) -> Result<(), AppError> {
        let id = TypeId::of::<T>();
        if self.capabilities.contains_key(&id) {
            return Err(AppError::DuplicateCapability(type_name::<T>()));
        }

        tracing::debug!(capability = type_name::<T>(), "Capability provided");
        let value: Rc<dyn Any> = value;
        self.capabilities.insert(id, (type_name::<T>(), value));
        Ok(())
    }

    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<Rc<T>> {
        let (_, value) = self.capabilities.get(&TypeId::of::<T>())?;
        Rc::clone(value).downcast::<T>().ok()
    }

    /// Like [`AppContext::get`], but a missing capability is an error.
    ///
    /// # Errors
    /// Returns `MissingCapability` if no value of type `T` was provided.
    pub fn require<T: 'static>(&self) -> Result<Rc<T>, AppError> {
        self.get::<T>().ok_or(AppError::MissingCapability(type_name::<T>()))
    }

    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.capabilities.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.capabilities.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        f.debug_struct("AppContext").field("capabilities", &names).finish()
    }
}
