use std::any::{type_name, Any, TypeId};

/// A type-erased setting value that remembers what it was stored as
#[derive(Debug)]
pub(crate) struct AnyValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl AnyValue {
    /// Create a new AnyValue from a value of any type that implements Any, Send, and Sync
    pub(crate) fn new<T: 'static + Any + Send + Sync>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Check if the contained value is of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Name of the type the value was stored as
    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}
