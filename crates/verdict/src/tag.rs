// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased tag attached to a failure for programmatic matching.
#[derive(Clone)]
pub(crate) struct Tag {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Tag {
    pub(crate) fn new<K>(value: K) -> Self
    where
        K: Any + Send + Sync,
    {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<K>(),
        }
    }

    pub(crate) fn downcast_ref<K: Any>(&self) -> Option<&K> {
        (*self.value).downcast_ref::<K>()
    }

    pub(crate) const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.type_name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Timeout(u32);

    #[test]
    fn downcast_matching_type() {
        let tag = Tag::new(Timeout(30));
        assert_eq!(tag.downcast_ref::<Timeout>(), Some(&Timeout(30)));
        assert!(tag.type_name().ends_with("Timeout"));
    }

    #[test]
    fn downcast_unknown_type_is_none() {
        let tag = Tag::new(Timeout(30));
        assert!(tag.downcast_ref::<u32>().is_none());
        assert!(tag.downcast_ref::<String>().is_none());
    }

    #[test]
    fn clones_share_value() {
        let tag = Tag::new(String::from("shared"));
        let clone = tag.clone();
        assert!(std::ptr::eq(
            tag.downcast_ref::<String>().unwrap(),
            clone.downcast_ref::<String>().unwrap()
        ));
    }

    #[test]
    fn debug_shows_type_name() {
        let tag = Tag::new(Timeout(1));
        assert!(format!("{tag:?}").starts_with("Tag(\""));
    }
}
