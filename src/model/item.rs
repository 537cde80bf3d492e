//! Labeled item: an opaque display handle paired with a search label.

use serde::Serialize;

/// A display row paired with the label it is searched by.
///
/// The handle belongs to the presentation layer. Nothing in the filter
/// core looks inside it, so any type works: a widget id, a row record,
/// or a plain index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item<H> {
    handle: H,
    label: String,
}

impl<H> Item<H> {
    /// Pair a display handle with its search label.
    pub fn new(handle: H, label: impl Into<String>) -> Self {
        Self {
            handle,
            label: label.into(),
        }
    }

    /// The opaque display handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// The label matched against queries.
    pub fn label(&self) -> &str {
        &self.label
    }
}
