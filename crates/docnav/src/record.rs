//! Registration records for documented entities
//!
//! A record carries the display title plus whatever the renderer needs to
//! draw the page: an opaque documentation payload, named demos, or a
//! component that replaces doc-driven rendering entirely. The navigation
//! core never looks inside `doc`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DocnavError, Result};

static EMPTY_DOC: serde_json::Value = serde_json::Value::Null;

/// Reference to a renderable example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRef {
    /// Identifier the renderer resolves to an example
    pub id: String,

    /// Optional caption shown next to the example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DemoRef {
    /// Create a demo reference without a caption.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// Attach a caption.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Reference to a component that renders the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    /// Identifier the renderer resolves to a component
    pub id: String,
}

impl ComponentRef {
    /// Create a component reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// How a record asks to be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rendering<'a> {
    /// A component override, used instead of the doc payload
    Component(&'a ComponentRef),

    /// Doc-driven rendering of the opaque payload
    Doc(&'a serde_json::Value),
}

/// One documented entity.
///
/// Invariant: `title` is non-empty and at least one of `doc` or
/// `component` is present. Records are immutable once they are in a
/// registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct RegistrationRecord {
    title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    doc: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    demos: IndexMap<String, DemoRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<ComponentRef>,
}

impl RegistrationRecord {
    /// Create a record rendered from a documentation payload.
    ///
    /// The title must not be blank; use [`try_new`](Self::try_new) for
    /// unchecked input.
    pub fn from_doc(title: impl Into<String>, doc: serde_json::Value) -> Self {
        let title = title.into();
        debug_assert!(!title.trim().is_empty(), "record title must not be empty");
        Self {
            title,
            doc: Some(doc),
            demos: IndexMap::new(),
            component: None,
        }
    }

    /// Create a record rendered by a component override.
    ///
    /// The title must not be blank; use [`try_new`](Self::try_new) for
    /// unchecked input.
    pub fn from_component(title: impl Into<String>, component: ComponentRef) -> Self {
        let title = title.into();
        debug_assert!(!title.trim().is_empty(), "record title must not be empty");
        Self {
            title,
            doc: None,
            demos: IndexMap::new(),
            component: Some(component),
        }
    }

    /// Create a record from optional parts, checking the invariant.
    pub fn try_new(
        title: impl Into<String>,
        doc: Option<serde_json::Value>,
        component: Option<ComponentRef>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DocnavError::invalid_record(title, "title must not be empty"));
        }
        if doc.is_none() && component.is_none() {
            return Err(DocnavError::invalid_record(
                title,
                "record needs a doc or a component",
            ));
        }
        Ok(Self {
            title,
            doc,
            demos: IndexMap::new(),
            component,
        })
    }

    /// Add a named demo.
    pub fn with_demo(mut self, name: impl Into<String>, demo: DemoRef) -> Self {
        self.demos.insert(name.into(), demo);
        self
    }

    /// Add a component override alongside the doc payload.
    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.component = Some(component);
        self
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opaque documentation payload.
    pub fn doc(&self) -> Option<&serde_json::Value> {
        self.doc.as_ref()
    }

    /// Named demos, in authoring order.
    pub fn demos(&self) -> &IndexMap<String, DemoRef> {
        &self.demos
    }

    /// Component override, if any.
    pub fn component(&self) -> Option<&ComponentRef> {
        self.component.as_ref()
    }

    /// Which rendering path applies. The component wins over the doc.
    pub fn rendering(&self) -> Rendering<'_> {
        match (&self.component, &self.doc) {
            (Some(component), _) => Rendering::Component(component),
            (None, Some(doc)) => Rendering::Doc(doc),
            // unreachable through the public constructors
            (None, None) => Rendering::Doc(&EMPTY_DOC),
        }
    }
}

#[derive(Deserialize)]
struct RawRecord {
    title: String,
    #[serde(default)]
    doc: Option<serde_json::Value>,
    #[serde(default)]
    demos: IndexMap<String, DemoRef>,
    #[serde(default)]
    component: Option<ComponentRef>,
}

impl TryFrom<RawRecord> for RegistrationRecord {
    type Error = DocnavError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let mut record = Self::try_new(raw.title, raw.doc, raw.component)?;
        record.demos = raw.demos;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_wins_over_doc() {
        let record = RegistrationRecord::from_doc("Drawer", json!({"name": "Drawer"}))
            .with_component(ComponentRef::new("DrawerPage"));
        assert_eq!(
            record.rendering(),
            Rendering::Component(&ComponentRef::new("DrawerPage"))
        );
    }

    #[test]
    fn test_try_new_requires_payload() {
        let err = RegistrationRecord::try_new("Empty", None, None).unwrap_err();
        assert!(err.to_string().contains("needs a doc or a component"));
    }

    #[test]
    fn test_try_new_requires_title() {
        assert!(RegistrationRecord::try_new("  ", Some(json!({})), None).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "record title must not be empty")]
    fn test_from_doc_rejects_blank_title() {
        let _ = RegistrationRecord::from_doc("  ", json!({}));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "record title must not be empty")]
    fn test_from_component_rejects_empty_title() {
        let _ = RegistrationRecord::from_component("", ComponentRef::new("DrawerPage"));
    }

    #[test]
    fn test_deserialize_with_demos() {
        let record: RegistrationRecord = serde_json::from_value(json!({
            "title": "Button",
            "doc": {"description": "Clickable"},
            "demos": {"primary": {"id": "button-primary"}}
        }))
        .unwrap();

        assert_eq!(record.title(), "Button");
        assert_eq!(record.demos()["primary"], DemoRef::new("button-primary"));
    }

    #[test]
    fn test_deserialize_rejects_bare_title() {
        let result: std::result::Result<RegistrationRecord, _> =
            serde_json::from_value(json!({"title": "Lonely"}));
        assert!(result.is_err());
    }
}
