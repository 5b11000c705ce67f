//! UI component library for Bookworm
//!
//! Components are defined as Rust structs with serializable properties
//! that are rendered by the frontend (Tauri webview). Each component
//! provides:
//!
//! - Type-safe props with builder patterns
//! - Event handling hooks wired by string identifier
//!
//! # Available Components
//!
//! - [`Text`] - Plain text
//! - [`Icon`] - Glyph icon, optionally tappable
//! - [`Container`] - Layout container holding child [`Element`]s

use crate::theme::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    #[default]
    Row,
    /// Column (vertical)
    Column,
}

// =============================================================================
// Glyph
// =============================================================================

/// Opaque handle to an icon resource, resolved by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Glyph {
    /// Platform symbol (e.g. "star.fill")
    System(String),
    /// Bundled image asset
    Asset(String),
}

impl Glyph {
    /// Create a system symbol glyph
    pub fn system(name: impl Into<String>) -> Self {
        Glyph::System(name.into())
    }

    /// Create a bundled asset glyph
    pub fn asset(name: impl Into<String>) -> Self {
        Glyph::Asset(name.into())
    }

    /// Resource name, whichever kind
    pub fn name(&self) -> &str {
        match self {
            Glyph::System(name) | Glyph::Asset(name) => name,
        }
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Text content
    pub content: String,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Glyph to draw
    pub glyph: Glyph,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Icon {
    /// Create a new icon
    pub fn new(glyph: Glyph) -> Self {
        Self {
            id: None,
            glyph,
            color: None,
            on_press: None,
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set icon color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_press = Some(handler.into());
        self
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// A renderable leaf in a component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Text node
    Text(Text),
    /// Icon node
    Icon(Icon),
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl From<Icon> for Element {
    fn from(icon: Icon) -> Self {
        Element::Icon(icon)
    }
}

/// Container/View component for layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Flex direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Child elements, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Container {
    /// Create a row container
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Append a child
    pub fn child(mut self, element: impl Into<Element>) -> Self {
        self.children.push(element.into());
        self
    }

    /// Append several children
    pub fn with_children<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.children.extend(elements.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_name() {
        assert_eq!(Glyph::system("star.fill").name(), "star.fill");
        assert_eq!(Glyph::asset("heart").name(), "heart");
    }

    #[test]
    fn test_glyph_serialization() {
        let json = serde_json::to_value(Glyph::system("star.fill")).unwrap();
        assert_eq!(json["kind"], "system");
        assert_eq!(json["name"], "star.fill");
    }

    #[test]
    fn test_icon_builder() {
        let icon = Icon::new(Glyph::system("star.fill"))
            .with_color("#FFCC00")
            .on_press("rating.select.1");

        assert_eq!(icon.color.as_deref(), Some("#FFCC00"));
        assert_eq!(icon.on_press.as_deref(), Some("rating.select.1"));
    }

    #[test]
    fn test_text_serialization_skips_unset_id() {
        let json = serde_json::to_value(Text::new("Rating")).unwrap();
        assert_eq!(json["content"], "Rating");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_container_children_keep_order() {
        let row = Container::row()
            .with_gap(10.0)
            .child(Text::new("Label"))
            .with_children(vec![
                Icon::new(Glyph::system("a")),
                Icon::new(Glyph::system("b")),
            ]);

        assert_eq!(row.direction, FlexDirection::Row);
        assert_eq!(row.gap, Some(10.0));
        assert_eq!(row.children.len(), 3);
        assert!(matches!(row.children[0], Element::Text(_)));
        match &row.children[2] {
            Element::Icon(icon) => assert_eq!(icon.glyph.name(), "b"),
            other => panic!("expected icon, got {:?}", other),
        }
    }

    #[test]
    fn test_element_tagged_serialization() {
        let element: Element = Icon::new(Glyph::system("star")).into();
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "icon");

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }
}
