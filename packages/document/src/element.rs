//! # Builder Element Tree
//!
//! The page document is an ordered forest of [`BuilderElement`] nodes.
//! Elements are identified by opaque string ids that are unique across the
//! whole tree, children order is document order, and an element's kind never
//! changes after creation.

use crate::id::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Open style bag. Keys are camelCase presentation attributes interpreted by
/// the render layer; the core only writes the handful it owns (`position`,
/// `left`, `top`, `width`, `height`, `zIndex`, `transition`, `display`).
pub type StyleMap = HashMap<String, StyleValue>;

/// A single style value: a string (`"12px"`, `"#ffffff"`) or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl StyleValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Text(_) => None,
            StyleValue::Number(n) => Some(*n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

/// Closed set of element kinds. Not extensible at runtime; re-typing an
/// element requires delete + recreate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Text,
    Video,
    Contact,
    Checkout,
    Link,
    Container,
    TwoColumns,
    Image,
    HeroSection,
    AnimatedText,
    QuoteCard,
    FeatureCard,
    LinkButton,
    ShapeRectangle,
    ShapeCircle,
    ShapeTriangle,
    GradientBox,
    GalleryImage,
    VideoPlayer,
    ModernContact,
    PremiumCheckout,
}

impl ElementKind {
    /// Container-like kinds may hold children; every other kind is a leaf.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            ElementKind::Container | ElementKind::TwoColumns | ElementKind::HeroSection
        )
    }

    /// Human-readable label ("hero-section" -> "hero section").
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Video => "video",
            ElementKind::Contact => "contact",
            ElementKind::Checkout => "checkout",
            ElementKind::Link => "link",
            ElementKind::Container => "container",
            ElementKind::TwoColumns => "two columns",
            ElementKind::Image => "image",
            ElementKind::HeroSection => "hero section",
            ElementKind::AnimatedText => "animated text",
            ElementKind::QuoteCard => "quote card",
            ElementKind::FeatureCard => "feature card",
            ElementKind::LinkButton => "link button",
            ElementKind::ShapeRectangle => "shape rectangle",
            ElementKind::ShapeCircle => "shape circle",
            ElementKind::ShapeTriangle => "shape triangle",
            ElementKind::GradientBox => "gradient box",
            ElementKind::GalleryImage => "gallery image",
            ElementKind::VideoPlayer => "video player",
            ElementKind::ModernContact => "modern contact",
            ElementKind::PremiumCheckout => "premium checkout",
        }
    }
}

/// A node in the page document tree.
///
/// `content` is a single string payload whose meaning depends on `kind`
/// (text body, image URL, video URL, link label). `children` is only
/// populated for container-like kinds and serializes away when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub content: String,
    #[serde(default)]
    pub styles: StyleMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BuilderElement>,
}

impl BuilderElement {
    pub fn is_leaf(&self) -> bool {
        !self.kind.accepts_children()
    }
}

/// An element without an id yet: what panels and templates hand to `add`.
/// Instantiation assigns fresh ids to the seed and all nested seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSeed {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub styles: StyleMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSeed>,
}

impl ElementSeed {
    pub fn new(kind: ElementKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            styles: StyleMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ElementSeed) -> Self {
        self.children.push(child);
        self
    }

    /// Materialize the seed into an element, drawing ids from `ids`.
    pub fn instantiate(&self, ids: &mut IdGenerator) -> BuilderElement {
        BuilderElement {
            id: ids.new_id(),
            kind: self.kind,
            content: self.content.clone(),
            styles: self.styles.clone(),
            children: self.children.iter().map(|c| c.instantiate(ids)).collect(),
        }
    }
}

/// Depth-first search over the forest; returns the first match.
pub fn find<'a>(elements: &'a [BuilderElement], id: &str) -> Option<&'a BuilderElement> {
    for element in elements {
        if element.id == id {
            return Some(element);
        }
        if let Some(found) = find(&element.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find`].
pub fn find_mut<'a>(elements: &'a mut [BuilderElement], id: &str) -> Option<&'a mut BuilderElement> {
    for element in elements {
        if element.id == id {
            return Some(element);
        }
        if let Some(found) = find_mut(&mut element.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn contains(elements: &[BuilderElement], id: &str) -> bool {
    find(elements, id).is_some()
}

/// Every id in the forest, in document order.
pub fn collect_ids(elements: &[BuilderElement]) -> Vec<String> {
    fn walk(elements: &[BuilderElement], out: &mut Vec<String>) {
        for element in elements {
            out.push(element.id.clone());
            walk(&element.children, out);
        }
    }

    let mut ids = Vec::new();
    walk(elements, &mut ids);
    ids
}

/// Total node count, nested children included.
pub fn count(elements: &[BuilderElement]) -> usize {
    elements.iter().map(|e| 1 + count(&e.children)).sum()
}
