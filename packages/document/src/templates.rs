//! Builtin page templates.
//!
//! A template is a ready-made forest of element seeds plus page settings.
//! Applying one replaces the whole canvas; instantiation draws fresh ids so
//! a template can be applied more than once in a session.

use crate::element::{BuilderElement, ElementKind, ElementSeed};
use crate::id::IdGenerator;
use crate::settings::PageSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Business,
    Portfolio,
    Landing,
    Ecommerce,
}

#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub elements: Vec<ElementSeed>,
    pub settings: PageSettings,
}

impl Template {
    /// Materialize the template's elements with fresh ids.
    pub fn instantiate(&self, ids: &mut IdGenerator) -> Vec<BuilderElement> {
        self.elements.iter().map(|seed| seed.instantiate(ids)).collect()
    }
}

/// The builtin catalog shown in the template gallery.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            name: "Business Landing".to_string(),
            description: "Professional business landing page with hero section and contact form"
                .to_string(),
            category: TemplateCategory::Business,
            elements: vec![
                ElementSeed::new(ElementKind::HeroSection, "Transform Your Business Today")
                    .with_style("background", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
                    .with_style("padding", "4rem 2rem")
                    .with_style("textAlign", "center")
                    .with_style("color", "white")
                    .with_style("borderRadius", "16px"),
                ElementSeed::new(ElementKind::Contact, "Contact Form")
                    .with_style("padding", "2rem")
                    .with_style("backgroundColor", "#ffffff")
                    .with_style("borderRadius", "12px")
                    .with_style("boxShadow", "0 4px 6px rgba(0,0,0,0.07)")
                    .with_style("border", "1px solid #e5e7eb")
                    .with_style("margin", "2rem auto")
                    .with_style("maxWidth", "500px"),
            ],
            settings: PageSettings {
                title: "Business Landing Page".to_string(),
                description: "Professional business website".to_string(),
                ..PageSettings::default()
            },
        },
        Template {
            name: "Creative Portfolio".to_string(),
            description: "Stunning portfolio template for creative professionals".to_string(),
            category: TemplateCategory::Portfolio,
            elements: vec![
                ElementSeed::new(ElementKind::Text, "Creative Designer")
                    .with_style("fontSize", "3rem")
                    .with_style("fontWeight", "bold")
                    .with_style("color", "#1f2937")
                    .with_style("textAlign", "center")
                    .with_style("padding", "2rem"),
                ElementSeed::new(ElementKind::GalleryImage, "/images/placeholder.png")
                    .with_style("width", "300px")
                    .with_style("height", "300px")
                    .with_style("borderRadius", "16px")
                    .with_style("objectFit", "cover")
                    .with_style("boxShadow", "0 10px 25px rgba(0,0,0,0.1)")
                    .with_style("margin", "1rem auto"),
            ],
            settings: PageSettings {
                title: "Creative Portfolio".to_string(),
                description: "Showcase your creative work".to_string(),
                background_color: "#f8fafc".to_string(),
                ..PageSettings::default()
            },
        },
        Template {
            name: "E-commerce Store".to_string(),
            description: "Complete e-commerce template with checkout".to_string(),
            category: TemplateCategory::Ecommerce,
            elements: vec![
                ElementSeed::new(ElementKind::HeroSection, "Shop the Latest Collection")
                    .with_style("background", "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)")
                    .with_style("padding", "3rem 2rem")
                    .with_style("textAlign", "center")
                    .with_style("color", "white")
                    .with_style("borderRadius", "12px"),
                ElementSeed::new(ElementKind::PremiumCheckout, "Premium Checkout")
                    .with_style("padding", "2.5rem")
                    .with_style("backgroundColor", "#ffffff")
                    .with_style("borderRadius", "16px")
                    .with_style("boxShadow", "0 20px 25px rgba(0,0,0,0.1)")
                    .with_style("border", "1px solid #f3f4f6")
                    .with_style("margin", "2rem auto")
                    .with_style("maxWidth", "400px"),
            ],
            settings: PageSettings {
                title: "E-commerce Store".to_string(),
                description: "Modern online store".to_string(),
                ..PageSettings::default()
            },
        },
    ]
}
