//! Default element seeds inserted by the components panel.
//!
//! One seed per [`ElementKind`]: the content and style bag a freshly added
//! element starts with before the user customizes it.

use crate::element::{ElementKind, ElementSeed};

/// The default seed for a kind.
pub fn seed(kind: ElementKind) -> ElementSeed {
    match kind {
        ElementKind::Text => ElementSeed::new(kind, "Edit this text")
            .with_style("fontSize", "16px")
            .with_style("fontWeight", "normal")
            .with_style("color", "#1f2937")
            .with_style("padding", "8px")
            .with_style("lineHeight", "1.6"),

        ElementKind::Container => ElementSeed::new(kind, "")
            .with_style("padding", "2rem")
            .with_style("backgroundColor", "#f8fafc")
            .with_style("borderRadius", "12px")
            .with_style("minHeight", "120px"),

        ElementKind::TwoColumns => ElementSeed::new(kind, "")
            .with_style("display", "grid")
            .with_style("gridTemplateColumns", "1fr 1fr")
            .with_style("gap", "2rem")
            .with_style("padding", "1.5rem"),

        ElementKind::HeroSection => ElementSeed::new(kind, "Welcome to the Future")
            .with_style("background", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
            .with_style("padding", "4rem 2rem")
            .with_style("textAlign", "center")
            .with_style("color", "white")
            .with_style("borderRadius", "16px"),

        ElementKind::Image => ElementSeed::new(kind, "/images/placeholder.png")
            .with_style("width", "300px")
            .with_style("height", "200px")
            .with_style("borderRadius", "12px")
            .with_style("objectFit", "cover"),

        ElementKind::Link => ElementSeed::new(kind, "Click here")
            .with_style("color", "#3b82f6")
            .with_style("textDecoration", "underline")
            .with_style("padding", "4px")
            .with_style("fontSize", "16px"),

        ElementKind::Contact => ElementSeed::new(kind, "Contact Form")
            .with_style("padding", "1.5rem")
            .with_style("border", "1px solid #e5e7eb")
            .with_style("borderRadius", "12px")
            .with_style("backgroundColor", "#ffffff")
            .with_style("boxShadow", "0 4px 6px -1px rgba(0, 0, 0, 0.1)"),

        ElementKind::Checkout => ElementSeed::new(kind, "Stripe Checkout")
            .with_style("padding", "1.5rem")
            .with_style("border", "1px solid #e5e7eb")
            .with_style("borderRadius", "12px")
            .with_style("backgroundColor", "#ffffff")
            .with_style("boxShadow", "0 4px 6px -1px rgba(0, 0, 0, 0.1)"),

        ElementKind::Video => ElementSeed::new(kind, "https://example.com/video.mp4")
            .with_style("width", "100%")
            .with_style("height", "300px")
            .with_style("borderRadius", "12px"),

        ElementKind::AnimatedText => ElementSeed::new(kind, "Animated headline")
            .with_style("fontSize", "2rem")
            .with_style("fontWeight", "bold")
            .with_style("color", "#1f2937")
            .with_style("textAlign", "center")
            .with_style("padding", "1rem"),

        ElementKind::QuoteCard => ElementSeed::new(kind, "Every great site starts with a single block.")
            .with_style("padding", "2rem")
            .with_style("backgroundColor", "#f8fafc")
            .with_style("borderRadius", "16px")
            .with_style("fontStyle", "italic")
            .with_style("borderLeft", "4px solid #3b82f6"),

        ElementKind::FeatureCard => ElementSeed::new(kind, "Feature highlight")
            .with_style("padding", "1.5rem")
            .with_style("backgroundColor", "#ffffff")
            .with_style("borderRadius", "16px")
            .with_style("border", "1px solid #e5e7eb")
            .with_style("boxShadow", "0 4px 6px rgba(0,0,0,0.07)"),

        ElementKind::LinkButton => ElementSeed::new(kind, "Get Started")
            .with_style("padding", "12px 24px")
            .with_style("backgroundColor", "#3b82f6")
            .with_style("color", "#ffffff")
            .with_style("borderRadius", "8px")
            .with_style("fontWeight", "600")
            .with_style("textAlign", "center")
            .with_style("display", "inline-block"),

        ElementKind::ShapeRectangle => ElementSeed::new(kind, "Rectangle")
            .with_style("width", "200px")
            .with_style("height", "100px")
            .with_style("backgroundColor", "#3b82f6")
            .with_style("borderRadius", "8px"),

        ElementKind::ShapeCircle => ElementSeed::new(kind, "Circle")
            .with_style("width", "150px")
            .with_style("height", "150px")
            .with_style("backgroundColor", "#10b981")
            .with_style("borderRadius", "50%"),

        ElementKind::ShapeTriangle => ElementSeed::new(kind, "Triangle")
            .with_style("width", "150px")
            .with_style("height", "130px")
            .with_style("backgroundColor", "#f59e0b"),

        ElementKind::GradientBox => ElementSeed::new(kind, "Gradient")
            .with_style("width", "250px")
            .with_style("height", "150px")
            .with_style("background", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
            .with_style("borderRadius", "12px"),

        ElementKind::GalleryImage => ElementSeed::new(kind, "/images/placeholder.png")
            .with_style("width", "300px")
            .with_style("height", "300px")
            .with_style("borderRadius", "16px")
            .with_style("objectFit", "cover")
            .with_style("boxShadow", "0 10px 25px rgba(0,0,0,0.1)"),

        ElementKind::VideoPlayer => ElementSeed::new(kind, "https://example.com/video.mp4")
            .with_style("width", "100%")
            .with_style("height", "400px")
            .with_style("borderRadius", "16px")
            .with_style("backgroundColor", "#0f172a"),

        ElementKind::ModernContact => ElementSeed::new(kind, "Contact Us")
            .with_style("maxWidth", "400px")
            .with_style("padding", "24px"),

        ElementKind::PremiumCheckout => ElementSeed::new(kind, "Premium Checkout")
            .with_style("padding", "2.5rem")
            .with_style("backgroundColor", "#ffffff")
            .with_style("borderRadius", "16px")
            .with_style("boxShadow", "0 20px 25px rgba(0,0,0,0.1)")
            .with_style("border", "1px solid #f3f4f6")
            .with_style("maxWidth", "400px"),
    }
}
