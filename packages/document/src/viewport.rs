use serde::{Deserialize, Serialize};

/// Preview viewport. Each viewport imposes its own canvas width and
/// resize bounds on elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Viewport {
    /// Fixed canvas width of the preview frame; `None` for desktop, which
    /// takes the full available width.
    pub fn canvas_width(&self) -> Option<f64> {
        match self {
            Viewport::Mobile => Some(375.0),
            Viewport::Tablet => Some(768.0),
            Viewport::Desktop => None,
        }
    }

    pub fn min_width(&self) -> f64 {
        match self {
            Viewport::Mobile => 50.0,
            Viewport::Tablet => 80.0,
            Viewport::Desktop => 100.0,
        }
    }

    pub fn max_width(&self) -> f64 {
        match self {
            Viewport::Mobile => 350.0,
            Viewport::Tablet => 700.0,
            Viewport::Desktop => 1200.0,
        }
    }

    pub fn min_height(&self) -> f64 {
        30.0
    }

    pub fn max_height(&self) -> f64 {
        800.0
    }

    /// Clamp a resized width into this viewport's bounds.
    pub fn clamp_width(&self, width: f64) -> f64 {
        width.clamp(self.min_width(), self.max_width())
    }

    /// Clamp a resized height into this viewport's bounds.
    pub fn clamp_height(&self, height: f64) -> f64 {
        height.clamp(self.min_height(), self.max_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_bounds_table() {
        assert_eq!(Viewport::Mobile.clamp_width(10.0), 50.0);
        assert_eq!(Viewport::Mobile.clamp_width(9999.0), 350.0);
        assert_eq!(Viewport::Tablet.clamp_width(9999.0), 700.0);
        assert_eq!(Viewport::Desktop.clamp_width(9999.0), 1200.0);
        assert_eq!(Viewport::Desktop.clamp_height(1.0), 30.0);
        assert_eq!(Viewport::Desktop.clamp_height(9999.0), 800.0);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Viewport::Mobile).unwrap(), "\"mobile\"");
        let v: Viewport = serde_json::from_str("\"tablet\"").unwrap();
        assert_eq!(v, Viewport::Tablet);
        assert_eq!(Viewport::default(), Viewport::Desktop);
    }
}
