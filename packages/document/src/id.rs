use crate::element::BuilderElement;
use crc32fast::Hasher;

/// Derive a page seed from its name using CRC32
pub fn page_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for elements within one page
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Page seed (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(page_name: &str) -> Self {
        Self {
            seed: page_seed(page_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get the page seed
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Advance the counter past every id in `elements` that was minted from
    /// this generator's seed. Called after restoring a snapshot so newly
    /// assigned ids cannot collide with restored ones.
    pub fn resume_after(&mut self, elements: &[BuilderElement]) {
        fn walk(gen: &mut IdGenerator, elements: &[BuilderElement]) {
            for element in elements {
                if let Some(suffix) = element.id.strip_prefix(gen.seed.as_str()) {
                    if let Ok(n) = suffix.trim_start_matches('-').parse::<u32>() {
                        gen.count = gen.count.max(n);
                    }
                }
                walk(gen, &element.children);
            }
        }

        walk(self, elements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, ElementSeed};

    #[test]
    fn test_page_seed_is_stable() {
        let a = page_seed("landing");
        let b = page_seed("landing");
        assert_eq!(a, b);

        let c = page_seed("pricing");
        assert_ne!(a, c);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new("landing");

        let id1 = ids.new_id();
        let id2 = ids.new_id();
        let id3 = ids.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = ids.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_resume_after_skips_restored_ids() {
        let mut ids = IdGenerator::from_seed("abc".to_string());
        let container = ElementSeed::new(ElementKind::Container, "")
            .with_child(ElementSeed::new(ElementKind::Text, "hi"))
            .instantiate(&mut ids);

        // A fresh generator with the same seed would re-mint "abc-1".
        let mut restored = IdGenerator::from_seed("abc".to_string());
        restored.resume_after(std::slice::from_ref(&container));

        assert_eq!(restored.new_id(), "abc-3");
    }

    #[test]
    fn test_resume_after_ignores_foreign_seeds() {
        let mut other = IdGenerator::from_seed("other".to_string());
        let element = ElementSeed::new(ElementKind::Text, "hi").instantiate(&mut other);

        let mut ids = IdGenerator::from_seed("abc".to_string());
        ids.resume_after(std::slice::from_ref(&element));

        assert_eq!(ids.new_id(), "abc-1");
    }
}
