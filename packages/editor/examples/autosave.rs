//! Drives a short editing session with an auto-save subscriber attached.
//!
//! Run with: `cargo run -p pageforge-editor --example autosave`

use std::cell::RefCell;
use std::rc::Rc;

use pageforge_document::{presets, ElementKind, ProjectSnapshot};
use pageforge_editor::{EditSession, ElementPatch};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut session = EditSession::new("demo-page");

    // Auto-save: an external subscriber, notified after every recorded
    // snapshot. Here it just keeps the latest serialized project around.
    let saved: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    {
        let saved = saved.clone();
        let settings = session.page_settings().clone();
        session.subscribe(move |elements| {
            let snapshot = ProjectSnapshot::new(
                elements.to_vec(),
                settings.clone(),
                Default::default(),
            );
            if let Ok(json) = snapshot.to_json() {
                *saved.borrow_mut() = Some(json);
            }
        });
    }

    let hero = session.add_element(presets::seed(ElementKind::HeroSection));
    let text = session.add_element(presets::seed(ElementKind::Text));

    session.update_element(&text, ElementPatch::content("Welcome aboard"));
    session.duplicate_element(&hero);
    session.undo();

    println!(
        "session holds {} elements at version {}",
        session.element_count(),
        session.version()
    );
    let saved_len = saved.borrow().as_ref().map(|json| json.len());
    if let Some(len) = saved_len {
        println!("last auto-saved payload: {} bytes", len);
    }
}
