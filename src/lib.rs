pub mod classes;
pub mod config;
pub mod element;
pub mod extract;
pub mod generator;
pub mod stylesheet;
pub mod tags;
pub mod tracker;

pub use classes::{Class, Color};
pub use config::{ConfigError, UtilityConfig};
pub use element::Element;
pub use generator::{GenerationResult, RuleSource};
pub use stylesheet::{Rule, Stylesheet};
pub use tracker::UsageTracker;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{bg, flex, items_center, p, rounded_full};
    use crate::test_support::tracker_guard;

    #[test]
    fn tracked_classes_survive_generation_and_extraction() {
        let _guard = tracker_guard();
        tracker::global().reset();

        let card = vec![flex(), items_center(), p(6), bg(Color::Slate, 50), rounded_full()];
        let names: Vec<&str> = card.iter().map(Class::as_str).collect();
        assert_eq!(
            names,
            vec!["flex", "items-center", "p-6", "bg-slate-50", "rounded-full"]
        );

        let used = tracker::global().snapshot();
        let minimal = extract::minimal(generator::full_stylesheet(), &used);
        assert_eq!(minimal.declaration(".flex"), Some("display: flex"));
        assert_eq!(minimal.declaration(".p-6"), Some("padding: 1.50rem"));
        assert_eq!(minimal.declaration(".rounded-full"), Some("border-radius: 9999px"));
        assert!(minimal.declaration(".p-4").is_none());
    }

    #[test]
    fn document_render_reflects_tracked_usage() {
        let _guard = tracker_guard();
        tracker::global().reset();

        let mut page = tags::html([
            tags::head([tags::title("Dashboard")]),
            tags::body([tags::div([tags::h1("Stats")])
                .class([flex(), p(2)])]),
        ]);
        let html = page.render();

        assert!(html.contains(r#"<div class="flex p-2">"#));
        assert!(html.contains(".flex { display: flex }"));
        assert!(html.contains(".p-2 { padding: 0.50rem }"));
        assert!(!html.contains(".items-center"));
    }
}
