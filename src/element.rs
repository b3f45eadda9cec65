use std::collections::BTreeMap;

use crate::classes::Class;
use crate::extract;
use crate::generator;
use crate::tags;
use crate::tracker;

const SELF_CLOSING_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    content: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn text_node(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, classes: impl IntoIterator<Item = Class>) -> Self {
        let names: Vec<String> = classes.into_iter().map(String::from).collect();
        self.attributes.insert("class".to_string(), names.join(" "));
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attributes.insert("id".to_string(), id.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn render(&mut self) -> String {
        if let Some(head) = self.find_head_mut() {
            let used = tracker::global().snapshot();
            let minimal = extract::minimal(generator::full_stylesheet(), &used);
            head.children.push(tags::style(minimal.serialize()));
        }
        self.to_html()
    }

    fn find_head_mut(&mut self) -> Option<&mut Element> {
        if self.tag == "head" {
            Some(self)
        } else {
            self.children
                .iter_mut()
                .find_map(|child| child.find_head_mut())
        }
    }

    pub fn to_html(&self) -> String {
        if self.tag.is_empty() {
            return self.content.clone();
        }

        let mut html = format!("<{}", self.tag);
        for (key, value) in &self.attributes {
            html.push_str(&format!(r#" {}="{}""#, key, value));
        }

        if is_self_closing(&self.tag) {
            html.push_str(" />");
            return html;
        }

        html.push('>');
        html.push_str(&self.content);
        for child in &self.children {
            html.push_str(&child.to_html());
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

fn is_self_closing(tag: &str) -> bool {
    let tag = tag.to_ascii_lowercase();
    SELF_CLOSING_TAGS.contains(&tag.as_str())
}

#[cfg(test)]
mod tests {
    use super::Element;
    use crate::classes::{bg, flex, m, p, rounded, text, Color};
    use crate::tags;
    use crate::test_support::tracker_guard;
    use crate::tracker;

    #[test]
    fn renders_simple_element() {
        let _guard = tracker_guard();
        let mut div = tags::div([]).content("Hello World");
        assert_eq!(div.render(), "<div>Hello World</div>");
    }

    #[test]
    fn renders_attributes_in_sorted_order() {
        let _guard = tracker_guard();
        let mut div = tags::div([])
            .content("Styled content")
            .class([p(4), bg(Color::Blue, 100)])
            .id("main");
        let html = div.render();
        assert_eq!(
            html,
            r#"<div class="p-4 bg-blue-100" id="main">Styled content</div>"#
        );
    }

    #[test]
    fn renders_self_closing_tags() {
        let _guard = tracker_guard();
        let mut img = tags::img("/path/to/image.jpg").attr("alt", "Test image");
        let html = img.render();
        assert_eq!(html, r#"<img alt="Test image" src="/path/to/image.jpg" />"#);
    }

    #[test]
    fn renders_nested_elements() {
        let _guard = tracker_guard();
        let mut div = tags::div([
            tags::h1("Welcome"),
            tags::p("This is a test paragraph"),
        ]);
        assert_eq!(
            div.render(),
            "<div><h1>Welcome</h1><p>This is a test paragraph</p></div>"
        );
    }

    #[test]
    fn renders_text_nodes_verbatim() {
        let _guard = tracker_guard();
        let mut span = tags::span("before ").child(tags::text("after"));
        assert_eq!(span.render(), "<span>before after</span>");
    }

    #[test]
    fn chains_builder_methods() {
        let _guard = tracker_guard();
        let mut div = tags::div([])
            .attr("data-test", "value")
            .id("main")
            .children([
                tags::h1("Title").attr("class", "header"),
                tags::p("Content").id("content"),
            ]);
        let html = div.render();
        assert!(html.contains(r#"data-test="value""#));
        assert!(html.contains(r#"id="main""#));
        assert!(html.contains(r#"<h1 class="header">Title</h1>"#));
        assert!(html.contains(r#"<p id="content">Content</p>"#));
    }

    #[test]
    fn joins_utility_classes_with_spaces() {
        let _guard = tracker_guard();
        let mut div = tags::div([]).content("Styled with utilities").class([
            p(4),
            m(2),
            bg(Color::Gray, 100),
            text(Color::Gray, 800),
            rounded(8),
        ]);
        let html = div.render();
        assert!(html.contains(r#"class="p-4 m-2 bg-gray-100 text-gray-800 rounded-8""#));
    }

    #[test]
    fn injects_minimal_stylesheet_into_head() {
        let _guard = tracker_guard();
        tracker::global().reset();

        let mut document = tags::html([
            tags::head([tags::title("CSS Test")]),
            tags::body([tags::div([])
                .content("Test content")
                .class([p(4), bg(Color::Red, 100)])]),
        ]);
        let html = document.render();

        assert!(html.contains("<style>"));
        assert!(html.contains(".p-4 { padding: 1.00rem }"));
        assert!(html.contains(".bg-red-100 { background-color: #fee2e2 }"));
        assert!(html.contains("body { margin: 0;"));
        assert!(!html.contains(".p-8"));
    }

    #[test]
    fn injects_base_rules_when_no_classes_tracked() {
        let _guard = tracker_guard();
        tracker::global().reset();

        let mut document = tags::html([
            tags::head([tags::title("Bare")]),
            tags::body([tags::p("plain paragraph")]),
        ]);
        let html = document.render();

        assert!(html.contains("<style>"));
        assert!(html.contains("body { margin: 0;"));
        assert!(html.contains("* { box-sizing: border-box }"));
        assert!(!html.contains(".flex {"));
    }

    #[test]
    fn skips_injection_without_head() {
        let _guard = tracker_guard();
        tracker::global().reset();
        p(4);

        let mut div = tags::div([]).content("no document").class([flex()]);
        let html = div.render();
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn repeated_renders_append_another_style_leaf() {
        let _guard = tracker_guard();
        tracker::global().reset();

        let mut document = tags::html([tags::head([]), tags::body([])]);
        let first = document.render();
        let second = document.render();
        assert_eq!(first.matches("<style>").count(), 1);
        assert_eq!(second.matches("<style>").count(), 2);
    }

    #[test]
    fn finds_first_head_in_document_order() {
        let _guard = tracker_guard();
        tracker::global().reset();

        let mut document = Element::new("html")
            .child(Element::new("section").child(Element::new("head").id("early")))
            .child(Element::new("head").id("late"));
        let html = document.render();

        let early = html.find(r#"<head id="early"><style>"#);
        assert!(early.is_some());
        assert!(html.contains(r#"<head id="late"></head>"#));
    }
}
