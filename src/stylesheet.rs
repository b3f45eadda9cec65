use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declaration: String,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declaration: declaration.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    rules: BTreeMap<String, String>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    pub fn add_rule(&mut self, selector: impl Into<String>, declaration: impl Into<String>) {
        self.rules.insert(selector.into(), declaration.into());
    }

    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        for rule in rules {
            self.rules.insert(rule.selector, rule.declaration);
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn declaration(&self, selector: &str) -> Option<&str> {
        self.rules.get(selector).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules
            .iter()
            .map(|(selector, declaration)| (selector.as_str(), declaration.as_str()))
    }

    pub fn serialize(&self) -> String {
        let mut css = String::new();
        for (selector, declaration) in &self.rules {
            css.push_str(selector);
            css.push_str(" { ");
            css.push_str(declaration);
            css.push_str(" }\n");
        }
        css
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::Stylesheet;

    #[test]
    fn empty_stylesheet_serializes_to_empty_string() {
        let sheet = Stylesheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.serialize(), "");
    }

    #[test]
    fn serializes_one_rule_per_line() {
        let mut sheet = Stylesheet::new();
        sheet.add_rule(".class-a", "color: blue");
        sheet.add_rule(".class-b", "background: white");
        sheet.add_rule(".class-c", "margin: 10px");

        let css = sheet.serialize();
        assert_eq!(
            css,
            ".class-a { color: blue }\n.class-b { background: white }\n.class-c { margin: 10px }\n"
        );
    }

    #[test]
    fn sorts_selectors_regardless_of_insertion_order() {
        let mut forward = Stylesheet::new();
        forward.add_rule(".a", "color: red");
        forward.add_rule(".b", "color: blue");

        let mut backward = Stylesheet::new();
        backward.add_rule(".b", "color: blue");
        backward.add_rule(".a", "color: red");

        assert_eq!(forward.serialize(), backward.serialize());
    }

    #[test]
    fn serialize_is_repeatable() {
        let mut sheet = Stylesheet::new();
        sheet.add_rule("body", "margin: 0");
        sheet.add_rule(".p-4", "padding: 1.00rem");
        assert_eq!(sheet.serialize(), sheet.serialize());
    }

    #[test]
    fn overwrites_duplicate_selector() {
        let mut sheet = Stylesheet::new();
        sheet.add_rule(".test", "color: red");
        sheet.add_rule(".test", "color: blue");

        let css = sheet.serialize();
        assert!(css.contains("color: blue"));
        assert!(!css.contains("color: red"));
        assert_eq!(css.matches(".test").count(), 1);
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn formats_empty_declaration_with_two_interior_spaces() {
        let mut sheet = Stylesheet::new();
        sheet.add_rule(".empty", "");
        assert_eq!(sheet.serialize(), ".empty {  }\n");
    }

    #[test]
    fn keeps_raw_selectors_verbatim() {
        let mut sheet = Stylesheet::new();
        sheet.add_rule(".class\\:hover", "color: red");
        sheet.add_rule("#id-with-dash", "background: blue");
        sheet.add_rule("[data-attr]", "display: none");

        let css = sheet.serialize();
        assert!(css.contains(".class\\:hover"));
        assert!(css.contains("#id-with-dash"));
        assert!(css.contains("[data-attr]"));
    }
}
