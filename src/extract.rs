use std::collections::HashSet;

use crate::stylesheet::Stylesheet;

pub fn minimal(full: &Stylesheet, used_classes: &[String]) -> Stylesheet {
    let used: HashSet<&str> = used_classes.iter().map(String::as_str).collect();

    let mut reduced = Stylesheet::new();
    for (selector, declaration) in full.iter() {
        match selector.strip_prefix('.') {
            None => reduced.add_rule(selector, declaration),
            Some(class_name) if used.contains(class_name) => {
                reduced.add_rule(selector, declaration)
            }
            Some(_) => {}
        }
    }
    reduced
}
