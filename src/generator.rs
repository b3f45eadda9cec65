use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::config::{
    self, BordersConfig, EffectsConfig, FlexboxConfig, GridConfig, LayoutConfig, NamedProperty,
    NamedValue, PositionConfig, SizingConfig, SpacingConfig, TypographyConfig, UtilityConfig,
};
use crate::stylesheet::{Rule, Stylesheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    Config,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub stylesheet: Stylesheet,
    pub source: RuleSource,
}

pub fn generate_utilities() -> GenerationResult {
    match config::load_default() {
        Ok(config) => GenerationResult {
            stylesheet: from_config(&config),
            source: RuleSource::Config,
        },
        Err(err) => {
            log::warn!("falling back to built-in utility rules: {}", err);
            let mut sheet = Stylesheet::new();
            sheet.add_rules(base_rules());
            sheet.add_rules(fallback_rules());
            GenerationResult {
                stylesheet: sheet,
                source: RuleSource::Fallback,
            }
        }
    }
}

pub fn from_config(config: &UtilityConfig) -> Stylesheet {
    let mut sheet = Stylesheet::new();
    sheet.add_rules(base_rules());
    sheet.add_rules(spacing_rules(&config.spacing));
    sheet.add_rules(color_rules(&config.colors));
    sheet.add_rules(layout_rules(&config.layout));
    sheet.add_rules(flexbox_rules(&config.flexbox));
    sheet.add_rules(grid_rules(&config.grid));
    sheet.add_rules(typography_rules(&config.typography));
    sheet.add_rules(border_rules(&config.borders));
    sheet.add_rules(sizing_rules(&config.sizing));
    sheet.add_rules(position_rules(&config.position));
    sheet.add_rules(effects_rules(&config.effects));
    sheet
}

pub fn full_stylesheet() -> &'static Stylesheet {
    static FULL: OnceLock<Stylesheet> = OnceLock::new();
    FULL.get_or_init(|| generate_utilities().stylesheet)
}

pub fn spacing_rules(spacing: &SpacingConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    for prop in &spacing.properties {
        for &step in &spacing.scale {
            let value = rem_value(step, spacing.rem_multiplier);
            rules.push(Rule::new(
                format!(".{}-{}", prop.prefix, step),
                substitute(&prop.css_property, &value),
            ));
        }
    }
    rules
}

pub fn color_rules(colors: &BTreeMap<String, BTreeMap<String, String>>) -> Vec<Rule> {
    let mut rules = Vec::new();
    for (color, shades) in colors {
        for (shade, hex) in shades {
            rules.push(Rule::new(
                format!(".bg-{}-{}", color, shade),
                format!("background-color: {}", hex),
            ));
            rules.push(Rule::new(
                format!(".text-{}-{}", color, shade),
                format!("color: {}", hex),
            ));
        }
    }
    rules
}

pub fn layout_rules(layout: &LayoutConfig) -> Vec<Rule> {
    enumerated_rules(&layout.display)
}

pub fn flexbox_rules(flexbox: &FlexboxConfig) -> Vec<Rule> {
    let mut rules = enumerated_rules(&flexbox.justify);
    rules.extend(enumerated_rules(&flexbox.align));
    rules.extend(enumerated_rules(&flexbox.direction));
    rules.extend(enumerated_rules(&flexbox.wrap));
    rules
}

pub fn grid_rules(grid: &GridConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    for &cols in &grid.cols.scale {
        rules.push(Rule::new(
            format!(".grid-cols-{}", cols),
            substitute(&grid.cols.css_template, &cols.to_string()),
        ));
    }
    for &rows in &grid.rows.scale {
        rules.push(Rule::new(
            format!(".grid-rows-{}", rows),
            substitute(&grid.rows.css_template, &rows.to_string()),
        ));
    }
    for &gap in &grid.gap.scale {
        let value = rem_value(gap, grid.gap.rem_multiplier);
        rules.push(Rule::new(
            format!(".gap-{}", gap),
            substitute(&grid.gap.css_template, &value),
        ));
    }
    rules
}

pub fn typography_rules(typography: &TypographyConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    for (name, size) in &typography.sizes {
        rules.push(Rule::new(
            format!(".text-{}", name),
            format!("font-size: {}; line-height: {}", size.size, size.line_height),
        ));
    }
    rules.extend(enumerated_rules(&typography.families));
    rules.extend(enumerated_rules(&typography.align));
    rules.extend(enumerated_rules(&typography.weight));
    rules.extend(enumerated_rules(&typography.decoration));
    rules
}

pub fn border_rules(borders: &BordersConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    for prop in &borders.width.properties {
        for &width in &borders.width.scale {
            rules.push(Rule::new(
                format!(".{}-{}", prop.prefix, width),
                substitute(&prop.css_property, &width.to_string()),
            ));
        }
    }
    for prop in &borders.radius.properties {
        for &radius in &borders.radius.scale {
            let value = rem_value(radius, borders.radius.rem_multiplier);
            rules.push(Rule::new(
                format!(".{}-{}", prop.prefix, radius),
                substitute(&prop.css_property, &value),
            ));
        }
    }
    rules.extend(enumerated_rules(&borders.radius.special));
    rules.extend(enumerated_rules(&borders.style));
    rules
}

pub fn sizing_rules(sizing: &SizingConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    for group in [&sizing.width.scale, &sizing.width.special, &sizing.width.fractions] {
        rules.extend(named_value_rules("w", group, "width"));
    }
    for group in [&sizing.height.scale, &sizing.height.special, &sizing.height.fractions] {
        rules.extend(named_value_rules("h", group, "height"));
    }
    rules.extend(named_value_rules("max-w", &sizing.max_width, "max-width"));
    rules.extend(named_value_rules("min-w", &sizing.min_width, "min-width"));
    for group in [&sizing.max_height.scale, &sizing.max_height.special] {
        rules.extend(named_value_rules("max-h", group, "max-height"));
    }
    rules.extend(named_value_rules("min-h", &sizing.min_height, "min-height"));
    rules
}

pub fn position_rules(position: &PositionConfig) -> Vec<Rule> {
    let mut rules = enumerated_rules(&position.types);

    let inset = &position.inset;
    for direction in ["top", "right", "bottom", "left"] {
        for entry in inset.scale.iter().chain(&inset.special) {
            rules.push(Rule::new(
                format!(".{}-{}", direction, entry.name),
                format!("{}: {}", direction, entry.value),
            ));
        }
        for entry in inset.negative_scale.iter().chain(&inset.negative_special) {
            rules.push(Rule::new(
                format!(".-{}{}", direction, entry.name),
                format!("{}: {}", direction, entry.value),
            ));
        }
    }
    for entry in inset.scale.iter().chain(&inset.special) {
        rules.push(Rule::new(
            format!(".inset-{}", entry.name),
            format!("inset: {}", entry.value),
        ));
        rules.push(Rule::new(
            format!(".inset-x-{}", entry.name),
            format!("left: {}; right: {}", entry.value, entry.value),
        ));
        rules.push(Rule::new(
            format!(".inset-y-{}", entry.name),
            format!("top: {}; bottom: {}", entry.value, entry.value),
        ));
    }

    for entry in &position.z_index.values {
        rules.push(Rule::new(
            format!(".z-{}", entry.name),
            format!("z-index: {}", entry.value),
        ));
    }
    for entry in &position.z_index.negative_values {
        rules.push(Rule::new(
            format!(".-z{}", entry.name),
            format!("z-index: {}", entry.value),
        ));
    }

    rules.extend(enumerated_rules(&position.overflow));
    rules
}

pub fn effects_rules(effects: &EffectsConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    for entry in &effects.opacity {
        rules.push(Rule::new(
            format!(".opacity-{}", entry.name),
            format!("opacity: {}", entry.value),
        ));
    }
    for entry in &effects.shadow {
        let selector = if entry.name.is_empty() {
            ".shadow".to_string()
        } else {
            format!(".shadow-{}", entry.name)
        };
        rules.push(Rule::new(selector, format!("box-shadow: {}", entry.value)));
    }
    rules.extend(enumerated_rules(&effects.cursor));
    rules.extend(enumerated_rules(&effects.user_select));
    rules.extend(enumerated_rules(&effects.pointer_events));
    rules.extend(enumerated_rules(&effects.visibility));
    rules.extend(enumerated_rules(&effects.screen_readers));
    rules
}

pub fn base_rules() -> Vec<Rule> {
    vec![
        Rule::new("*", "box-sizing: border-box"),
        Rule::new(
            "body",
            "margin: 0; font-family: ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, 'Noto Sans', sans-serif, 'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', 'Noto Color Emoji'; font-size: 1rem; line-height: 1.5; color: #111827",
        ),
        Rule::new(
            "h1, h2, h3, h4, h5, h6",
            "margin-top: 0; margin-bottom: 0.5rem; font-weight: 600",
        ),
        Rule::new("h1", "font-size: 2.25rem; line-height: 2.5rem"),
        Rule::new("h2", "font-size: 1.875rem; line-height: 2.25rem"),
        Rule::new("h3", "font-size: 1.5rem; line-height: 2rem"),
        Rule::new("h4", "font-size: 1.25rem; line-height: 1.75rem"),
        Rule::new("h5", "font-size: 1.125rem; line-height: 1.75rem"),
        Rule::new("h6", "font-size: 1rem; line-height: 1.5rem"),
        Rule::new("p", "margin-top: 0; margin-bottom: 1rem"),
        Rule::new("ul, ol", "margin-top: 0; margin-bottom: 1rem; padding-left: 2rem"),
        Rule::new("li", "margin-bottom: 0.25rem"),
        Rule::new("a", "color: #2563eb; text-decoration: underline"),
        Rule::new("a:hover", "color: #1d4ed8"),
        Rule::new("strong, b", "font-weight: 600"),
        Rule::new(
            "code",
            "font-family: ui-monospace, SFMono-Regular, 'SF Mono', Consolas, 'Liberation Mono', Menlo, monospace; font-size: 0.875em; background-color: #f3f4f6; padding: 0.125rem 0.25rem; border-radius: 0.25rem",
        ),
        Rule::new(
            "pre",
            "font-family: ui-monospace, SFMono-Regular, 'SF Mono', Consolas, 'Liberation Mono', Menlo, monospace; font-size: 0.875rem; line-height: 1.5rem; background-color: #f3f4f6; padding: 1rem; border-radius: 0.375rem; overflow-x: auto",
        ),
        Rule::new("pre code", "background-color: transparent; padding: 0"),
    ]
}

pub fn fallback_rules() -> Vec<Rule> {
    let mut rules = Vec::new();
    for step in 0..=16 {
        let value = rem_value(step, 0.25);
        rules.push(Rule::new(
            format!(".p-{}", step),
            format!("padding: {}rem", value),
        ));
        rules.push(Rule::new(
            format!(".m-{}", step),
            format!("margin: {}rem", value),
        ));
    }
    rules.push(Rule::new(".flex", "display: flex"));
    rules.push(Rule::new(".block", "display: block"));
    rules.push(Rule::new(".hidden", "display: none"));
    rules
}

fn enumerated_rules(entries: &[NamedProperty]) -> Vec<Rule> {
    entries
        .iter()
        .map(|entry| Rule::new(format!(".{}", entry.name), entry.css_property.clone()))
        .collect()
}

fn named_value_rules(prefix: &str, entries: &[NamedValue], property: &str) -> Vec<Rule> {
    entries
        .iter()
        .map(|entry| {
            Rule::new(
                format!(".{}-{}", prefix, entry.name),
                format!("{}: {}", property, entry.value),
            )
        })
        .collect()
}

fn substitute(template: &str, value: &str) -> String {
    template.replacen("{value}", value, 1)
}

fn rem_value(step: i64, multiplier: f64) -> String {
    format!("{:.2}", step as f64 * multiplier)
}
