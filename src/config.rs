use serde::Deserialize;
use std::collections::BTreeMap;
use std::error;
use std::fmt;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("config/default.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct UtilityConfig {
    pub spacing: SpacingConfig,
    pub colors: BTreeMap<String, BTreeMap<String, String>>,
    pub layout: LayoutConfig,
    pub flexbox: FlexboxConfig,
    pub grid: GridConfig,
    pub typography: TypographyConfig,
    pub borders: BordersConfig,
    pub sizing: SizingConfig,
    pub position: PositionConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct NamedProperty {
    pub name: String,
    pub css_property: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct PrefixedProperty {
    pub name: String,
    pub prefix: String,
    pub css_property: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct NamedValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    pub scale: Vec<i64>,
    pub rem_multiplier: f64,
    pub properties: Vec<PrefixedProperty>,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            scale: Vec::new(),
            rem_multiplier: default_rem_multiplier(),
            properties: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    pub display: Vec<NamedProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct FlexboxConfig {
    pub justify: Vec<NamedProperty>,
    pub align: Vec<NamedProperty>,
    pub direction: Vec<NamedProperty>,
    pub wrap: Vec<NamedProperty>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct GridConfig {
    pub cols: GridTrack,
    pub rows: GridTrack,
    pub gap: GridGap,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct GridTrack {
    pub scale: Vec<i64>,
    pub css_template: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridGap {
    pub scale: Vec<i64>,
    pub rem_multiplier: f64,
    pub css_template: String,
}

impl Default for GridGap {
    fn default() -> Self {
        Self {
            scale: Vec::new(),
            rem_multiplier: default_rem_multiplier(),
            css_template: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct TypographyConfig {
    pub sizes: BTreeMap<String, TextSize>,
    pub families: Vec<NamedProperty>,
    pub align: Vec<NamedProperty>,
    pub weight: Vec<NamedProperty>,
    pub decoration: Vec<NamedProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct TextSize {
    pub size: String,
    pub line_height: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct BordersConfig {
    pub width: BorderWidth,
    pub radius: BorderRadius,
    pub style: Vec<NamedProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct BorderWidth {
    pub scale: Vec<i64>,
    pub properties: Vec<PrefixedProperty>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderRadius {
    pub scale: Vec<i64>,
    pub rem_multiplier: f64,
    pub properties: Vec<PrefixedProperty>,
    pub special: Vec<NamedProperty>,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            scale: Vec::new(),
            rem_multiplier: default_rem_multiplier(),
            properties: Vec::new(),
            special: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct SizingConfig {
    pub width: SizeAxis,
    pub height: SizeAxis,
    pub max_width: Vec<NamedValue>,
    pub min_width: Vec<NamedValue>,
    pub max_height: SizeAxis,
    pub min_height: Vec<NamedValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct SizeAxis {
    pub scale: Vec<NamedValue>,
    pub special: Vec<NamedValue>,
    pub fractions: Vec<NamedValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct PositionConfig {
    pub types: Vec<NamedProperty>,
    pub inset: InsetConfig,
    pub z_index: ZIndexConfig,
    pub overflow: Vec<NamedProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct InsetConfig {
    pub scale: Vec<NamedValue>,
    pub special: Vec<NamedValue>,
    pub negative_scale: Vec<NamedValue>,
    pub negative_special: Vec<NamedValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct ZIndexConfig {
    pub values: Vec<NamedValue>,
    pub negative_values: Vec<NamedValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct EffectsConfig {
    pub opacity: Vec<NamedValue>,
    pub shadow: Vec<NamedValue>,
    pub cursor: Vec<NamedProperty>,
    pub user_select: Vec<NamedProperty>,
    pub pointer_events: Vec<NamedProperty>,
    pub visibility: Vec<NamedProperty>,
    pub screen_readers: Vec<NamedProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}", self.message)
    }
}

impl error::Error for ConfigError {}

pub fn load_default() -> Result<UtilityConfig, ConfigError> {
    parse(DEFAULT_CONFIG, "embedded default config")
}

pub fn load(path: &Path) -> Result<UtilityConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError {
        message: format!("failed to read config {}: {}", path.display(), err),
    })?;
    parse(&text, &path.display().to_string())
}

fn parse(text: &str, origin: &str) -> Result<UtilityConfig, ConfigError> {
    toml::from_str(text).map_err(|err| ConfigError {
        message: format!("failed to parse config {}: {}", origin, err),
    })
}

fn default_rem_multiplier() -> f64 {
    0.25
}
