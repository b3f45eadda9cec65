use std::fmt;
use std::ops::Deref;

use crate::tracker;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Class(String);

impl Class {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Class {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Class> for String {
    fn from(class: Class) -> Self {
        class.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Slate => "slate",
            Color::Gray => "gray",
            Color::Zinc => "zinc",
            Color::Neutral => "neutral",
            Color::Stone => "stone",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Amber => "amber",
            Color::Yellow => "yellow",
            Color::Lime => "lime",
            Color::Green => "green",
            Color::Emerald => "emerald",
            Color::Teal => "teal",
            Color::Cyan => "cyan",
            Color::Sky => "sky",
            Color::Blue => "blue",
            Color::Indigo => "indigo",
            Color::Violet => "violet",
            Color::Purple => "purple",
            Color::Fuchsia => "fuchsia",
            Color::Pink => "pink",
            Color::Rose => "rose",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn tracked(class_name: String) -> Class {
    tracker::global().track(&class_name);
    Class(class_name)
}

pub fn p(size: u32) -> Class {
    tracked(format!("p-{}", size))
}

pub fn px(size: u32) -> Class {
    tracked(format!("px-{}", size))
}

pub fn py(size: u32) -> Class {
    tracked(format!("py-{}", size))
}

pub fn pt(size: u32) -> Class {
    tracked(format!("pt-{}", size))
}

pub fn pr(size: u32) -> Class {
    tracked(format!("pr-{}", size))
}

pub fn pb(size: u32) -> Class {
    tracked(format!("pb-{}", size))
}

pub fn pl(size: u32) -> Class {
    tracked(format!("pl-{}", size))
}

pub fn m(size: u32) -> Class {
    tracked(format!("m-{}", size))
}

pub fn mx(size: u32) -> Class {
    tracked(format!("mx-{}", size))
}

pub fn my(size: u32) -> Class {
    tracked(format!("my-{}", size))
}

pub fn mt(size: u32) -> Class {
    tracked(format!("mt-{}", size))
}

pub fn mr(size: u32) -> Class {
    tracked(format!("mr-{}", size))
}

pub fn mb(size: u32) -> Class {
    tracked(format!("mb-{}", size))
}

pub fn ml(size: u32) -> Class {
    tracked(format!("ml-{}", size))
}

pub fn bg(color: Color, shade: u16) -> Class {
    tracked(format!("bg-{}-{}", color.as_str(), shade))
}

pub fn text(color: Color, shade: u16) -> Class {
    tracked(format!("text-{}-{}", color.as_str(), shade))
}

pub fn block() -> Class {
    tracked("block".to_string())
}

pub fn inline_block() -> Class {
    tracked("inline-block".to_string())
}

pub fn inline() -> Class {
    tracked("inline".to_string())
}

pub fn flex() -> Class {
    tracked("flex".to_string())
}

pub fn inline_flex() -> Class {
    tracked("inline-flex".to_string())
}

pub fn grid() -> Class {
    tracked("grid".to_string())
}

pub fn inline_grid() -> Class {
    tracked("inline-grid".to_string())
}

pub fn hidden() -> Class {
    tracked("hidden".to_string())
}

pub fn justify_start() -> Class {
    tracked("justify-start".to_string())
}

pub fn justify_center() -> Class {
    tracked("justify-center".to_string())
}

pub fn justify_end() -> Class {
    tracked("justify-end".to_string())
}

pub fn justify_between() -> Class {
    tracked("justify-between".to_string())
}

pub fn justify_around() -> Class {
    tracked("justify-around".to_string())
}

pub fn justify_evenly() -> Class {
    tracked("justify-evenly".to_string())
}

pub fn items_start() -> Class {
    tracked("items-start".to_string())
}

pub fn items_center() -> Class {
    tracked("items-center".to_string())
}

pub fn items_end() -> Class {
    tracked("items-end".to_string())
}

pub fn items_stretch() -> Class {
    tracked("items-stretch".to_string())
}

pub fn items_baseline() -> Class {
    tracked("items-baseline".to_string())
}

pub fn flex_row() -> Class {
    tracked("flex-row".to_string())
}

pub fn flex_col() -> Class {
    tracked("flex-col".to_string())
}

pub fn flex_row_reverse() -> Class {
    tracked("flex-row-reverse".to_string())
}

pub fn flex_col_reverse() -> Class {
    tracked("flex-col-reverse".to_string())
}

pub fn flex_wrap() -> Class {
    tracked("flex-wrap".to_string())
}

pub fn flex_nowrap() -> Class {
    tracked("flex-nowrap".to_string())
}

pub fn flex_wrap_reverse() -> Class {
    tracked("flex-wrap-reverse".to_string())
}

pub fn grid_cols(count: u32) -> Class {
    tracked(format!("grid-cols-{}", count))
}

pub fn grid_rows(count: u32) -> Class {
    tracked(format!("grid-rows-{}", count))
}

pub fn gap(size: u32) -> Class {
    tracked(format!("gap-{}", size))
}

pub fn text_size(name: &str) -> Class {
    tracked(format!("text-{}", name))
}

pub fn text_xs() -> Class {
    text_size("xs")
}

pub fn text_sm() -> Class {
    text_size("sm")
}

pub fn text_base() -> Class {
    text_size("base")
}

pub fn text_lg() -> Class {
    text_size("lg")
}

pub fn text_xl() -> Class {
    text_size("xl")
}

pub fn text_2xl() -> Class {
    text_size("2xl")
}

pub fn text_3xl() -> Class {
    text_size("3xl")
}

pub fn text_4xl() -> Class {
    text_size("4xl")
}

pub fn text_5xl() -> Class {
    text_size("5xl")
}

pub fn text_6xl() -> Class {
    text_size("6xl")
}

pub fn text_7xl() -> Class {
    text_size("7xl")
}

pub fn text_8xl() -> Class {
    text_size("8xl")
}

pub fn text_9xl() -> Class {
    text_size("9xl")
}

pub fn text_left() -> Class {
    tracked("text-left".to_string())
}

pub fn text_center() -> Class {
    tracked("text-center".to_string())
}

pub fn text_right() -> Class {
    tracked("text-right".to_string())
}

pub fn text_justify() -> Class {
    tracked("text-justify".to_string())
}

pub fn font_sans() -> Class {
    tracked("font-sans".to_string())
}

pub fn font_serif() -> Class {
    tracked("font-serif".to_string())
}

pub fn font_mono() -> Class {
    tracked("font-mono".to_string())
}

pub fn font_thin() -> Class {
    tracked("font-thin".to_string())
}

pub fn font_extralight() -> Class {
    tracked("font-extralight".to_string())
}

pub fn font_light() -> Class {
    tracked("font-light".to_string())
}

pub fn font_normal() -> Class {
    tracked("font-normal".to_string())
}

pub fn font_medium() -> Class {
    tracked("font-medium".to_string())
}

pub fn font_semibold() -> Class {
    tracked("font-semibold".to_string())
}

pub fn font_bold() -> Class {
    tracked("font-bold".to_string())
}

pub fn font_extrabold() -> Class {
    tracked("font-extrabold".to_string())
}

pub fn font_black() -> Class {
    tracked("font-black".to_string())
}

pub fn underline() -> Class {
    tracked("underline".to_string())
}

pub fn line_through() -> Class {
    tracked("line-through".to_string())
}

pub fn no_underline() -> Class {
    tracked("no-underline".to_string())
}

pub fn border(width: u32) -> Class {
    tracked(format!("border-{}", width))
}

pub fn border_t(width: u32) -> Class {
    tracked(format!("border-t-{}", width))
}

pub fn border_r(width: u32) -> Class {
    tracked(format!("border-r-{}", width))
}

pub fn border_b(width: u32) -> Class {
    tracked(format!("border-b-{}", width))
}

pub fn border_l(width: u32) -> Class {
    tracked(format!("border-l-{}", width))
}

pub fn rounded(radius: u32) -> Class {
    tracked(format!("rounded-{}", radius))
}

pub fn rounded_t(radius: u32) -> Class {
    tracked(format!("rounded-t-{}", radius))
}

pub fn rounded_r(radius: u32) -> Class {
    tracked(format!("rounded-r-{}", radius))
}

pub fn rounded_b(radius: u32) -> Class {
    tracked(format!("rounded-b-{}", radius))
}

pub fn rounded_l(radius: u32) -> Class {
    tracked(format!("rounded-l-{}", radius))
}

pub fn rounded_tl(radius: u32) -> Class {
    tracked(format!("rounded-tl-{}", radius))
}

pub fn rounded_tr(radius: u32) -> Class {
    tracked(format!("rounded-tr-{}", radius))
}

pub fn rounded_br(radius: u32) -> Class {
    tracked(format!("rounded-br-{}", radius))
}

pub fn rounded_bl(radius: u32) -> Class {
    tracked(format!("rounded-bl-{}", radius))
}

pub fn rounded_full() -> Class {
    tracked("rounded-full".to_string())
}

pub fn rounded_none() -> Class {
    tracked("rounded-none".to_string())
}

pub fn border_solid() -> Class {
    tracked("border-solid".to_string())
}

pub fn border_dashed() -> Class {
    tracked("border-dashed".to_string())
}

pub fn border_dotted() -> Class {
    tracked("border-dotted".to_string())
}

pub fn border_double() -> Class {
    tracked("border-double".to_string())
}

pub fn border_none() -> Class {
    tracked("border-none".to_string())
}

pub fn w(size: &str) -> Class {
    tracked(format!("w-{}", size))
}

pub fn h(size: &str) -> Class {
    tracked(format!("h-{}", size))
}

pub fn max_w(size: &str) -> Class {
    tracked(format!("max-w-{}", size))
}

pub fn min_w(size: &str) -> Class {
    tracked(format!("min-w-{}", size))
}

pub fn max_h(size: &str) -> Class {
    tracked(format!("max-h-{}", size))
}

pub fn min_h(size: &str) -> Class {
    tracked(format!("min-h-{}", size))
}

pub fn static_() -> Class {
    tracked("static".to_string())
}

pub fn fixed() -> Class {
    tracked("fixed".to_string())
}

pub fn absolute() -> Class {
    tracked("absolute".to_string())
}

pub fn relative() -> Class {
    tracked("relative".to_string())
}

pub fn sticky() -> Class {
    tracked("sticky".to_string())
}

pub fn top(offset: &str) -> Class {
    tracked(format!("top-{}", offset))
}

pub fn right(offset: &str) -> Class {
    tracked(format!("right-{}", offset))
}

pub fn bottom(offset: &str) -> Class {
    tracked(format!("bottom-{}", offset))
}

pub fn left(offset: &str) -> Class {
    tracked(format!("left-{}", offset))
}

pub fn inset(offset: &str) -> Class {
    tracked(format!("inset-{}", offset))
}

pub fn inset_x(offset: &str) -> Class {
    tracked(format!("inset-x-{}", offset))
}

pub fn inset_y(offset: &str) -> Class {
    tracked(format!("inset-y-{}", offset))
}

pub fn z(index: &str) -> Class {
    tracked(format!("z-{}", index))
}

pub fn overflow_auto() -> Class {
    tracked("overflow-auto".to_string())
}

pub fn overflow_hidden() -> Class {
    tracked("overflow-hidden".to_string())
}

pub fn overflow_visible() -> Class {
    tracked("overflow-visible".to_string())
}

pub fn overflow_scroll() -> Class {
    tracked("overflow-scroll".to_string())
}

pub fn overflow_x_auto() -> Class {
    tracked("overflow-x-auto".to_string())
}

pub fn overflow_y_auto() -> Class {
    tracked("overflow-y-auto".to_string())
}

pub fn overflow_x_hidden() -> Class {
    tracked("overflow-x-hidden".to_string())
}

pub fn overflow_x_visible() -> Class {
    tracked("overflow-x-visible".to_string())
}

pub fn overflow_x_scroll() -> Class {
    tracked("overflow-x-scroll".to_string())
}

pub fn overflow_y_hidden() -> Class {
    tracked("overflow-y-hidden".to_string())
}

pub fn overflow_y_visible() -> Class {
    tracked("overflow-y-visible".to_string())
}

pub fn overflow_y_scroll() -> Class {
    tracked("overflow-y-scroll".to_string())
}

pub fn opacity(value: u32) -> Class {
    tracked(format!("opacity-{}", value))
}

pub fn shadow() -> Class {
    tracked("shadow".to_string())
}

pub fn shadow_sm() -> Class {
    tracked("shadow-sm".to_string())
}

pub fn shadow_md() -> Class {
    tracked("shadow-md".to_string())
}

pub fn shadow_lg() -> Class {
    tracked("shadow-lg".to_string())
}

pub fn shadow_xl() -> Class {
    tracked("shadow-xl".to_string())
}

pub fn shadow_2xl() -> Class {
    tracked("shadow-2xl".to_string())
}

pub fn shadow_inner() -> Class {
    tracked("shadow-inner".to_string())
}

pub fn shadow_none() -> Class {
    tracked("shadow-none".to_string())
}

pub fn cursor_auto() -> Class {
    tracked("cursor-auto".to_string())
}

pub fn cursor_default() -> Class {
    tracked("cursor-default".to_string())
}

pub fn cursor_pointer() -> Class {
    tracked("cursor-pointer".to_string())
}

pub fn cursor_wait() -> Class {
    tracked("cursor-wait".to_string())
}

pub fn cursor_text() -> Class {
    tracked("cursor-text".to_string())
}

pub fn cursor_move() -> Class {
    tracked("cursor-move".to_string())
}

pub fn cursor_help() -> Class {
    tracked("cursor-help".to_string())
}

pub fn cursor_not_allowed() -> Class {
    tracked("cursor-not-allowed".to_string())
}

pub fn cursor_none() -> Class {
    tracked("cursor-none".to_string())
}

pub fn cursor_context_menu() -> Class {
    tracked("cursor-context-menu".to_string())
}

pub fn cursor_progress() -> Class {
    tracked("cursor-progress".to_string())
}

pub fn cursor_cell() -> Class {
    tracked("cursor-cell".to_string())
}

pub fn cursor_crosshair() -> Class {
    tracked("cursor-crosshair".to_string())
}

pub fn cursor_vertical_text() -> Class {
    tracked("cursor-vertical-text".to_string())
}

pub fn cursor_alias() -> Class {
    tracked("cursor-alias".to_string())
}

pub fn cursor_copy() -> Class {
    tracked("cursor-copy".to_string())
}

pub fn cursor_no_drop() -> Class {
    tracked("cursor-no-drop".to_string())
}

pub fn cursor_grab() -> Class {
    tracked("cursor-grab".to_string())
}

pub fn cursor_grabbing() -> Class {
    tracked("cursor-grabbing".to_string())
}

pub fn select_none() -> Class {
    tracked("select-none".to_string())
}

pub fn select_text() -> Class {
    tracked("select-text".to_string())
}

pub fn select_all() -> Class {
    tracked("select-all".to_string())
}

pub fn select_auto() -> Class {
    tracked("select-auto".to_string())
}

pub fn pointer_events_none() -> Class {
    tracked("pointer-events-none".to_string())
}

pub fn pointer_events_auto() -> Class {
    tracked("pointer-events-auto".to_string())
}

pub fn visible() -> Class {
    tracked("visible".to_string())
}

pub fn invisible() -> Class {
    tracked("invisible".to_string())
}

pub fn collapse() -> Class {
    tracked("collapse".to_string())
}

pub fn sr_only() -> Class {
    tracked("sr-only".to_string())
}

pub fn not_sr_only() -> Class {
    tracked("not-sr-only".to_string())
}
