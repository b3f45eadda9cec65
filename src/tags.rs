use crate::element::Element;

pub fn html(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("html").children(children)
}

pub fn head(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("head").children(children)
}

pub fn body(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("body").children(children)
}

pub fn title(content: impl Into<String>) -> Element {
    Element::new("title").content(content)
}

pub fn meta() -> Element {
    Element::new("meta")
}

pub fn link() -> Element {
    Element::new("link")
}

pub fn script(content: impl Into<String>) -> Element {
    Element::new("script").content(content)
}

pub fn style(content: impl Into<String>) -> Element {
    Element::new("style").content(content)
}

pub fn div(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("div").children(children)
}

pub fn section(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("section").children(children)
}

pub fn article(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("article").children(children)
}

pub fn header(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("header").children(children)
}

pub fn footer(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("footer").children(children)
}

pub fn nav(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("nav").children(children)
}

pub fn main(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("main").children(children)
}

pub fn h1(content: impl Into<String>) -> Element {
    Element::new("h1").content(content)
}

pub fn h2(content: impl Into<String>) -> Element {
    Element::new("h2").content(content)
}

pub fn h3(content: impl Into<String>) -> Element {
    Element::new("h3").content(content)
}

pub fn h4(content: impl Into<String>) -> Element {
    Element::new("h4").content(content)
}

pub fn h5(content: impl Into<String>) -> Element {
    Element::new("h5").content(content)
}

pub fn h6(content: impl Into<String>) -> Element {
    Element::new("h6").content(content)
}

pub fn p(content: impl Into<String>) -> Element {
    Element::new("p").content(content)
}

pub fn span(content: impl Into<String>) -> Element {
    Element::new("span").content(content)
}

pub fn text(content: impl Into<String>) -> Element {
    Element::text_node(content)
}

pub fn a(href: impl Into<String>, content: impl Into<String>) -> Element {
    Element::new("a").attr("href", href).content(content)
}

pub fn ul(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("ul").children(children)
}

pub fn ol(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("ol").children(children)
}

pub fn li(content: impl Into<String>) -> Element {
    Element::new("li").content(content)
}

pub fn dl(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("dl").children(children)
}

pub fn dt(content: impl Into<String>) -> Element {
    Element::new("dt").content(content)
}

pub fn dd(content: impl Into<String>) -> Element {
    Element::new("dd").content(content)
}

pub fn table(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("table").children(children)
}

pub fn thead(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("thead").children(children)
}

pub fn tbody(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("tbody").children(children)
}

pub fn tfoot(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("tfoot").children(children)
}

pub fn tr(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("tr").children(children)
}

pub fn th(content: impl Into<String>) -> Element {
    Element::new("th").content(content)
}

pub fn td(content: impl Into<String>) -> Element {
    Element::new("td").content(content)
}

pub fn caption(content: impl Into<String>) -> Element {
    Element::new("caption").content(content)
}

pub fn form(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("form").children(children)
}

pub fn input(input_type: impl Into<String>) -> Element {
    Element::new("input").attr("type", input_type)
}

pub fn button(content: impl Into<String>) -> Element {
    Element::new("button").content(content)
}

pub fn textarea(content: impl Into<String>) -> Element {
    Element::new("textarea").content(content)
}

pub fn select(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("select").children(children)
}

pub fn option(value: impl Into<String>, content: impl Into<String>) -> Element {
    Element::new("option").attr("value", value).content(content)
}

pub fn label(content: impl Into<String>) -> Element {
    Element::new("label").content(content)
}

pub fn img(src: impl Into<String>) -> Element {
    Element::new("img").attr("src", src)
}

pub fn video(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("video").children(children)
}

pub fn audio(children: impl IntoIterator<Item = Element>) -> Element {
    Element::new("audio").children(children)
}

pub fn source(src: impl Into<String>) -> Element {
    Element::new("source").attr("src", src)
}

pub fn br() -> Element {
    Element::new("br")
}

pub fn hr() -> Element {
    Element::new("hr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_document_skeleton() {
        let document = html([head([title("Page")]), body([main([h1("Hello")])])]);
        let rendered = document.to_html();
        assert_eq!(
            rendered,
            "<html><head><title>Page</title></head><body><main><h1>Hello</h1></main></body></html>"
        );
    }

    #[test]
    fn anchor_carries_href() {
        let rendered = a("/about", "About us").to_html();
        assert_eq!(rendered, r#"<a href="/about">About us</a>"#);
    }

    #[test]
    fn input_carries_type() {
        let rendered = input("email").attr("name", "address").to_html();
        assert_eq!(rendered, r#"<input name="address" type="email" />"#);
    }

    #[test]
    fn option_carries_value_and_label() {
        let rendered = select([option("a", "Alpha"), option("b", "Beta")]).to_html();
        assert_eq!(
            rendered,
            r#"<select><option value="a">Alpha</option><option value="b">Beta</option></select>"#
        );
    }

    #[test]
    fn list_items_nest_in_lists() {
        let rendered = ul([li("one"), li("two")]).to_html();
        assert_eq!(rendered, "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn media_tags_self_close() {
        assert_eq!(br().to_html(), "<br />");
        assert_eq!(hr().to_html(), "<hr />");
        assert_eq!(
            img("/logo.png").to_html(),
            r#"<img src="/logo.png" />"#
        );
        assert_eq!(
            source("/clip.mp4").to_html(),
            r#"<source src="/clip.mp4" />"#
        );
    }

    #[test]
    fn table_sections_compose() {
        let rendered = table([
            thead([tr([th("Name"), th("Shade")])]),
            tbody([tr([td("blue"), td("500")])]),
        ])
        .to_html();
        assert_eq!(
            rendered,
            "<table><thead><tr><th>Name</th><th>Shade</th></tr></thead>\
             <tbody><tr><td>blue</td><td>500</td></tr></tbody></table>"
        );
    }
}
