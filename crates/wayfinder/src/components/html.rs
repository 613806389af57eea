//! maud rendering for [`Link`].

use maud::{Markup, PreEscaped, Render};

use super::link::Link;
use crate::context::RouterContext;

/// Emits `<a href="...">children</a>` with escaped attribute values
///
/// Without a context the `href` is the target as written, which the browser
/// resolves against the document. [`Link::render_in`] writes the target
/// resolved against a context's current location instead. Attributes whose
/// names could break out of the tag are dropped with a warning.
///
/// ```
/// use maud::{html, Render};
/// use wayfinder::Link;
///
/// let link = Link::new(html! { "Docs" }).to("/docs?a=1&b=2");
/// assert_eq!(link.render().into_string(), r#"<a href="/docs?a=1&amp;b=2">Docs</a>"#);
/// ```
impl<V: Render> Render for Link<V> {
    fn render_to(&self, buffer: &mut String) {
        self.write_anchor(self.target(), buffer);
    }
}

impl<V: Render> Link<V> {
    /// Renders the anchor with its `href` resolved against `ctx`
    ///
    /// ```
    /// use maud::html;
    /// use wayfinder::{Link, MemoryHistory, RouterContext};
    ///
    /// let ctx = RouterContext::new(MemoryHistory::new("/docs/guide/intro"));
    /// let link = Link::new(html! { "API" }).to("../api");
    /// assert_eq!(link.render_in(&ctx).into_string(), r#"<a href="/docs/api">API</a>"#);
    /// ```
    pub fn render_in(&self, ctx: &RouterContext) -> Markup {
        let mut buffer = String::new();
        self.write_anchor(self.resolved_target(ctx).as_deref(), &mut buffer);
        PreEscaped(buffer)
    }

    fn write_anchor(&self, href: Option<&str>, buffer: &mut String) {
        buffer.push_str("<a");
        if let Some(href) = href {
            write_attribute(buffer, "href", href);
        }
        for (name, value) in self.attributes() {
            if is_valid_attribute_name(name) {
                write_attribute(buffer, name, value);
            } else {
                tracing::warn!(name, "skipping invalid anchor attribute");
            }
        }
        buffer.push('>');
        self.children().render_to(buffer);
        buffer.push_str("</a>");
    }
}

fn write_attribute(buffer: &mut String, name: &str, value: &str) {
    buffer.push(' ');
    buffer.push_str(name);
    buffer.push_str("=\"");
    value.render_to(buffer);
    buffer.push('"');
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'))
}

#[cfg(test)]
mod tests {
    use maud::{html, Markup};

    use super::*;

    fn render(link: &Link<Markup>) -> String {
        link.render().into_string()
    }

    #[test]
    fn test_renders_href_and_children() {
        let link = Link::new(html! { strong { "Home" } }).to("/");
        assert_eq!(render(&link), r#"<a href="/"><strong>Home</strong></a>"#);
    }

    #[test]
    fn test_escapes_attribute_values() {
        let link = Link::new(html! { "x" })
            .href("/search?q=\"<script>\"")
            .attribute("title", "Tom & Jerry");
        assert_eq!(
            render(&link),
            r#"<a href="/search?q=&quot;&lt;script&gt;&quot;" title="Tom &amp; Jerry">x</a>"#
        );
    }

    #[test]
    fn test_drops_invalid_attribute_names() {
        let link = Link::new(html! { "x" })
            .to("/a")
            .attribute("onclick=\"alert(1)\"", "")
            .attribute("class", "nav");
        assert_eq!(render(&link), r#"<a href="/a" class="nav">x</a>"#);
    }

    #[test]
    fn test_no_target_renders_bare_anchor() {
        let link = Link::new(html! { "x" });
        assert_eq!(render(&link), "<a>x</a>");
    }

    #[test]
    fn test_render_in_writes_resolved_href() {
        let ctx = RouterContext::new(crate::history::MemoryHistory::new("/users/7/posts"));
        let link = Link::new(html! { "Profile" })
            .to("./profile?tab=a&b")
            .attribute("class", "nav");
        assert_eq!(
            link.render_in(&ctx).into_string(),
            r#"<a href="/users/7/profile?tab=a&amp;b" class="nav">Profile</a>"#
        );
        assert_eq!(
            render(&link),
            r#"<a href="./profile?tab=a&amp;b" class="nav">Profile</a>"#
        );
    }

    #[test]
    fn test_text_children_are_escaped() {
        let link = Link::new("a < b").to("/cmp");
        assert_eq!(link.render().into_string(), r#"<a href="/cmp">a &lt; b</a>"#);
    }
}
