use std::fmt;

use crate::parsing::inline::Attributes;

/// Allow-list of attribute names a renderer may emit.
#[derive(Debug, Clone, Copy)]
pub struct AttributeFilter {
    names: &'static [&'static str],
}

impl AttributeFilter {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    /// Listed names pass, and so does any well-formed `data-*` name.
    pub fn allows(&self, name: &str) -> bool {
        self.contains(name) || is_data_attribute(name)
    }
}

/// HTML global attributes, valid on every element.
pub static GLOBAL_ATTRIBUTE_FILTER: AttributeFilter = AttributeFilter::new(&[
    "accesskey",
    "autocapitalize",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "part",
    "role",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
]);

fn is_data_attribute(name: &str) -> bool {
    name.strip_prefix("data-").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b':'))
    })
}

/// Writes ` name="value"` for every attribute the filter allows, in order.
/// Values are escaped for a double-quoted attribute.
pub fn render_attributes(
    out: &mut dyn fmt::Write,
    attrs: &Attributes,
    filter: &AttributeFilter,
) -> fmt::Result {
    for (name, value) in attrs.iter() {
        if !filter.allows(name) {
            continue;
        }
        write!(
            out,
            " {name}=\"{}\"",
            html_escape::encode_double_quoted_attribute(value)
        )?;
    }
    Ok(())
}
