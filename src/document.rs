use scraper::{ElementRef, Html, Selector};

use crate::error::{MetadataError, Result};

/// A parsed HTML page that the dialect parsers query by CSS selector.
///
/// The tree is never mutated after parsing, so every parser can borrow it
/// for the whole of a parse call.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Document { html: Html::parse_document(html) }
    }

    /// All elements matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| MetadataError::invalid(format!("bad selector {selector:?}: {e:?}")))?;
        Ok(self.html.select(&sel).map(Element).collect())
    }

    pub fn first(&self, selector: &str) -> Result<Option<Element<'_>>> {
        Ok(self.query(selector)?.into_iter().next())
    }

    /// The `<html>` element (html5ever always synthesizes one).
    pub fn root(&self) -> Element<'_> {
        Element(self.html.root_element())
    }

    pub fn element_by_id(&self, id: &str) -> Option<Element<'_>> {
        self.query("[id]").ok()?.into_iter().find(|el| el.attr("id") == Some(id))
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").field("root", &self.root().tag_name()).finish()
    }
}

/// Equality is node identity, not structural.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    pub fn tag_name(&self) -> &'a str {
        self.0.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Like [`Element::attr`], but an empty value counts as absent.
    pub fn non_empty_attr(&self, name: &str) -> Option<&'a str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    pub fn children(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        let node = self.0;
        node.children().filter_map(ElementRef::wrap).map(Element)
    }
}
