//! Read-only query interface over a parsed HTML page.
//!
//! Extraction code only ever needs four operations: select every match in
//! the page, select the first match below a node, read an attribute, and
//! read the text content. Everything scraper-specific stays in this file.

use scraper::{ElementRef, Html, Selector};

/// A parsed listing page.
pub struct Page {
    html: Html,
}

impl Page {
    /// Parses raw markup. Malformed HTML never fails; it yields a best-effort tree.
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    /// Returns every element matching `selector`, in document order.
    pub fn select_all<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = Node<'a>> + 'a {
        self.html.select(selector).map(Node)
    }
}

/// A single element of a [`Page`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First descendant matching `selector`.
    pub fn select_first(&self, selector: &Selector) -> Option<Node<'a>> {
        self.0.select(selector).next().map(Node)
    }

    /// Attribute value, if the attribute is present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Concatenated text of the node and its descendants, untrimmed.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }
}
