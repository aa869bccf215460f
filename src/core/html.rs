// src/core/html.rs
// Tree-walking helpers over a parsed page.
// Tag names compare case-insensitively; "find" means first match in document order,
// never the starting element itself.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

pub fn is_tag(el: ElementRef<'_>, tag: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(tag)
}

/// Leading token of the `class` attribute, in source order.
pub fn first_class(el: ElementRef<'_>) -> Option<&str> {
    el.value().attr("class")?.split_ascii_whitespace().next()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// First descendant element with the given tag.
pub fn find<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| is_tag(*e, tag))
}

/// All descendant elements with the given tag, in document order.
pub fn find_all<'a>(el: ElementRef<'a>, tag: &str) -> impl Iterator<Item = ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |e| is_tag(*e, tag))
}

/// Element anywhere in the document carrying `id`.
pub fn find_by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().id() == Some(id))
}

/// Next following sibling element with the given tag, skipping anything in between.
pub fn next_sibling<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| is_tag(*e, tag))
}

/// `first` followed by each of its same-tag siblings.
pub fn siblings_from<'a>(first: ElementRef<'a>, tag: &str) -> impl Iterator<Item = ElementRef<'a>> {
    std::iter::successors(Some(first), move |e| next_sibling(*e, tag))
}

/// Rows of a table: its first `tr` and that row's sibling rows.
/// Works whether or not the parser wrapped the rows in a `tbody`.
pub fn rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    find(table, "tr")
        .into_iter()
        .flat_map(|first| siblings_from(first, "tr"))
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// All text inside the element, concatenated with no separator.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Same as [`text`] but for any node; non-text leaves (comments etc.) contribute nothing.
pub fn node_text(node: NodeRef<'_, Node>) -> String {
    node.descendants()
        .filter_map(|n| n.value().as_text())
        .map(|t| &**t)
        .collect()
}
