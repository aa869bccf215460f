// src/specs/markup.rs
//! Location cell markup → one flat string.
//!
//! A location cell mixes plain text, links, `<br>` stacks, `<small>` groups,
//! superscript footnotes and `class="explain"` tooltips. Each child node is
//! first classified into a [`Markup`] variant, then rendered:
//!
//! | variant    | source                         | output             |
//! |------------|--------------------------------|--------------------|
//! | `Text`     | text node                      | text as-is         |
//! | `Footnote` | element with a `<sup>` inside  | ` [all text]`      |
//! | `Group`    | `<small>`                      | children, recursed |
//! | `Note`     | `.explain[title]`              | ` {title}`         |
//! | `Break`    | `<br>`                         | `, `               |
//! | `Inline`   | anything else                  | all text           |
//!
//! Order matters: the first matching row wins.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use crate::config::consts::{BREAK_TAG, GROUP_TAG, NOTE_ATTR, NOTE_CLASS, SUPERSCRIPT_TAG};
use crate::core::html;

#[derive(Clone, Copy, Debug)]
pub enum Markup<'a> {
    Text(&'a str),
    Footnote(ElementRef<'a>),
    Group(ElementRef<'a>),
    Note(&'a str),
    Break,
    Inline(NodeRef<'a, Node>),
}

pub fn classify(node: NodeRef<'_, Node>) -> Markup<'_> {
    if let Some(text) = node.value().as_text() {
        return Markup::Text(&**text);
    }
    let Some(el) = ElementRef::wrap(node) else {
        return Markup::Inline(node);
    };

    if html::find(el, SUPERSCRIPT_TAG).is_some() {
        Markup::Footnote(el)
    } else if html::is_tag(el, GROUP_TAG) {
        Markup::Group(el)
    } else if let Some(title) = note_title(el) {
        Markup::Note(title)
    } else if html::is_tag(el, BREAK_TAG) {
        Markup::Break
    } else {
        Markup::Inline(node)
    }
}

fn note_title(el: ElementRef<'_>) -> Option<&str> {
    if html::first_class(el) != Some(NOTE_CLASS) {
        return None;
    }
    html::attr(el, NOTE_ATTR)
}

pub fn normalize(node: NodeRef<'_, Node>) -> String {
    match classify(node) {
        Markup::Text(text) => s!(text),
        Markup::Footnote(el) => join!(" [", &html::text(el), "]"),
        Markup::Group(el) => normalize_children(el),
        Markup::Note(title) => join!(" {", title, "}"),
        Markup::Break => s!(", "),
        Markup::Inline(node) => html::node_text(node),
    }
}

/// Normalize every child of `el` and concatenate, no separator.
pub fn normalize_children(el: ElementRef<'_>) -> String {
    el.children().map(normalize).collect()
}
