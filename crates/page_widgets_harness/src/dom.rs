use std::collections::{BTreeMap, BTreeSet};

use page_widgets::{InlineOffsets, Inset, Rect, UiSurface, Vec2};

/// Handle to an [`Element`] in a [`Dom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// An element to insert with [`Dom::append`].
#[derive(Clone, Debug)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,

    /// Where the element is laid out when it has no inline offsets.
    rect: Rect,

    value: String,
    text: String,
    offsets: InlineOffsets,

    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            rect: Rect::ZERO,
            value: String::new(),
            text: String::new(),
            offsets: InlineOffsets::CLEARED,
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[inline]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    #[inline]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    #[inline]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// A tiny in-memory document implementing [`UiSurface`].
///
/// Layout is static: every element has a fixed rect, except that an element with
/// inline offsets is placed relative to its parent, the way an absolutely
/// positioned child of a `position: relative` container is.
#[derive(Clone, Debug)]
pub struct Dom {
    elements: Vec<Element>,
    viewport: Vec2,
    focused: Option<NodeId>,
    scroll_locked: bool,
    scroll_lock_writes: usize,
    layout_pass_requested: bool,
}

impl Dom {
    /// An empty document with just a `<body>`.
    pub fn new(viewport: Vec2) -> Self {
        let body = Element::new("body").rect(Rect::from_min_size(page_widgets::Pos2::ZERO, viewport));
        Self {
            elements: vec![body],
            viewport,
            focused: None,
            scroll_locked: false,
            scroll_lock_writes: 0,
            layout_pass_requested: false,
        }
    }

    /// The `<body>`.
    #[inline]
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let id = NodeId(self.elements.len());
        element.parent = Some(parent);
        self.elements.push(element);
        self.elements[parent.0].children.push(id);
        id
    }

    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport = size;
    }

    fn element(&self, node: NodeId) -> &Element {
        &self.elements[node.0]
    }

    /// The first element matching `selector`.
    ///
    /// # Panics
    /// If nothing matches. Meant for tests.
    #[track_caller]
    pub fn get(&self, selector: &str) -> NodeId {
        self.query(selector)
            .unwrap_or_else(|| panic!("no element matches {selector:?}"))
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.element(node).text
    }

    pub fn inline_offsets(&self, node: NodeId) -> InlineOffsets {
        self.element(node).offsets
    }

    #[inline]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    #[inline]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// How many times the scroll lock was switched on or off.
    #[inline]
    pub fn scroll_lock_writes(&self) -> usize {
        self.scroll_lock_writes
    }

    #[inline]
    pub fn layout_pass_requested(&self) -> bool {
        self.layout_pass_requested
    }

    /// Clear the layout pass request, returning whether there was one.
    pub fn take_layout_pass_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_pass_requested)
    }

    /// Elements in document order.
    fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.body()];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.element(node).children.iter().rev().copied());
        }
        order
    }

    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.element(node).parent, |&n| self.element(n).parent)
    }

    fn matches(&self, node: NodeId, selector: &[Compound<'_>]) -> bool {
        let Some((last, rest)) = selector.split_last() else {
            return false;
        };
        if !last.matches(self.element(node)) {
            return false;
        }

        // Descendant combinators only, so matching each remaining compound
        // against the nearest ancestor that fits is enough.
        let mut rest = rest;
        for ancestor in self.ancestors(node) {
            match rest.split_last() {
                Some((compound, remaining)) => {
                    if compound.matches(self.element(ancestor)) {
                        rest = remaining;
                    }
                }
                None => break,
            }
        }
        rest.is_empty()
    }
}

impl UiSurface for Dom {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let selector = parse_selector(selector);
        self.document_order()
            .into_iter()
            .filter(|&node| self.matches(node, &selector))
            .collect()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        node == ancestor || self.ancestors(*node).any(|n| n == *ancestor)
    }

    fn set_class(&mut self, node: &NodeId, class: &str, present: bool) {
        let classes = &mut self.elements[node.0].classes;
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.element(*node).classes.contains(class)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.elements[node.0]
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.element(*node).attributes.get(name).cloned()
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        let element = self.element(*node);
        let Some(parent) = element.parent.filter(|_| !element.offsets.is_cleared()) else {
            return element.rect;
        };
        let parent = self.bounding_rect(&parent);
        let size = element.rect.size();
        let offsets = element.offsets;

        let x = match (offsets.left, offsets.right) {
            (Some(Inset::Px(left)), _) => parent.left() + left,
            (Some(Inset::Outside { gap }), _) => parent.right() + gap,
            (_, Some(Inset::Px(right))) => parent.right() - right - size.x,
            (_, Some(Inset::Outside { gap })) => parent.left() - gap - size.x,
            _ => element.rect.left(),
        };
        let y = match (offsets.top, offsets.bottom) {
            (Some(Inset::Px(top)), _) => parent.top() + top,
            (Some(Inset::Outside { gap }), _) => parent.bottom() + gap,
            (_, Some(Inset::Px(bottom))) => parent.bottom() - bottom - size.y,
            (_, Some(Inset::Outside { gap })) => parent.top() - gap - size.y,
            _ => element.rect.top(),
        };
        Rect::from_min_size(page_widgets::pos2(x, y), size)
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn set_inline_offsets(&mut self, node: &NodeId, offsets: &InlineOffsets) {
        self.elements[node.0].offsets = *offsets;
    }

    fn input_value(&self, node: &NodeId) -> String {
        self.element(*node).value.clone()
    }

    fn set_input_value(&mut self, node: &NodeId, value: &str) {
        value.clone_into(&mut self.elements[node.0].value);
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        text.clone_into(&mut self.elements[node.0].text);
    }

    fn focus(&mut self, node: &NodeId) {
        self.focused = Some(*node);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.scroll_lock_writes += 1;
    }

    fn request_layout_pass(&mut self) {
        self.layout_pass_requested = true;
    }
}

/// One part of a descendant selector, e.g. `a.nav-link#home`.
#[derive(Debug, Default, PartialEq)]
struct Compound<'a> {
    tag: Option<&'a str>,
    id: Option<&'a str>,
    classes: Vec<&'a str>,
}

impl Compound<'_> {
    fn matches(&self, element: &Element) -> bool {
        self.tag.is_none_or(|tag| tag.eq_ignore_ascii_case(&element.tag))
            && self.id.is_none_or(|id| element.id.as_deref() == Some(id))
            && self.classes.iter().all(|&class| element.classes.contains(class))
    }
}

fn parse_selector(selector: &str) -> Vec<Compound<'_>> {
    selector.split_whitespace().map(parse_compound).collect()
}

fn parse_compound(compound: &str) -> Compound<'_> {
    let mut result = Compound::default();
    let mut rest = compound;

    let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
    if tag_end > 0 && &rest[..tag_end] != "*" {
        result.tag = Some(&rest[..tag_end]);
    }
    rest = &rest[tag_end..];

    while let Some(sigil) = rest.chars().next() {
        let name = &rest[1..];
        let end = name.find(['#', '.']).unwrap_or(name.len());
        match sigil {
            '#' => result.id = Some(&name[..end]),
            _ => result.classes.push(&name[..end]),
        }
        rest = &name[end..];
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_widgets::{pos2, vec2};

    fn nav() -> (Dom, NodeId, NodeId) {
        let mut dom = Dom::new(vec2(400.0, 800.0));
        let nav = dom.append(dom.body(), Element::new("nav").id("mobileNav").class("drawer"));
        let list = dom.append(nav, Element::new("ul"));
        let item = dom.append(list, Element::new("li"));
        let link = dom.append(item, Element::new("a").class("nav-link"));
        dom.append(dom.body(), Element::new("a").id("outside"));
        (dom, nav, link)
    }

    #[test]
    fn parse() {
        assert_eq!(
            parse_compound("a.nav-link#home.active"),
            Compound {
                tag: Some("a"),
                id: Some("home"),
                classes: vec!["nav-link", "active"],
            }
        );
        assert_eq!(parse_selector("#mobileNav a").len(), 2);
    }

    #[test]
    fn descendant_selectors() {
        let (dom, nav, link) = nav();
        assert_eq!(dom.query("#mobileNav"), Some(nav));
        assert_eq!(dom.query_all("#mobileNav a"), vec![link]);
        assert_eq!(dom.query_all("a").len(), 2);
        assert_eq!(dom.query_all(".drawer ul li a.nav-link"), vec![link]);
        assert_eq!(dom.query("#mobileNav #outside"), None);
        assert_eq!(dom.query("#missing"), None);
    }

    #[test]
    fn containment() {
        let (dom, nav, link) = nav();
        assert!(dom.contains(&nav, &link));
        assert!(dom.contains(&nav, &nav));
        assert!(!dom.contains(&link, &nav));
    }

    #[test]
    fn offsets_position_relative_to_parent() {
        let mut dom = Dom::new(vec2(1000.0, 800.0));
        let wrapper = dom.append(
            dom.body(),
            Element::new("div").rect(Rect::from_min_size(pos2(100.0, 100.0), vec2(200.0, 40.0))),
        );
        let menu = dom.append(
            wrapper,
            Element::new("div").rect(Rect::from_min_size(pos2(100.0, 148.0), vec2(300.0, 200.0))),
        );

        dom.set_inline_offsets(
            &menu,
            &InlineOffsets {
                left: Some(Inset::Auto),
                right: Some(Inset::Px(0.0)),
                top: Some(Inset::Auto),
                bottom: Some(Inset::Outside { gap: 8.0 }),
            },
        );
        assert_eq!(
            dom.bounding_rect(&menu),
            Rect::from_min_size(pos2(0.0, -108.0), vec2(300.0, 200.0))
        );

        dom.set_inline_offsets(&menu, &InlineOffsets::CLEARED);
        assert_eq!(dom.bounding_rect(&menu).min, pos2(100.0, 148.0));
    }
}
