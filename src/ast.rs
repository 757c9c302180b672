// Svelte template AST node types — based on the shapes produced by the
// Svelte compiler's `parse()`.
//
// ~25 node kinds representing markup, control blocks, meta tags, and the
// element families. Each node is a variant of the `Node` enum; parent nodes
// own their child fragments. Embedded script fragments are opaque
// `Expression` values rendered through the expression bridge.

use crate::expr::Expression;

/// Ordered sequence of sibling nodes with no wrapping element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

/// A parsed component: optional module/instance scripts plus the markup tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub module: Option<Script>,
    pub instance: Option<Script>,
    pub fragment: Fragment,
}

/// Scope of a `<script>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptContext {
    Instance,
    Module,
}

/// A `<script>` block. The statement content is opaque to the printer and
/// rendered through the expression bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub context: ScriptContext,
    pub attributes: Vec<AttributeNode>,
    pub content: Expression,
}

// ---------------------------------------------------------------------------
// Markup nodes
// ---------------------------------------------------------------------------

/// Raw character data.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub data: String,
}

/// HTML comment (`<!-- ... -->`). Whitespace-only comments print nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub data: String,
}

/// Expression interpolation in text position (`{expression}`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTag {
    pub expression: Expression,
}

/// `{@html expression}`.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTag {
    pub expression: Expression,
}

/// `{@debug id1, id2}`; an empty identifier list prints bare `{@debug}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugTag {
    pub identifiers: Vec<Expression>,
}

/// `{@const declaration}`. The declaration prints without the `const`
/// keyword or a trailing semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstTag {
    pub declaration: Expression,
}

/// `{@render expression}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTag {
    pub expression: Expression,
}

// ---------------------------------------------------------------------------
// Element-like nodes
// ---------------------------------------------------------------------------

/// Element family. Determines self-closing eligibility and which reserved
/// tag the node prints as; the tag name itself lives on [`Element::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Plain HTML element (`<div>`).
    Regular,
    /// Capitalized component tag (`<Widget>`).
    Component,
    /// `<slot>`.
    Slot,
    /// `<title>` inside `<svelte:head>`.
    Title,
    /// `<svelte:self>`.
    SvelteSelf,
    /// `<svelte:window>`.
    SvelteWindow,
    /// `<svelte:document>`.
    SvelteDocument,
    /// `<svelte:body>`.
    SvelteBody,
    /// `<svelte:head>`.
    SvelteHead,
    /// `<svelte:element this={...}>`.
    SvelteElement,
    /// `<svelte:component this={...}>`.
    SvelteComponent,
    /// `<svelte:fragment>`.
    SvelteFragment,
}

impl ElementKind {
    /// Whether an empty node of this family prints as a single `<name/>` tag.
    /// Plain elements and `<title>` always print an explicit close tag (or
    /// none at all for void elements).
    pub fn self_closing_eligible(self) -> bool {
        !matches!(self, ElementKind::Regular | ElementKind::Title)
    }
}

/// HTML void elements: never given a closing tag, even with child content.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// An element, component, slot, or reserved `svelte:*` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub name: String,
    pub attributes: Vec<AttributeNode>,
    pub fragment: Fragment,
    /// Target expression for `<svelte:element this={...}>` and
    /// `<svelte:component this={...}>`.
    pub this: Option<Expression>,
}

impl Element {
    /// Whether this element's name is an HTML void element.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    /// Whether this element prints as a single self-closed tag.
    pub fn self_closes(&self) -> bool {
        self.kind.self_closing_eligible() && self.fragment.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Attributes and directives
// ---------------------------------------------------------------------------

/// Anything that can sit in an element's attribute position. These are
/// printed in order by the element printer, not visited by the traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeNode {
    Attribute(Attribute),
    Spread(SpreadAttribute),
    Directive(Directive),
}

/// Plain `name`, `name="text"`, `name={expression}`, or `{name}` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

/// Value of a plain attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean presence (`disabled`).
    True,
    /// Literal text (`class="flex"`).
    Text(String),
    /// Embedded expression (`class={getClass()}`).
    Expression(Expression),
    /// `{name}` shorthand; always prints expanded as `name={name}`.
    Shorthand,
}

/// `{...expression}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadAttribute {
    pub expression: Expression,
}

/// Attribute-like construct with a semantic prefix (`on:`, `bind:`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub name: String,
    /// Directive argument. `None` is the shorthand form; `bind:` and
    /// `class:` expand it to `={name}`, the other kinds print bare.
    pub expression: Option<Expression>,
}

/// Value of a `style:` directive, which accepts literal text in addition to
/// the usual expression/shorthand forms.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue {
    #[default]
    None,
    Text(String),
    Expression(Expression),
}

/// Directive family, determining the prefix token.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveKind {
    /// `animate:name`.
    Animate,
    /// `bind:name`.
    Bind,
    /// `class:name`.
    Class,
    /// `let:name`.
    Let,
    /// `on:name`.
    On,
    /// `style:name`, with its own value slot.
    Style(StyleValue),
    /// `transition:` / `in:` / `out:` depending on the intro/outro flags.
    Transition { intro: bool, outro: bool },
    /// `use:name`.
    Use,
}

impl DirectiveKind {
    /// The prefix token this directive prints with. Intro-only transitions
    /// print `in:`, outro-only print `out:`, both-or-neither `transition:`.
    pub fn prefix(&self) -> &'static str {
        match self {
            DirectiveKind::Animate => "animate",
            DirectiveKind::Bind => "bind",
            DirectiveKind::Class => "class",
            DirectiveKind::Let => "let",
            DirectiveKind::On => "on",
            DirectiveKind::Style(_) => "style",
            DirectiveKind::Transition { intro: true, outro: false } => "in",
            DirectiveKind::Transition { intro: false, outro: true } => "out",
            DirectiveKind::Transition { .. } => "transition",
            DirectiveKind::Use => "use",
        }
    }
}

// ---------------------------------------------------------------------------
// Control blocks
// ---------------------------------------------------------------------------

/// `{#if}` / `{:else if}` / `{:else}` chain. An else-if continuation is an
/// `IfBlock` with `elseif: true` stored inside the parent's alternate.
#[derive(Debug, Clone, PartialEq)]
pub struct IfBlock {
    pub elseif: bool,
    pub test: Expression,
    pub consequent: Fragment,
    pub alternate: Option<Fragment>,
}

/// `{#each expression as context, index (key)}`. Binding, index alias, and
/// key expression are each independently optional.
#[derive(Debug, Clone, PartialEq)]
pub struct EachBlock {
    pub expression: Expression,
    pub context: Option<Expression>,
    pub index: Option<String>,
    pub key: Option<Expression>,
    pub body: Fragment,
}

/// `{#await}` with optional pending/then/catch regions.
#[derive(Debug, Clone, PartialEq)]
pub struct AwaitBlock {
    pub expression: Expression,
    pub value: Option<Expression>,
    pub error: Option<Expression>,
    pub pending: Option<Fragment>,
    pub then: Option<Fragment>,
    pub catch: Option<Fragment>,
}

/// `{#key expression}`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBlock {
    pub expression: Expression,
    pub fragment: Fragment,
}

/// `{#snippet name(param1, param2)}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetBlock {
    pub expression: Expression,
    pub parameters: Vec<Expression>,
    pub body: Fragment,
}

// ---------------------------------------------------------------------------
// Node enum
// ---------------------------------------------------------------------------

/// A node in the template tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Fragment(Fragment),

    // Character data
    Text(Text),
    Comment(Comment),

    // Tags
    ExpressionTag(ExpressionTag),
    HtmlTag(HtmlTag),
    DebugTag(DebugTag),
    ConstTag(ConstTag),
    RenderTag(RenderTag),

    // Element-like
    Element(Element),

    // Control blocks
    IfBlock(IfBlock),
    EachBlock(EachBlock),
    AwaitBlock(AwaitBlock),
    KeyBlock(KeyBlock),
    SnippetBlock(SnippetBlock),
}

/// Fieldless discriminant used as the printer-registry key. Element families
/// stay distinct so a registry can override behavior per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Fragment,
    Text,
    Comment,
    ExpressionTag,
    HtmlTag,
    DebugTag,
    ConstTag,
    RenderTag,
    RegularElement,
    Component,
    SlotElement,
    TitleElement,
    SvelteSelf,
    SvelteWindow,
    SvelteDocument,
    SvelteBody,
    SvelteHead,
    SvelteElement,
    SvelteComponent,
    SvelteFragment,
    IfBlock,
    EachBlock,
    AwaitBlock,
    KeyBlock,
    SnippetBlock,
}

impl NodeKind {
    /// Every known node kind, in dispatch-table order.
    pub const ALL: [NodeKind; 25] = [
        NodeKind::Fragment,
        NodeKind::Text,
        NodeKind::Comment,
        NodeKind::ExpressionTag,
        NodeKind::HtmlTag,
        NodeKind::DebugTag,
        NodeKind::ConstTag,
        NodeKind::RenderTag,
        NodeKind::RegularElement,
        NodeKind::Component,
        NodeKind::SlotElement,
        NodeKind::TitleElement,
        NodeKind::SvelteSelf,
        NodeKind::SvelteWindow,
        NodeKind::SvelteDocument,
        NodeKind::SvelteBody,
        NodeKind::SvelteHead,
        NodeKind::SvelteElement,
        NodeKind::SvelteComponent,
        NodeKind::SvelteFragment,
        NodeKind::IfBlock,
        NodeKind::EachBlock,
        NodeKind::AwaitBlock,
        NodeKind::KeyBlock,
        NodeKind::SnippetBlock,
    ];

    /// The node-type tag the Svelte parser uses for this kind. Used to name
    /// the offending construct in errors.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Fragment => "Fragment",
            NodeKind::Text => "Text",
            NodeKind::Comment => "Comment",
            NodeKind::ExpressionTag => "ExpressionTag",
            NodeKind::HtmlTag => "HtmlTag",
            NodeKind::DebugTag => "DebugTag",
            NodeKind::ConstTag => "ConstTag",
            NodeKind::RenderTag => "RenderTag",
            NodeKind::RegularElement => "RegularElement",
            NodeKind::Component => "Component",
            NodeKind::SlotElement => "SlotElement",
            NodeKind::TitleElement => "TitleElement",
            NodeKind::SvelteSelf => "SvelteSelf",
            NodeKind::SvelteWindow => "SvelteWindow",
            NodeKind::SvelteDocument => "SvelteDocument",
            NodeKind::SvelteBody => "SvelteBody",
            NodeKind::SvelteHead => "SvelteHead",
            NodeKind::SvelteElement => "SvelteElement",
            NodeKind::SvelteComponent => "SvelteComponent",
            NodeKind::SvelteFragment => "SvelteFragment",
            NodeKind::IfBlock => "IfBlock",
            NodeKind::EachBlock => "EachBlock",
            NodeKind::AwaitBlock => "AwaitBlock",
            NodeKind::KeyBlock => "KeyBlock",
            NodeKind::SnippetBlock => "SnippetBlock",
        }
    }
}

impl From<ElementKind> for NodeKind {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Regular => NodeKind::RegularElement,
            ElementKind::Component => NodeKind::Component,
            ElementKind::Slot => NodeKind::SlotElement,
            ElementKind::Title => NodeKind::TitleElement,
            ElementKind::SvelteSelf => NodeKind::SvelteSelf,
            ElementKind::SvelteWindow => NodeKind::SvelteWindow,
            ElementKind::SvelteDocument => NodeKind::SvelteDocument,
            ElementKind::SvelteBody => NodeKind::SvelteBody,
            ElementKind::SvelteHead => NodeKind::SvelteHead,
            ElementKind::SvelteElement => NodeKind::SvelteElement,
            ElementKind::SvelteComponent => NodeKind::SvelteComponent,
            ElementKind::SvelteFragment => NodeKind::SvelteFragment,
        }
    }
}

impl Node {
    /// The discriminant used for printer dispatch.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Fragment(_) => NodeKind::Fragment,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::ExpressionTag(_) => NodeKind::ExpressionTag,
            Node::HtmlTag(_) => NodeKind::HtmlTag,
            Node::DebugTag(_) => NodeKind::DebugTag,
            Node::ConstTag(_) => NodeKind::ConstTag,
            Node::RenderTag(_) => NodeKind::RenderTag,
            Node::Element(el) => el.kind.into(),
            Node::IfBlock(_) => NodeKind::IfBlock,
            Node::EachBlock(_) => NodeKind::EachBlock,
            Node::AwaitBlock(_) => NodeKind::AwaitBlock,
            Node::KeyBlock(_) => NodeKind::KeyBlock,
            Node::SnippetBlock(_) => NodeKind::SnippetBlock,
        }
    }
}
