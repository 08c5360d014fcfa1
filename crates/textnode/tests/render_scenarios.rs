//! End-to-end rendering of text trees in all four formats.

use textnode::{Format, TextNode};
use tint::background::{Background, BackgroundCache, FixedProbe};
use tint::{Color, Rgb};
use utility::{Decorations, FontStyle, StructuredStyle};

fn light() -> BackgroundCache {
    BackgroundCache::new(FixedProbe(Background::Light))
}

fn dark() -> BackgroundCache {
    BackgroundCache::new(FixedProbe(Background::Dark))
}

fn render(format: Format, node: &TextNode) -> String {
    format.render_with(node, &light())
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn unstyled_text_is_identical_everywhere() {
    let node = TextNode::new("Hello, world!");
    for format in Format::ALL {
        assert_eq!(render(format, &node), "Hello, world!", "{:?}", format);
    }
}

#[test]
fn bold_child_after_plain_parent() {
    let node = TextNode::new("Hello, ").with_child(TextNode::styled("world!", "font-bold"));

    insta::assert_snapshot!(render(Format::Markdown, &node), @"Hello, **world!**");
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"Hello, <span class="font-bold"><strong>world!</strong></span>"#
    );
    assert_eq!(render(Format::Ansi, &node), "Hello, \x1b[1mworld!\x1b[0m");
    assert_eq!(render(Format::Plain, &node), "Hello, world!");
}

#[test]
fn palette_foreground() {
    let node = TextNode::styled("Hello, world!", "text-red-500");

    let resolved = textnode::resolve(&node, &light());
    assert_eq!(resolved.style.fg.unwrap().to_string(), "#ef4444");

    assert_eq!(
        render(Format::Ansi, &node),
        "\x1b[38;2;239;68;68mHello, world!\x1b[0m"
    );
    insta::assert_snapshot!(
        render(Format::Markdown, &node),
        @r#"<span style="color: #ef4444">Hello, world!</span>"#
    );
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"<span class="text-red-500" style="color:#ef4444">Hello, world!</span>"#
    );
}

#[test]
fn uppercase_adds_no_markup_of_its_own() {
    let node = TextNode::styled("hello world", "uppercase");

    assert_eq!(render(Format::Plain, &node), "HELLO WORLD");
    assert_eq!(render(Format::Ansi, &node), "HELLO WORLD");
    assert_eq!(render(Format::Markdown, &node), "HELLO WORLD");
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"<span class="uppercase">HELLO WORLD</span>"#
    );
}

#[test]
fn line_through() {
    let node = TextNode::styled("Deleted", "line-through");

    assert_eq!(render(Format::Ansi, &node), "\x1b[9mDeleted\x1b[29m");
    insta::assert_snapshot!(render(Format::Markdown, &node), @"~~Deleted~~");
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"<span class="line-through"><s>Deleted</s></span>"#
    );
}

// ============================================================================
// Tree semantics
// ============================================================================

#[test]
fn children_render_outside_parent_wrapper() {
    let node = TextNode::styled("a", "italic").with_child(TextNode::new("b"));
    insta::assert_snapshot!(render(Format::Markdown, &node), @"*a*b");
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"<span class="italic"><em>a</em></span>b"#
    );
    assert_eq!(render(Format::Ansi, &node), "\x1b[3ma\x1b[0mb");
}

#[test]
fn children_keep_list_order() {
    let node = TextNode::group(["one ", "two ", "three"].map(TextNode::from));
    assert_eq!(render(Format::Plain, &node), "one two three");
}

#[test]
fn styled_group_without_content_still_wraps() {
    let node = TextNode::styled("", "font-bold text-red-500").with_child(TextNode::new("x"));

    assert_eq!(render(Format::Plain, &node), "x");
    assert_eq!(
        render(Format::Ansi, &node),
        "\x1b[1;38;2;239;68;68m\x1b[0mx"
    );
    insta::assert_snapshot!(
        render(Format::Markdown, &node),
        @r#"**<span style="color: #ef4444"></span>**x"#
    );
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"<span class="font-bold text-red-500" style="color:#ef4444"><strong></strong></span>x"#
    );
}

#[test]
fn empty_bold_node_keeps_its_markup() {
    let node = TextNode::styled("", "font-bold").with_child(TextNode::new("x"));

    assert_eq!(render(Format::Ansi, &node), "\x1b[1m\x1b[0mx");
    insta::assert_snapshot!(render(Format::Markdown, &node), @"****x");
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"<span class="font-bold"><strong></strong></span>x"#
    );
}

#[test]
fn unstyled_empty_group_adds_nothing() {
    let node = TextNode::group([TextNode::new("a"), TextNode::new(""), TextNode::new("b")]);
    for format in Format::ALL {
        assert_eq!(render(format, &node), "ab", "{:?}", format);
    }
}

#[test]
fn transform_applies_to_own_content_only() {
    let node = TextNode::styled("loud ", "uppercase").with_child(TextNode::new("quiet"));
    assert_eq!(render(Format::Plain, &node), "LOUD quiet");
}

#[test]
fn capitalize_keeps_rest_of_word() {
    let node = TextNode::styled("hello mcDONALD", "capitalize");
    assert_eq!(render(Format::Plain, &node), "Hello McDONALD");
}

// ============================================================================
// Style precedence
// ============================================================================

#[test]
fn structured_style_wins_over_tokens() {
    let style = StructuredStyle::new().with_font(FontStyle::new().with(Decorations::ITALIC));
    let node = TextNode::styled("x", "font-bold").with_style(style);

    insta::assert_snapshot!(render(Format::Markdown, &node), @"*x*");
    insta::assert_snapshot!(render(Format::Html, &node), @"<em>x</em>");
}

#[test]
fn structured_colors_are_not_adapted() {
    let style = StructuredStyle::new().with_fg(Color::Rgb(Rgb::new(0, 0, 0)));
    let node = TextNode::new("x").with_style(style);
    assert_eq!(
        Format::Ansi.render_with(&node, &dark()),
        "\x1b[38;2;0;0;0mx\x1b[0m"
    );
}

#[test]
fn empty_structured_style_falls_back_to_tokens() {
    let node = TextNode::styled("x", "underline").with_style(StructuredStyle::new());
    assert_eq!(render(Format::Ansi, &node), "\x1b[4mx\x1b[0m");
}

// ============================================================================
// Adaptive colors
// ============================================================================

#[test]
fn token_colors_adapt_to_dark_background() {
    let node = TextNode::styled("x", "text-black");
    assert_eq!(
        Format::Ansi.render_with(&node, &dark()),
        "\x1b[38;2;153;153;153mx\x1b[0m"
    );
    assert_eq!(
        Format::Ansi.render_with(&node, &light()),
        "\x1b[38;2;0;0;0mx\x1b[0m"
    );
}

#[test]
fn token_colors_adapt_to_light_background() {
    let node = TextNode::styled("x", "bg-white");
    insta::assert_snapshot!(
        Format::Html.render_with(&node, &light()),
        @r#"<span class="bg-white" style="background-color:#666666">x</span>"#
    );
}

// ============================================================================
// Combined styles
// ============================================================================

#[test]
fn colored_bold_italic_markdown() {
    let node = TextNode::styled("text", "font-bold italic text-red-500");
    insta::assert_snapshot!(
        render(Format::Markdown, &node),
        @r#"***<span style="color: #ef4444">text</span>***"#
    );
}

#[test]
fn everything_in_html() {
    let node = TextNode::styled(
        "x",
        "line-through font-bold italic underline font-light text-[#112233] bg-sky-500 text-lg p-2",
    );
    insta::assert_snapshot!(
        render(Format::Html, &node),
        @r#"<span class="line-through font-bold italic underline font-light text-[#112233] bg-sky-500 text-lg p-2" style="color:#112233; background-color:#0ea5e9; font-size:1.125rem; padding:0.5rem 0.5rem 0.5rem 0.5rem; opacity:0.6"><s><strong><em><u>x</u></em></strong></s></span>"#
    );
}

#[test]
fn everything_in_ansi() {
    let node = TextNode::styled("x", "line-through font-bold italic underline text-[#112233]");
    assert_eq!(
        render(Format::Ansi, &node),
        "\x1b[9m\x1b[1;3;4;38;2;17;34;51mx\x1b[0m"
    );
}

#[test]
fn literal_colors_reach_markdown_and_html_only() {
    let node = TextNode::styled("x", "text-rebeccapurple");
    assert_eq!(render(Format::Ansi, &node), "x");
    insta::assert_snapshot!(
        render(Format::Markdown, &node),
        @r#"<span style="color: rebeccapurple">x</span>"#
    );
}

#[test]
fn malformed_tokens_never_break_rendering() {
    let node = TextNode::styled("ok", "text-[ bg-[#zz] p-[oops] ]] --- font-");
    for format in Format::ALL {
        let out = render(format, &node);
        assert!(out.contains("ok"), "{:?}: {}", format, out);
    }
}
