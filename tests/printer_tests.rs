//! Printing trees through the facade.

use tailtext::tint::background::FixedProbe;
use tailtext::{Background, BackgroundCache, ColorMode, Config, Format, Printer, TextNode};

fn dark() -> BackgroundCache {
    BackgroundCache::new(FixedProbe(Background::Dark))
}

fn greeting() -> TextNode {
    TextNode::new("Hello, ").with_child(TextNode::styled("world!", "font-bold text-black"))
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn prints_ansi_with_injected_background() {
    let cache = dark();
    let mut printer = Printer::new(Vec::new(), Format::Ansi).with_background(&cache);
    printer.println(&greeting()).unwrap();

    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(out, "Hello, \x1b[1;38;2;153;153;153mworld!\x1b[0m\n");
}

#[test]
fn prints_html() {
    let cache = dark();
    let mut printer = Printer::new(Vec::new(), Format::Html).with_background(&cache);
    printer.print(&TextNode::styled("a < b", "underline")).unwrap();
    printer.flush().unwrap();

    let out = String::from_utf8(printer.into_inner()).unwrap();
    insta::assert_snapshot!(out, @r#"<span class="underline"><u>a &lt; b</u></span>"#);
}

#[test]
fn consecutive_prints_append() {
    let mut printer = Printer::new(Vec::new(), Format::Plain);
    printer.print(&TextNode::new("a")).unwrap();
    printer.println(&TextNode::styled("b", "uppercase")).unwrap();
    printer.print(&TextNode::new("c")).unwrap();
    assert_eq!(printer.into_inner(), b"aB\nc");
}

#[test]
fn write_failures_surface_as_io_errors() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut printer = Printer::new(Broken, Format::Plain);
    let err = printer.print(&TextNode::new("x")).unwrap_err();
    assert!(matches!(err, tailtext::Error::Io(_)));
    assert_eq!(err.to_string(), "Output error: closed");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_selects_format() {
    let config = Config::from_vars(|key| (key == "NO_COLOR").then(|| "1".to_string()));
    assert_eq!(config.color, ColorMode::Never);
    assert_eq!(config.color.format(true), Format::Plain);
}

#[test]
fn forced_background_reaches_the_printer() {
    let cache = BackgroundCache::new(FixedProbe(Background::Light));
    let config = Config::from_vars(|key| (key == "TAILTEXT_BACKGROUND").then(|| "dark".into()));
    config.apply(&cache);

    let mut printer = Printer::new(Vec::new(), Format::Markdown).with_background(&cache);
    printer.print(&TextNode::styled("x", "text-black")).unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();
    insta::assert_snapshot!(out, @r#"<span style="color: #999999">x</span>"#);
}
