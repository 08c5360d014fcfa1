//! Writing rendered trees to an output stream.

use std::io::{self, Stdout, Write};

use textnode::{Format, TextNode};
use tint::background::{self, BackgroundCache};

use crate::config::Config;
use crate::environment::Environment;
use crate::error::Result;

/// Renders trees in one format and writes them to `W`.
///
/// ```
/// use tailtext::{Format, Printer, TextNode};
///
/// let mut printer = Printer::new(Vec::new(), Format::Markdown);
/// printer.print(&TextNode::styled("hi", "font-bold")).unwrap();
/// assert_eq!(printer.into_inner(), b"**hi**");
/// ```
pub struct Printer<'a, W> {
    out: W,
    format: Format,
    background: &'a BackgroundCache,
}

impl Printer<'static, Stdout> {
    /// A stdout printer configured from the environment.
    ///
    /// ANSI is used for terminals (or `TAILTEXT_COLOR=always`), plain text
    /// otherwise.
    pub fn stdout() -> Self {
        let config = Config::from_env();
        config.apply(background::global());
        let env = Environment::detect();
        Printer::new(io::stdout(), config.color.format(env.is_tty))
    }
}

impl<W: Write> Printer<'static, W> {
    pub fn new(out: W, format: Format) -> Self {
        Printer {
            out,
            format,
            background: background::global(),
        }
    }
}

impl<'a, W: Write> Printer<'a, W> {
    /// Uses `cache` instead of the process-wide background.
    pub fn with_background<'b>(self, cache: &'b BackgroundCache) -> Printer<'b, W> {
        Printer {
            out: self.out,
            format: self.format,
            background: cache,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn print(&mut self, node: &TextNode) -> Result<()> {
        let rendered = self.format.render_with(node, self.background);
        self.out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    pub fn println(&mut self, node: &TextNode) -> Result<()> {
        self.print(node)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
