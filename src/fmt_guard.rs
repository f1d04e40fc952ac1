//! Text output with a scoped formatting state.
//!
//! [`Output`] keeps a [`FormatSpec`] that applies to every value written through it, much like a
//! stream with sticky fill, width and precision settings. A [`FormatGuard`] snapshots that state
//! and puts it back when dropped, so a caller can change the formatting for a few writes without
//! leaking the change to whoever writes next.

use std::{
    io::{self, Write},
    ops::{Deref, DerefMut},
};

/// Alignment of a value padded to [`FormatSpec::width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Right,
}

/// Sticky formatting settings of an [`Output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub width: usize,
    /// Number of decimals for floating point values, shortest representation when `None`.
    pub precision: Option<usize>,
    pub align: Align,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            width: 0,
            precision: None,
            align: Align::default(),
        }
    }
}

impl FormatSpec {
    fn pad(&self, text: &str) -> String {
        let len = text.chars().count();
        if len >= self.width {
            return text.to_owned();
        }
        let padding: String = std::iter::repeat(self.fill).take(self.width - len).collect();
        match self.align {
            Align::Left => format!("{text}{padding}"),
            Align::Right => format!("{padding}{text}"),
        }
    }
}

/// A writer formatting values according to its current [`FormatSpec`].
#[derive(Debug)]
pub struct Output<W: Write> {
    inner: W,
    spec: FormatSpec,
}

impl<W: Write> Output<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            spec: FormatSpec::default(),
        }
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    pub fn spec_mut(&mut self) -> &mut FormatSpec {
        &mut self.spec
    }

    pub fn set_precision(&mut self, precision: usize) -> &mut Self {
        self.spec.precision = Some(precision);
        self
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.spec.width = width;
        self
    }

    pub fn set_fill(&mut self, fill: char) -> &mut Self {
        self.spec.fill = fill;
        self
    }

    pub fn set_align(&mut self, align: Align) -> &mut Self {
        self.spec.align = align;
        self
    }

    pub fn write_f64(&mut self, value: f64) -> io::Result<()> {
        let text = match self.spec.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        };
        self.write_padded(&text)
    }

    /// Writes any displayable value, padded but otherwise untouched.
    pub fn write_display(&mut self, value: impl std::fmt::Display) -> io::Result<()> {
        self.write_padded(&value.to_string())
    }

    /// Writes `text` as is, ignoring the current spec.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n")
    }

    /// Returns a guard that restores the current spec when dropped.
    pub fn guard(&mut self) -> FormatGuard<'_, W> {
        FormatGuard {
            saved: self.spec,
            output: self,
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_padded(&mut self, text: &str) -> io::Result<()> {
        let padded = self.spec.pad(text);
        self.inner.write_all(padded.as_bytes())
    }
}

/// Restores the [`FormatSpec`] of an [`Output`] on drop.
///
/// The guard derefs to the output it borrows, so formatting changes and writes go through it.
#[derive(Debug)]
pub struct FormatGuard<'a, W: Write> {
    output: &'a mut Output<W>,
    saved: FormatSpec,
}

impl<W: Write> Deref for FormatGuard<'_, W> {
    type Target = Output<W>;

    fn deref(&self) -> &Self::Target {
        &*self.output
    }
}

impl<W: Write> DerefMut for FormatGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.output
    }
}

impl<W: Write> Drop for FormatGuard<'_, W> {
    fn drop(&mut self) {
        self.output.spec = self.saved;
    }
}
