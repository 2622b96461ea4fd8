//! Draws viewable objects into a terminal window.

use crate::count::KeywordCount;
use crate::text::convert_html_entities;
use itertools::Itertools;

/// View renderer options.
#[derive(Debug, Default)]
pub struct ViewOptions {
    raw: bool,
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use whatshot::view::ViewOptions;
    /// let opts = ViewOptions::build().raw(true).build();
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct ViewOptionsBuilder {
    raw: bool,
}

impl ViewOptionsBuilder {
    /// Sets the "raw" option to true or false.
    ///
    /// When raw, titles are printed exactly as Reddit returned them,
    /// HTML entities and all.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        ViewOptions { raw: self.raw }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

/// A listing of post titles, one per line, in listing order.
impl Viewable for Vec<String> {
    fn view(&self, opts: &ViewOptions) -> String {
        self.iter()
            .map(|title| {
                if opts.raw {
                    title.clone()
                } else {
                    convert_html_entities(title)
                }
            })
            .join("\n")
    }
}

/// A keyword tally report: one `keyword: count` line per keyword, in the
/// order the pairs were handed over (sorted by the tally itself).
impl Viewable for Vec<KeywordCount> {
    fn view(&self, _: &ViewOptions) -> String {
        self.iter()
            .map(|(keyword, count)| format!("{keyword}: {count}"))
            .join("\n")
    }
}
