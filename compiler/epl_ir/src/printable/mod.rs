//! Indented tree dumps of expressions.
//!
//! A [`Printable`] is either a single line or a group of printables. Both
//! carry an indent relative to their parent; rendering turns every level into
//! two spaces.

/// An indentable tree of text lines.
#[derive(Clone, Debug)]
pub enum Printable {
    Line { indent: usize, text: String },
    Group { indent: usize, items: Vec<Printable> },
}

impl Printable {
    pub fn line(indent: usize, text: impl Into<String>) -> Self {
        Printable::Line {
            indent,
            text: text.into(),
        }
    }

    pub fn group(indent: usize, items: Vec<Printable>) -> Self {
        Printable::Group { indent, items }
    }

    /// Render to text, one line per leaf, without a trailing newline.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        // Explicit worklist; dumps of generated programs can be very deep.
        let mut work: Vec<(usize, &Printable)> = vec![(0, self)];
        while let Some((depth, node)) = work.pop() {
            match node {
                Printable::Line { indent, text } => {
                    lines.push(format!("{}{text}", "  ".repeat(depth + indent)));
                }
                Printable::Group { indent, items } => {
                    work.extend(items.iter().rev().map(|item| (depth + indent, item)));
                }
            }
        }
        lines.join("\n")
    }
}

/// Compared with a worklist, like [`render`](Printable::render).
impl PartialEq for Printable {
    fn eq(&self, other: &Self) -> bool {
        let mut work = vec![(self, other)];
        while let Some(pair) = work.pop() {
            match pair {
                (
                    Printable::Line { indent: i, text: a },
                    Printable::Line { indent: j, text: b },
                ) if i == j && a == b => {}
                (
                    Printable::Group { indent: i, items: a },
                    Printable::Group { indent: j, items: b },
                ) if i == j && a.len() == b.len() => work.extend(a.iter().zip(b)),
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Printable {}

/// Nested groups are flattened into a worklist before they are freed.
impl Drop for Printable {
    fn drop(&mut self) {
        let Printable::Group { items, .. } = self else {
            return;
        };
        let mut work = std::mem::take(items);
        while let Some(mut item) = work.pop() {
            if let Printable::Group { items, .. } = &mut item {
                work.append(items);
            }
        }
    }
}
