use crate::tokenize::split_chars;

/// The unparsed suffix of a value.
///
/// Each step consumes a prefix and narrows the remainder, so later steps
/// see offsets that depend on what earlier steps consumed.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    /// Cursor over the whole of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    /// What has not been consumed yet.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// `true` once everything was consumed.
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Exactly `n` characters, or `None` (consuming nothing) if fewer remain.
    pub fn take(&mut self, n: usize) -> Option<&'a str> {
        let (head, tail) = split_chars(self.rest, n)?;
        self.rest = tail;
        Some(head)
    }

    /// Up to `n` characters.
    pub fn take_up_to(&mut self, n: usize) -> &'a str {
        let (head, tail) = split_chars(self.rest, n).unwrap_or((self.rest, ""));
        self.rest = tail;
        head
    }

    /// Exactly `n` characters if all of them satisfy `pred`.
    pub fn take_if(&mut self, n: usize, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let (head, tail) = split_chars(self.rest, n)?;
        if !head.chars().all(pred) {
            return None;
        }
        self.rest = tail;
        Some(head)
    }

    /// The prefix selected by `f`, which must return a prefix of its input.
    pub fn take_with(&mut self, f: impl FnOnce(&'a str) -> &'a str) -> &'a str {
        let head = f(self.rest);
        if !self.rest.starts_with(head) {
            return "";
        }
        self.rest = &self.rest[head.len()..];
        head
    }

    /// Everything before `delim` (not consumed), or the whole remainder.
    pub fn take_until(&mut self, delim: &str) -> &'a str {
        let end = self.rest.find(delim).unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        head
    }

    /// Consume `prefix` if the remainder starts with it.
    pub fn eat(&mut self, prefix: &str) -> bool {
        match self.rest.strip_prefix(prefix) {
            Some(tail) => {
                self.rest = tail;
                true
            }
            None => false,
        }
    }

    /// Consume everything.
    pub fn take_rest(&mut self) -> &'a str {
        std::mem::take(&mut self.rest)
    }
}
