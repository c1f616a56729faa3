//! Bounded message rendering
//!
//! Messages are rendered into a reusable buffer whose capacity is the
//! configured maximum message length. Output that does not fit is cut at the
//! limit and the [`TRUNCATION_MARKER`] is appended. A formatting failure never
//! reaches the caller; the message becomes [`FORMAT_ERROR_MESSAGE`] instead.
//! That covers a `Display` impl returning `fmt::Error` as well as one that
//! panics.

use std::fmt::{self, Write};
use std::panic::{self, AssertUnwindSafe};

/// Default maximum message length in bytes.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2048;

/// Smallest maximum message length that can be configured.
pub const MIN_MESSAGE_LENGTH: usize = 32;

/// Suffix appended to messages cut at the maximum length.
pub const TRUNCATION_MARKER: &str = "[...]";

/// Text delivered when a message cannot be rendered.
pub const FORMAT_ERROR_MESSAGE: &str = "<error creating log message>";

/// Raise a requested maximum length to [`MIN_MESSAGE_LENGTH`] if needed.
#[inline]
pub const fn clamp_max_length(requested: usize) -> usize {
    if requested < MIN_MESSAGE_LENGTH {
        MIN_MESSAGE_LENGTH
    } else {
        requested
    }
}

/// Outcome of rendering one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// The whole message fit.
    Complete,
    /// The message reached the limit and carries the marker.
    Truncated,
    /// A formatting impl failed; the fallback text was produced.
    Failed,
}

/// Reusable, length-bounded rendering buffer.
///
/// Storage is allocated lazily on first use and again whenever the maximum
/// length changes.
#[derive(Debug)]
pub struct MessageBuffer {
    text: String,
    max_len: usize,
}

impl MessageBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len: clamp_max_length(max_len),
        }
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether storage is currently held.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.text.capacity() > 0
    }

    /// Change the maximum length, clamping to the floor.
    ///
    /// Returns `true` if the storage was replaced, `false` if the clamped
    /// value equals the current one.
    pub fn resize(&mut self, requested: usize) -> bool {
        let max_len = clamp_max_length(requested);
        if max_len == self.max_len {
            return false;
        }
        self.max_len = max_len;
        self.text = String::with_capacity(Self::storage_for(max_len));
        true
    }

    /// Allocate storage if none is held. Returns `true` if it allocated.
    pub fn ensure_allocated(&mut self) -> bool {
        if self.is_allocated() {
            return false;
        }
        self.text.reserve_exact(Self::storage_for(self.max_len));
        true
    }

    /// Drop the storage. The next render allocates again.
    pub fn release(&mut self) {
        self.text = String::new();
    }

    /// Render `args` into the buffer.
    ///
    /// The returned text borrows the buffer and stays valid until the next
    /// call that takes `&mut self`.
    pub fn render(&mut self, args: fmt::Arguments<'_>) -> (&str, Rendered) {
        self.text.clear();

        let limit = self.max_len;
        let out = &mut self.text;
        let written = panic::catch_unwind(AssertUnwindSafe(move || {
            let mut writer = BoundedWriter {
                out,
                limit,
                total: 0,
                full: false,
            };
            let result = writer.write_fmt(args);
            (result, writer.total)
        }));

        let total = match written {
            Ok((Ok(()), total)) => total,
            Ok((Err(_), _)) => return (FORMAT_ERROR_MESSAGE, Rendered::Failed),
            Err(_) => {
                // Partial output from before the panic is discarded.
                self.text.clear();
                return (FORMAT_ERROR_MESSAGE, Rendered::Failed);
            }
        };

        if total >= self.max_len {
            self.text.push_str(TRUNCATION_MARKER);
            return (&self.text, Rendered::Truncated);
        }
        (&self.text, Rendered::Complete)
    }

    fn storage_for(max_len: usize) -> usize {
        max_len + TRUNCATION_MARKER.len()
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGE_LENGTH)
    }
}

/// Writer that keeps at most `limit` bytes but counts everything offered.
struct BoundedWriter<'a> {
    out: &'a mut String,
    limit: usize,
    total: usize,
    full: bool,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.total += s.len();
        if self.full {
            return Ok(());
        }

        let room = self.limit - self.out.len();
        if s.len() <= room {
            self.out.push_str(s);
            return Ok(());
        }

        // Cut on a char boundary; later fragments must not fill the gap.
        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.out.push_str(&s[..cut]);
        self.full = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_short_message_unmodified() {
        let mut buffer = MessageBuffer::default();
        let (text, outcome) = buffer.render(format_args!("failed: {}", 7));
        assert_eq!(text, "failed: 7");
        assert_eq!(outcome, Rendered::Complete);
    }

    #[test]
    fn test_truncation_appends_marker() {
        let mut buffer = MessageBuffer::new(32);
        let long = "x".repeat(100);
        let (text, outcome) = buffer.render(format_args!("{}", long));
        assert_eq!(outcome, Rendered::Truncated);
        assert_eq!(text.len(), 32 + TRUNCATION_MARKER.len());
        assert!(text.ends_with("[...]"));
        assert!(text.starts_with(&"x".repeat(32)));
    }

    #[test]
    fn test_length_equal_to_limit_is_truncated() {
        let mut buffer = MessageBuffer::new(40);
        let exact = "y".repeat(40);
        let (text, outcome) = buffer.render(format_args!("{}", exact));
        assert_eq!(outcome, Rendered::Truncated);
        assert_eq!(text, format!("{}[...]", exact));

        let below = "y".repeat(39);
        let (text, outcome) = buffer.render(format_args!("{}", below));
        assert_eq!(outcome, Rendered::Complete);
        assert_eq!(text, below);
    }

    #[test]
    fn test_truncation_across_fragments() {
        let mut buffer = MessageBuffer::new(32);
        let (text, _) = buffer.render(format_args!(
            "{}{}{}",
            "a".repeat(30),
            "bbbbbbbb",
            "c"
        ));
        assert_eq!(text, format!("{}bb[...]", "a".repeat(30)));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        let mut buffer = MessageBuffer::new(32);
        // 31 ASCII bytes followed by a two-byte char that straddles the limit.
        let (text, outcome) = buffer.render(format_args!("{}é and more", "a".repeat(31)));
        assert_eq!(outcome, Rendered::Truncated);
        assert_eq!(text, format!("{}[...]", "a".repeat(31)));
    }

    #[test]
    fn test_format_failure_fallback() {
        let mut buffer = MessageBuffer::default();
        let (text, outcome) = buffer.render(format_args!("value: {}", Broken));
        assert_eq!(text, FORMAT_ERROR_MESSAGE);
        assert_eq!(outcome, Rendered::Failed);

        let (text, outcome) = buffer.render(format_args!("recovered"));
        assert_eq!(text, "recovered");
        assert_eq!(outcome, Rendered::Complete);
    }

    #[test]
    fn test_panicking_display_fallback() {
        struct Exploding;

        impl fmt::Display for Exploding {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("partial ")?;
                panic!("display exploded");
            }
        }

        let mut buffer = MessageBuffer::default();
        let (text, outcome) = buffer.render(format_args!("value: {}", Exploding));
        assert_eq!(text, FORMAT_ERROR_MESSAGE);
        assert_eq!(outcome, Rendered::Failed);

        let (text, outcome) = buffer.render(format_args!("recovered"));
        assert_eq!(text, "recovered");
        assert_eq!(outcome, Rendered::Complete);
    }

    #[test]
    fn test_resize_clamps_and_skips_noop() {
        let mut buffer = MessageBuffer::default();
        assert!(!buffer.resize(DEFAULT_MAX_MESSAGE_LENGTH));
        assert!(buffer.resize(4));
        assert_eq!(buffer.max_len(), MIN_MESSAGE_LENGTH);
        assert!(!buffer.resize(MIN_MESSAGE_LENGTH));
        assert!(!buffer.resize(0));
    }

    #[test]
    fn test_lazy_allocation_and_release() {
        let mut buffer = MessageBuffer::default();
        assert!(!buffer.is_allocated());
        assert!(buffer.ensure_allocated());
        assert!(!buffer.ensure_allocated());
        buffer.release();
        assert!(!buffer.is_allocated());
    }
}
