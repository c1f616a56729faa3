//! Property-based tests for ultralog using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;
use ultralog::prelude::*;
use ultralog::{MessageBuffer, MIN_MESSAGE_LENGTH, TRUNCATION_MARKER};

fn any_level() -> impl Strategy<Value = LogLevel> {
    (0u8..=6).prop_map(LogLevel::from_rank)
}

fn delivered_count(threshold: LogLevel, level: LogLevel) -> usize {
    let count = Arc::new(Mutex::new(0usize));
    let store = Arc::clone(&count);
    let logger = Logger::builder()
        .level(threshold)
        .boxed_sink(sink_fn(move |_l, _ts, _m, _msg| {
            *store.lock() += 1;
        }))
        .build();
    logger.log(level, "prop", format_args!("probe"));
    let delivered = *count.lock();
    delivered
}

proptest! {
    /// A record reaches the sink iff the threshold is not silent and its rank fits
    #[test]
    fn test_filter_rule(threshold in any_level(), level in any_level()) {
        let expected = threshold != LogLevel::Silent
            && level != LogLevel::Silent
            && level.rank() <= threshold.rank();
        prop_assert_eq!(delivered_count(threshold, level), usize::from(expected));
    }

    /// Level ordering matches rank ordering
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
    }

    /// Display output parses back to the same level
    #[test]
    fn test_level_parse_display(level in any_level()) {
        let parsed: LogLevel = level.to_string().parse().unwrap();
        prop_assert_eq!(parsed, level);
        let parsed: LogLevel = level.code().to_string().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// ASCII output is either complete or exactly max + marker long
    #[test]
    fn test_truncation_bound(max_len in 0usize..512, body_len in 0usize..1024) {
        let mut buffer = MessageBuffer::new(max_len);
        let effective = max_len.max(MIN_MESSAGE_LENGTH);
        let body = "x".repeat(body_len);
        let (text, _) = buffer.render(format_args!("{}", body));

        if body_len < effective {
            prop_assert_eq!(text, body.as_str());
        } else {
            prop_assert_eq!(text.len(), effective + TRUNCATION_MARKER.len());
            prop_assert!(text.ends_with(TRUNCATION_MARKER));
        }
    }

    /// Multi-byte text is cut on a char boundary and never exceeds the bound
    #[test]
    fn test_truncation_utf8(body in "\\PC{0,300}", max_len in 32usize..128) {
        let mut buffer = MessageBuffer::new(max_len);
        let (text, _) = buffer.render(format_args!("{}", body));
        prop_assert!(text.len() <= max_len + TRUNCATION_MARKER.len());
        if let Some(kept) = text.strip_suffix(TRUNCATION_MARKER) {
            if body.len() >= max_len {
                prop_assert!(body.starts_with(kept));
            }
        }
    }
}
