//! Pending comment accumulation shared by the definition parser and the
//! error-code extractor. Standalone comment lines buffer up until the next
//! entity consumes them; a blank line discards the buffer.

/// Append one comment line to the pending buffer.
pub(crate) fn push_pending(buffer: &mut String, comment: &str) {
    if comment.is_empty() {
        return;
    }
    if !buffer.is_empty() {
        buffer.push_str(". ");
    }
    buffer.push_str(comment);
}

/// Combine the pending buffer with an entity's trailing line comment,
/// clearing the buffer.
pub(crate) fn take_pending(buffer: &mut String, line_comment: &str) -> String {
    let pending = std::mem::take(buffer);
    if pending.is_empty() {
        line_comment.to_string()
    } else if line_comment.is_empty() {
        pending
    } else {
        format!("{line_comment}. {pending}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_joins_with_period() {
        let mut buf = String::new();
        push_pending(&mut buf, "first");
        push_pending(&mut buf, "second");
        assert_eq!(buf, "first. second");
    }

    #[test]
    fn test_push_ignores_empty_lines() {
        let mut buf = String::from("kept");
        push_pending(&mut buf, "");
        assert_eq!(buf, "kept");
    }

    #[test]
    fn test_take_prefers_line_comment_first() {
        let mut buf = String::from("above the field");
        let joined = take_pending(&mut buf, "trailing");
        assert_eq!(joined, "trailing. above the field");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_take_with_only_one_side() {
        let mut buf = String::new();
        assert_eq!(take_pending(&mut buf, "trailing"), "trailing");

        let mut buf = String::from("above");
        assert_eq!(take_pending(&mut buf, ""), "above");
    }
}
