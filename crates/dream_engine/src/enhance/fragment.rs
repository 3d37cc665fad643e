//! Locating the object array inside a free-text reply

use super::{EnhancementError, EnhancementResult};
use crate::scene::SceneObject;

/// First well-formed JSON array of scene objects in `reply`
///
/// Every `[` is tried as the start of a bracket-balanced span, in order of
/// appearance; the first span that deserializes to a non-empty list wins and
/// everything else in the reply is ignored. Brackets inside JSON strings do
/// not count. When nothing wins, the first failure seen is reported.
pub fn extract_objects(reply: &str) -> EnhancementResult<Vec<SceneObject>> {
    let mut first_failure = None;

    for (start, _) in reply.match_indices('[') {
        let Some(span) = balanced_span(&reply[start..]) else {
            continue;
        };
        match serde_json::from_str::<Vec<SceneObject>>(span) {
            Ok(objects) if objects.is_empty() => {
                first_failure.get_or_insert(EnhancementError::EmptyFragment);
            }
            Ok(objects) => return Ok(objects),
            Err(e) => {
                first_failure.get_or_insert(EnhancementError::MalformedFragment(e));
            }
        }
    }

    Err(first_failure.unwrap_or(EnhancementError::MissingFragment))
}

/// The `[...]` span opening at the start of `text`, if it closes
fn balanced_span(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PrimitiveType;

    #[test]
    fn test_balanced_span_skips_brackets_in_strings() {
        let text = r#"[{"color": "]"}] trailing ]"#;
        assert_eq!(balanced_span(text), Some(r#"[{"color": "]"}]"#));
        assert_eq!(balanced_span("[[1, 2]"), None);
    }

    #[test]
    fn test_markdown_fenced_reply() {
        let reply = "```json\n[{\"type\": \"cone\", \"position\": [1, 0, 1], \"color\": \"#ff7f50\"}]\n```";
        let objects = extract_objects(reply).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].primitive, PrimitiveType::Cone);
    }

    #[test]
    fn test_prose_brackets_before_array() {
        let reply = "Added [two objects]:\n[{\"type\": \"box\", \"position\": [0, -1, 0]}, \
                     {\"type\": \"sphere\", \"position\": [1, 1, 1]}]";
        assert_eq!(extract_objects(reply).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_array_in_prose_is_skipped() {
        let reply = "You had [] before; now: [{\"type\": \"box\", \"position\": [0, 0, 0]}, \
                     {\"type\": \"cone\", \"position\": [2, 0, 2]}]";
        let objects = extract_objects(reply).unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[1].primitive, PrimitiveType::Cone);
    }

    #[test]
    fn test_failure_kinds() {
        assert!(matches!(extract_objects("nothing here"), Err(EnhancementError::MissingFragment)));
        assert!(matches!(extract_objects("[ ]"), Err(EnhancementError::EmptyFragment)));
        assert!(matches!(
            extract_objects(r#"[{"type": "sphere"}]"#),
            Err(EnhancementError::MalformedFragment(_))
        ));
    }
}
