//! Auto-inserted spacing between two CJK characters.

use crate::props::Child;

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Whether `text` is exactly two CJK ideographs.
pub fn is_two_cjk_chars(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if is_cjk(a) && is_cjk(b)
    )
}

/// Merge adjacent text children and, if `need_inserted`, space out
/// two-character CJK text.
pub fn space_children(children: &[Child], need_inserted: bool) -> Vec<Child> {
    let mut merged: Vec<Child> = Vec::with_capacity(children.len());
    for child in children {
        match (merged.last_mut(), child) {
            (Some(Child::Text(last)), Child::Text(text)) => last.push_str(text),
            _ => merged.push(child.clone()),
        }
    }

    if !need_inserted {
        return merged;
    }
    merged
        .into_iter()
        .map(|child| match child {
            Child::Text(text) if is_two_cjk_chars(&text) => {
                let spaced: Vec<String> = text.chars().map(String::from).collect();
                Child::Text(spaced.join(" "))
            }
            other => other,
        })
        .collect()
}
