use crate::models::fragment::TextFragment;

/// Splits `text` on whitespace runs, keeping every run as its own fragment.
///
/// Joining the fragment contents gives back `text` with each whitespace run
/// collapsed to one space.
pub fn tokenize(text: &str) -> Vec<TextFragment> {
    let mut fragments = vec![];
    let mut start = 0;
    let mut in_whitespace = None;

    for (offset, c) in text.char_indices() {
        let is_whitespace = c.is_whitespace();
        match in_whitespace {
            Some(previous) if previous != is_whitespace => {
                push_token(&mut fragments, &text[start..offset], previous);
                start = offset;
            }
            _ => (),
        }
        in_whitespace = Some(is_whitespace);
    }

    if let Some(is_whitespace) = in_whitespace {
        push_token(&mut fragments, &text[start..], is_whitespace);
    }

    fragments
}

fn push_token(fragments: &mut Vec<TextFragment>, token: &str, is_whitespace: bool) {
    let index = fragments.len();
    if is_whitespace {
        fragments.push(TextFragment::whitespace(index));
    } else {
        fragments.push(TextFragment::word(index, token));
    }
}
