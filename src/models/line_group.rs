use super::fragment::TextFragment;

/// Fragments the layout put on the same line, in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    pub line: usize,
    pub fragments: Vec<TextFragment>,
}

impl LineGroup {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fragments: vec![],
        }
    }

    pub fn width(&self) -> f32 {
        self.fragments.iter().map(TextFragment::measured_width).sum()
    }

    /// Width up to the end of the last word. Trailing whitespace hangs past
    /// the edge and does not count.
    pub fn content_width(&self) -> f32 {
        let Some(end) = self.fragments.iter().rposition(|f| !f.is_whitespace()) else {
            return 0.0;
        };
        self.fragments[..=end]
            .iter()
            .map(TextFragment::measured_width)
            .sum()
    }

    pub fn first_word(&self) -> Option<&TextFragment> {
        self.fragments.iter().find(|f| !f.is_whitespace())
    }

    pub fn last_word(&self) -> Option<&TextFragment> {
        self.fragments.iter().rev().find(|f| !f.is_whitespace())
    }
}

/// Line buckets ordered from the top of the element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGroups {
    groups: Vec<LineGroup>,
}

impl LineGroups {
    /// Adds `fragment` to the bucket of `line`, keeping buckets sorted by line.
    pub fn push(&mut self, line: usize, fragment: TextFragment) {
        let position = match self.groups.binary_search_by_key(&line, |g| g.line) {
            Ok(position) => position,
            Err(position) => {
                self.groups.insert(position, LineGroup::new(line));
                position
            }
        };
        self.groups[position].fragments.push(fragment);
    }

    /// Number of realized lines.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The `n`-th line by order of appearance.
    pub fn get(&self, n: usize) -> Option<&LineGroup> {
        self.groups.get(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineGroup> {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::provider::FragmentHandle;

    #[test]
    fn buckets_stay_ordered_by_line() {
        let mut groups = LineGroups::default();
        groups.push(2, TextFragment::word(2, "c"));
        groups.push(0, TextFragment::word(0, "a"));
        groups.push(1, TextFragment::word(1, "b"));
        groups.push(0, TextFragment::whitespace(3));

        let lines: Vec<usize> = groups.iter().map(|g| g.line).collect();
        assert_eq!(lines, vec![0, 1, 2]);
        assert_eq!(groups.get(0).unwrap().fragments.len(), 2);
    }

    #[test]
    fn word_lookup_skips_whitespace() {
        let mut group = LineGroup::new(0);
        group.fragments.push(TextFragment::whitespace(0));
        group.fragments.push(TextFragment::word(1, "first"));
        group.fragments.push(TextFragment::word(2, "last"));
        group.fragments.push(TextFragment::whitespace(3));

        assert_eq!(group.first_word().map(|f| f.content()), Some("first"));
        assert_eq!(group.last_word().map(|f| f.content()), Some("last"));
    }

    #[test]
    fn content_width_ignores_trailing_whitespace() {
        let mut group = LineGroup::new(0);
        let layout = [(0, "ab", 2.0), (1, " ", 1.0), (2, "cde", 3.0), (3, " ", 1.0)];
        for (index, content, width) in layout {
            let mut fragment = if content == " " {
                TextFragment::whitespace(index)
            } else {
                TextFragment::word(index, content)
            };
            fragment.record_measurement(FragmentHandle(index), width);
            group.fragments.push(fragment);
        }

        assert_eq!(group.width(), 7.0);
        assert_eq!(group.content_width(), 6.0);
        assert_eq!(LineGroup::new(1).content_width(), 0.0);
    }
}
