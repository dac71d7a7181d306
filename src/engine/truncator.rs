use log::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    layout::provider::MeasurementProvider,
    models::{
        clamp_outcome::ELLIPSIS,
        fragment::TextFragment,
        line_group::{LineGroup, LineGroups},
    },
};

/// Buffer kept free on the last line so sub-cell rounding never pushes the
/// ellipsis onto the next line.
pub const DEFAULT_SAFETY_MARGIN: f32 = 5.0;

/// Where the cut happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutPoint {
    /// There is room after the last visible line: the first word of the
    /// next line is cut.
    NextLine,
    /// The last visible line is full or runs past the container: its last
    /// word is shrunk to make room for the ellipsis, or an earlier one when
    /// the last word is too short to keep anything.
    LastLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Truncation {
    pub text: String,
    pub cut_point: CutPoint,
    /// Sequence index of the fragment that was cut.
    pub overflow_index: usize,
}

/// Computes the clamped text for a layout that either realized more than
/// `allowed_lines` lines or whose last visible line runs past the container.
/// Returns `None` when no word sits at the overflow point.
pub fn truncate<P: MeasurementProvider + ?Sized>(
    provider: &mut P,
    fragments: &[TextFragment],
    groups: &LineGroups,
    allowed_lines: usize,
    safety_margin: f32,
) -> Option<Truncation> {
    let last_index = allowed_lines.min(groups.len()).checked_sub(1)?;
    let last_line = groups.get(last_index)?;
    let last_line_width = last_line.width();
    let ellipsis_width = provider.measure_detached(ELLIPSIS);
    let container_width = provider.container_width();

    let available = container_width - (last_line_width + ellipsis_width + safety_margin);
    debug!(
        "last visible line is {last_line_width} wide, {available} left in a {container_width} container"
    );

    let next_line = groups.get(allowed_lines).filter(|_| available > 0.0);
    let (overflow, partial, cut_point) = if let Some(next_line) = next_line {
        let Some(overflow) = next_line.first_word() else {
            warn!("no word found on line {allowed_lines}, skipping truncation");
            return None;
        };
        let partial = fitting_prefix(provider, overflow.content(), available);
        (overflow, partial, CutPoint::NextLine)
    } else {
        let Some((overflow, partial)) =
            shrink_last_line(provider, last_line, container_width, ellipsis_width)
        else {
            warn!("no word found on line {last_index}, skipping truncation");
            return None;
        };
        (overflow, partial, CutPoint::LastLine)
    };

    debug!(
        "cutting '{}' to '{partial}' ({cut_point:?})",
        overflow.content()
    );

    Some(Truncation {
        text: assemble(fragments, overflow.index, &partial),
        cut_point,
        overflow_index: overflow.index,
    })
}

/// Shrinks the words of a full last line, starting from its end, until one
/// keeps at least a grapheme next to the ellipsis. Each step back frees the
/// words and whitespace dropped so far, but never more than what is left of
/// the container from the word's left edge.
fn shrink_last_line<'a, P: MeasurementProvider + ?Sized>(
    provider: &mut P,
    last_line: &'a LineGroup,
    container_width: f32,
    ellipsis_width: f32,
) -> Option<(&'a TextFragment, String)> {
    let end = last_line
        .fragments
        .iter()
        .rposition(|f| !f.is_whitespace())?;

    let mut slot: f32 = 0.0;
    let mut candidate = None;
    for fragment in last_line.fragments[..=end].iter().rev() {
        slot += fragment.measured_width();
        if fragment.is_whitespace() {
            continue;
        }

        let room = match fragment.handle().and_then(|h| provider.placement(h)) {
            Some(placement) => slot.min(container_width - placement.left),
            None => slot,
        };
        let partial = fitting_prefix(provider, fragment.content(), room - ellipsis_width);
        if !partial.is_empty() {
            return Some((fragment, partial));
        }
        candidate = Some((fragment, partial));
    }

    candidate
}

/// Longest prefix of `word` whose width stays below `budget`. The last
/// grapheme is never kept.
fn fitting_prefix<P: MeasurementProvider + ?Sized>(
    provider: &mut P,
    word: &str,
    budget: f32,
) -> String {
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    let mut width = 0.0;
    let mut prefix = String::new();

    for grapheme in graphemes.iter().take(graphemes.len().saturating_sub(1)) {
        width += provider.measure_detached(grapheme);
        if width >= budget {
            break;
        }
        prefix.push_str(grapheme);
    }

    prefix
}

/// Whole fragments before the cut, then the kept part of the cut word, then
/// the ellipsis. Separating whitespace is normalized to one space.
fn assemble(fragments: &[TextFragment], overflow_index: usize, partial: &str) -> String {
    let prefix: String = fragments
        .iter()
        .take_while(|f| f.index != overflow_index)
        .map(TextFragment::content)
        .collect();

    let mut text = prefix.trim().to_owned();
    if !partial.trim().is_empty() {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(partial);
    }
    text.push_str(ELLIPSIS);
    text
}
