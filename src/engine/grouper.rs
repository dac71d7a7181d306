use crate::{
    layout::provider::MeasurementProvider,
    models::{fragment::TextFragment, line_group::LineGroups},
};

use super::error::ClampError;

/// Buckets measured fragments by the line the layout put them on.
///
/// Must run after every fragment is attached, since later fragments can push
/// the line breaks around.
pub fn group_by_line<P: MeasurementProvider + ?Sized>(
    provider: &P,
    fragments: &[TextFragment],
) -> Result<LineGroups, ClampError> {
    let mut groups = LineGroups::default();

    for fragment in fragments {
        let placement = fragment
            .handle()
            .and_then(|handle| provider.placement(handle))
            .ok_or(ClampError::DetachedFragment(fragment.index))?;
        groups.push(placement.line, fragment.clone());
    }

    Ok(groups)
}
