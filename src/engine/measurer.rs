use log::trace;

use crate::{layout::provider::MeasurementProvider, models::fragment::TextFragment};

/// Attaches every fragment to the provider, in order, and caches its width.
///
/// Fragments stay attached so the layout reflects the wrapping they cause.
pub fn measure_fragments<P: MeasurementProvider + ?Sized>(
    provider: &mut P,
    fragments: &mut [TextFragment],
) {
    for fragment in fragments.iter_mut() {
        if fragment.is_measured() {
            continue;
        }

        let handle = provider.attach(&fragment.display_text(), fragment.style());
        let width = provider
            .placement(handle)
            .map(|placement| placement.width)
            .unwrap_or_else(|| provider.measure_detached(&fragment.display_text()));

        trace!("fragment {} '{}' is {width} wide", fragment.index, fragment.content());
        fragment.record_measurement(handle, width);
    }
}
