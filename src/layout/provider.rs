//! Seams between the clamp engine and whatever renders the text.
//!
//! The engine never computes glyph metrics itself. It attaches fragments to a
//! live inline flow and reads back where the flow put them.

/// Opaque id of a fragment attached to a [`MeasurementProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentHandle(pub usize);

/// How an attached fragment may be broken by the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentStyle {
    /// Rendered as one unit, never wrapped inside (words).
    NoWrap,
    /// Regular inline text (collapsed whitespace).
    Normal,
}

/// Bounding box of an attached fragment after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the line box, counted from the top of the element.
    pub line: usize,
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

/// Live layout queries against the element being clamped.
pub trait MeasurementProvider {
    /// Width of the content box the fragments flow into.
    fn container_width(&self) -> f32;

    /// Removes every attached fragment.
    fn clear(&mut self);

    /// Appends `text` after the previously attached fragments.
    fn attach(&mut self, text: &str, style: FragmentStyle) -> FragmentHandle;

    /// Where the flow currently places an attached fragment.
    fn placement(&self, handle: FragmentHandle) -> Option<Placement>;

    /// Width of `text` rendered in a temporary span outside of the flow.
    fn measure_detached(&mut self, text: &str) -> f32;
}

/// The element a clamp binding is attached to.
pub trait HostElement: MeasurementProvider {
    fn text_content(&self) -> String;

    /// Replaces the content with plain text, dropping attached fragments.
    fn set_text_content(&mut self, text: &str);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Layout styles required for overflow to be computed properly
    /// (break long words, hide overflow).
    fn apply_clamp_styles(&mut self);
}
