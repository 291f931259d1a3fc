// Responsive panel sizing math, kept free of platform types.

use crate::constants::VIEWPORT_FIT_RATIO;

/// Displayed panel dimensions in whole pixels. Fractional sizes leave visible
/// seams between stacked panels, so both axes are rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSize {
    pub width: u32,
    pub height: u32,
}

/// Largest size with the image's aspect ratio that fits the viewport fit box
/// on both axes. Returns `None` for degenerate inputs (image not loaded yet,
/// zero-sized viewport), in which case prior sizing stays in effect.
pub fn fit_panel(
    natural_w: f64,
    natural_h: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> Option<PanelSize> {
    if natural_w <= 0.0 || natural_h <= 0.0 || viewport_w <= 0.0 || viewport_h <= 0.0 {
        return None;
    }
    let max_w = viewport_w * VIEWPORT_FIT_RATIO;
    let max_h = viewport_h * VIEWPORT_FIT_RATIO;
    let scale = (max_w / natural_w).min(max_h / natural_h);
    Some(PanelSize {
        width: (natural_w * scale).round().max(1.0) as u32,
        height: (natural_h * scale).round().max(1.0) as u32,
    })
}
