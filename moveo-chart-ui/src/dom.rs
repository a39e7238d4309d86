//! Viewport geometry of chart containers.
//!
//! Bar tooltips are anchored at the pointer relative to their container, so
//! the container's bounding box is read from the DOM on every hover.

use moveo_chart::tooltip::ContainerRect;

/// Bounding box of the element with the given DOM id.
///
/// Returns `None` outside a browser or before the element is mounted; the
/// hover is then ignored and no tooltip is shown.
pub fn container_rect(id: &str) -> Option<ContainerRect> {
    let document = web_sys::window()?.document()?;
    let Some(element) = document.get_element_by_id(id) else {
        log::warn!("chart container '{}' is not mounted", id);
        return None;
    };
    let rect = element.get_bounding_client_rect();
    Some(ContainerRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}
