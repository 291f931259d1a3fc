//! DOM rendering surface for the panel stack.
//!
//! The stage applies face transforms, container offsets and class toggles; it
//! decides nothing. Expected markup: a `#panels` container holding `.panel`
//! elements, each with `.face.front` and `.face.back` children (the first
//! panel's `<img>` drives responsive sizing).

use crate::constants::{FALLBACK_PANEL_PX, FLIP_PHASE_MS, SLIDE_MS};
use crate::core::{Face, PanelSize};
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PanelEls {
    root: web::Element,
    front: web::HtmlElement,
    back: web::HtmlElement,
}

pub struct Stage {
    container: web::HtmlElement,
    panels: Vec<PanelEls>,
    panel_size: Cell<PanelSize>,
}

impl Stage {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id("panels")
            .ok_or_else(|| anyhow::anyhow!("missing #panels"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let list = document
            .query_selector_all(".panel")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let mut panels = Vec::new();
        for i in 0..list.length() {
            let Some(node) = list.item(i) else { continue };
            let root: web::Element = node
                .dyn_into()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            let front = face_el(&root, ".face.front")?;
            let back = face_el(&root, ".face.back")?;
            panels.push(PanelEls { root, front, back });
        }
        if panels.is_empty() {
            anyhow::bail!("no .panel elements found");
        }
        Ok(Self {
            container,
            panels,
            panel_size: Cell::new(PanelSize {
                width: FALLBACK_PANEL_PX,
                height: FALLBACK_PANEL_PX,
            }),
        })
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panel_size(&self) -> PanelSize {
        self.panel_size.get()
    }

    /// The first panel's image, which drives responsive sizing.
    pub fn first_image(&self) -> Option<web::HtmlImageElement> {
        self.panels
            .first()?
            .root
            .query_selector("img")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()
    }

    /// Store the computed panel size and publish it to CSS.
    pub fn set_panel_size(&self, size: PanelSize) {
        self.panel_size.set(size);
        let style = self.container.style();
        _ = style.set_property("--panel-width", &format!("{}px", size.width));
        _ = style.set_property("--panel-height", &format!("{}px", size.height));
    }

    /// Show one face of a panel fully: class toggle plus both face transforms.
    pub fn set_face(&self, index: usize, face: Face) {
        let Some(p) = self.panels.get(index) else {
            return;
        };
        let back = face == Face::Back;
        _ = p.root.class_list().toggle_with_force("showing-back", back);
        set_scale_x(&p.front, if back { 0.0 } else { 1.0 });
        set_scale_x(&p.back, if back { 1.0 } else { 0.0 });
    }

    /// Snap a face into view with no animation. Face transitions are restored
    /// on the next frame so later flips animate normally.
    pub fn snap_face(&self, index: usize, face: Face) {
        let Some(p) = self.panels.get(index) else {
            return;
        };
        _ = p.front.style().set_property("transition", "none");
        _ = p.back.style().set_property("transition", "none");
        self.set_face(index, face);
        let front = p.front.clone();
        let back = p.back.clone();
        let restore = Closure::wrap(Box::new(move || {
            _ = front.style().set_property("transition", &flip_transition());
            _ = back.style().set_property("transition", &flip_transition());
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(restore.as_ref().unchecked_ref());
        }
        restore.forget();
    }

    /// Arm both faces of a panel with the flip transition timing.
    pub fn arm_flip(&self, index: usize) {
        let Some(p) = self.panels.get(index) else {
            return;
        };
        _ = p.front.style().set_property("transition", &flip_transition());
        _ = p.back.style().set_property("transition", &flip_transition());
    }

    /// Scale one face along X, keeping it centered.
    pub fn set_face_scale(&self, index: usize, face: Face, scale: f64) {
        let Some(p) = self.panels.get(index) else {
            return;
        };
        let el = match face {
            Face::Front => &p.front,
            Face::Back => &p.back,
        };
        set_scale_x(el, scale);
    }

    /// Toggle which face stacks on top while a flip is in progress.
    pub fn set_active_face(&self, index: usize, face: Face) {
        let Some(p) = self.panels.get(index) else {
            return;
        };
        _ = p
            .root
            .class_list()
            .toggle_with_force("showing-back", face == Face::Back);
    }

    /// Animate the container offset to the given panel index.
    pub fn slide_to(&self, index: usize) {
        let style = self.container.style();
        _ = style.set_property("transition", &format!("transform {}ms ease", SLIDE_MS));
        _ = style.set_property("transform", &self.offset_transform(index));
    }

    /// Reposition the container instantly (startup and resize).
    pub fn jump_to(&self, index: usize) {
        let style = self.container.style();
        _ = style.set_property("transition", "none");
        _ = style.set_property("transform", &self.offset_transform(index));
    }

    fn offset_transform(&self, index: usize) -> String {
        let offset = index as u32 * self.panel_size.get().height;
        format!("translateY(-{}px)", offset)
    }
}

fn face_el(panel: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    panel
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("panel missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn set_scale_x(el: &web::HtmlElement, scale: f64) {
    _ = el
        .style()
        .set_property("transform", &format!("translateX(-50%) scaleX({})", scale));
}

fn flip_transition() -> String {
    format!("transform {}ms linear", FLIP_PHASE_MS)
}
