use crate::constants::{NAV_PANEL_IDS, PANEL_COLLAPSED_CLASS, PANEL_EXPANDED_CLASS};
use crate::dom::Listener;
use web_sys as web;

#[inline]
fn panel(document: &web::Document, index: usize) -> Option<web::Element> {
    document.get_element_by_id(NAV_PANEL_IDS.get(index)?)
}

/// Expand the hovered panel and collapse its sibling.
pub fn expand(document: &web::Document, index: usize) {
    for i in 0..NAV_PANEL_IDS.len() {
        if let Some(el) = panel(document, i) {
            let cl = el.class_list();
            if i == index {
                _ = cl.remove_1(PANEL_COLLAPSED_CLASS);
                _ = cl.add_1(PANEL_EXPANDED_CLASS);
            } else {
                _ = cl.remove_1(PANEL_EXPANDED_CLASS);
                _ = cl.add_1(PANEL_COLLAPSED_CLASS);
            }
        }
    }
}

pub fn restore(document: &web::Document) {
    for i in 0..NAV_PANEL_IDS.len() {
        if let Some(el) = panel(document, i) {
            _ = el
                .class_list()
                .remove_2(PANEL_EXPANDED_CLASS, PANEL_COLLAPSED_CLASS);
        }
    }
}

/// Hover wiring for the two navigation panels; missing panels are skipped.
pub fn wire_panels(document: &web::Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for i in 0..NAV_PANEL_IDS.len() {
        let el = match panel(document, i) {
            Some(el) => el,
            None => {
                log::debug!("[panels] #{} not found", NAV_PANEL_IDS[i]);
                continue;
            }
        };
        let doc_enter = document.clone();
        listeners.extend(Listener::add(el.as_ref(), "mouseenter", move |_ev| {
            expand(&doc_enter, i);
        }));
        let doc_leave = document.clone();
        listeners.extend(Listener::add(el.as_ref(), "mouseleave", move |_ev| {
            restore(&doc_leave);
        }));
    }
    listeners
}
