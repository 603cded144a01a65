//! View layer.
//!
//! - `Surface`: the document the client writes into
//! - `bindings`: slot -> element id table
//! - `page`: in-memory document rendered to the terminal

mod bindings;
mod page;

pub use bindings::{Slot, ViewBindings};
pub use page::{Element, ElementKind, Page};

/// A document whose elements are addressed by id.
///
/// Every method returns `false` when no element with that id exists, in
/// which case nothing changes.
pub trait Surface {
    /// Whether the element is on screen, taking its ancestors into account.
    fn is_shown(&self, element_id: &str) -> bool;

    fn set_visible(&mut self, element_id: &str, visible: bool) -> bool;

    fn set_text(&mut self, element_id: &str, text: &str) -> bool;

    /// Set the text of the label nested in a container element.
    fn set_label(&mut self, element_id: &str, text: &str) -> bool;
}

/// Surface plus the binding table used to address it.
pub struct View<S: Surface> {
    surface: S,
    bindings: ViewBindings,
}

impl<S: Surface> View<S> {
    pub fn new(surface: S, bindings: ViewBindings) -> Self {
        Self { surface, bindings }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_shown(&self, slot: Slot) -> bool {
        self.surface.is_shown(self.bindings.element_id(slot))
    }

    pub fn show(&mut self, slot: Slot) {
        self.set_visible(slot, true);
    }

    pub fn hide(&mut self, slot: Slot) {
        self.set_visible(slot, false);
    }

    pub fn set_text(&mut self, slot: Slot, text: &str) {
        let element_id = self.bindings.element_id(slot);
        if !self.surface.set_text(element_id, text) {
            tracing::debug!("Element '{}' not found, text not set", element_id);
        }
    }

    /// Write a revealed answer into the result container named after its question.
    ///
    /// Returns `false` when the page has no container (or no nested label)
    /// for that question.
    pub fn reveal_answer(&mut self, question: &str, answer: &str) -> bool {
        self.surface.set_label(question, answer)
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        let element_id = self.bindings.element_id(slot);
        if !self.surface.set_visible(element_id, visible) {
            tracing::debug!("Element '{}' not found, visibility not changed", element_id);
        }
    }
}
