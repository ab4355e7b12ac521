/// Distance from the viewport bottom an element's top edge must cross.
pub const REVEAL_OFFSET_PX: f64 = 80.0;

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET_PX
}

/// One-way latch: once visible, later measurements never hide the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Returns `true` only on the measurement that flips the latch.
    pub fn observe(&mut self, element_top: f64, viewport_height: f64) -> bool {
        if self.visible || !should_reveal(element_top, viewport_height) {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn class(self) -> &'static str {
        if self.visible { "reveal visible" } else { "reveal" }
    }
}
