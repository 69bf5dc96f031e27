//! Surface-agnostic pointer input.
//!
//! Decouples the gesture controller from any concrete rendering surface
//! (DOM, terminal cells, test stubs) enabling deterministic simulation
//! testing of the input-fusion logic.

/// Raw pointer primitives delivered by an input backend.
///
/// Mouse and touch variants are kept distinct because touch-capable
/// backends synthesize trailing mouse events that the controller must
/// suppress; collapsing them here would lose that information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Mouse button pressed over a bit control.
    MouseDown {
        /// Index of the control under the cursor.
        index: usize,
    },
    /// Mouse cursor entered a bit control (fires per-element).
    MouseEnter {
        /// Index of the entered control.
        index: usize,
    },
    /// Touch began over a bit control.
    TouchStart {
        /// Index of the control under the touch point.
        index: usize,
    },
    /// Touch point moved. Touch-move does not fire per-element, so the
    /// controller hit-tests the coordinates on every move.
    TouchMove {
        /// Horizontal surface coordinate of the touch point.
        x: f64,
        /// Vertical surface coordinate of the touch point.
        y: f64,
    },
    /// Mouse button released.
    PointerUp,
    /// Pointer left the interaction surface.
    PointerLeave,
    /// Touch sequence ended.
    TouchEnd,
    /// Touch sequence was cancelled by the backend.
    TouchCancel,
}

/// Resolve the bit control under a surface point.
///
/// Injected into the [`crate::GestureController`] so its fusion and
/// suppression logic is testable independent of any concrete surface.
/// Returning `None` means dead space; the controller treats it as a no-op.
pub trait HitTest {
    /// Index of the bit control at `(x, y)`, if any.
    fn control_at(&self, x: f64, y: f64) -> Option<usize>;
}
