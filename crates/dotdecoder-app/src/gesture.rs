//! Gesture state machine.
//!
//! Converts heterogeneous pointer input (mouse-drag, touch-drag, direct tap)
//! into a deterministic stream of single-bit toggles with two hard
//! guarantees:
//!
//! - At most one toggle per bit per continuous pass over that bit. A drag
//!   that leaves a bit and re-enters it toggles it again; only immediate
//!   repeats on the active bit are suppressed.
//! - Cross-backend de-duplication: after a touch-start, mouse-down commands
//!   are discarded for a fixed window so the synthetic mouse event that
//!   trailing-fires on touch devices cannot double-toggle.
//!
//! The suppression window is a heuristic debounce measured against
//! wall-clock time at event-handling time, not a device capability test.

use std::time::{Duration, Instant};

use dotdecoder_core::BitVector;

use crate::{HitTest, PointerEvent};

/// Tunable gesture behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// How long mouse-down events are ignored after a touch-start.
    ///
    /// Touch backends commonly synthesize a trailing mouse event once a
    /// touch sequence ends. The default of 600 ms is inherited tuning, not
    /// a derived constant, hence configurable.
    pub mouse_suppression_window: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { mouse_suppression_window: Duration::from_millis(600) }
    }
}

/// Per-gesture input session state.
///
/// Owns nothing beyond the current interaction: the active index, the drag
/// flag, and the mouse lockout deadline. Every interaction end
/// (up/leave/end/cancel) returns the session to its rest state.
#[derive(Debug, Clone, Copy)]
pub struct GestureController {
    config: GestureConfig,
    /// Last bit toggled in the current drag. Re-entering it is a no-op.
    active_index: Option<usize>,
    /// Whether a pointer interaction is in progress.
    drag_active: bool,
    /// Mouse events are discarded until this deadline passes.
    ignore_mouse_until: Option<Instant>,
}

impl GestureController {
    /// Create a controller with the given configuration.
    pub fn new(config: GestureConfig) -> Self {
        Self { config, active_index: None, drag_active: false, ignore_mouse_until: None }
    }

    /// Process one pointer event.
    ///
    /// Returns the index of the bit to toggle, or `None` when the event
    /// produces no toggle. `now` is the wall-clock time the event was
    /// handled; `surface` resolves touch coordinates to bit controls.
    ///
    /// Unresolvable hit-tests and out-of-range indices are silent no-ops:
    /// the gesture appears to do nothing over dead space.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        now: Instant,
        surface: &dyn HitTest,
    ) -> Option<usize> {
        match event {
            PointerEvent::MouseDown { index } => {
                if self.mouse_suppressed(now) {
                    tracing::debug!(index, "discarding mouse-down inside suppression window");
                    return None;
                }
                self.begin_drag();
                self.enter(index)
            },
            PointerEvent::MouseEnter { index } => {
                if self.drag_active {
                    self.enter(index)
                } else {
                    None
                }
            },
            PointerEvent::TouchStart { index } => {
                self.ignore_mouse_until = now.checked_add(self.config.mouse_suppression_window);
                self.begin_drag();
                self.enter(index)
            },
            PointerEvent::TouchMove { x, y } => {
                if !self.drag_active {
                    return None;
                }
                let index = surface.control_at(x, y)?;
                self.enter(index)
            },
            PointerEvent::PointerUp
            | PointerEvent::PointerLeave
            | PointerEvent::TouchEnd
            | PointerEvent::TouchCancel => {
                self.end_drag();
                None
            },
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_active
    }

    /// Return the session to its rest state, dropping the mouse lockout.
    pub fn reset(&mut self) {
        self.end_drag();
        self.ignore_mouse_until = None;
    }

    fn mouse_suppressed(&self, now: Instant) -> bool {
        self.ignore_mouse_until.is_some_and(|deadline| now < deadline)
    }

    fn begin_drag(&mut self) {
        self.drag_active = true;
        self.active_index = None;
    }

    fn end_drag(&mut self) {
        self.drag_active = false;
        self.active_index = None;
    }

    /// Drag-enter onto a bit: toggles unless it is already the active bit.
    fn enter(&mut self, index: usize) -> Option<usize> {
        if index >= BitVector::LEN {
            return None;
        }
        if self.active_index == Some(index) {
            return None;
        }
        self.active_index = Some(index);
        Some(index)
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface with no controls; mouse paths never consult it.
    struct DeadSurface;

    impl HitTest for DeadSurface {
        fn control_at(&self, _x: f64, _y: f64) -> Option<usize> {
            None
        }
    }

    /// One unit-wide control per bit index along the x axis.
    struct RowSurface;

    impl HitTest for RowSurface {
        fn control_at(&self, x: f64, y: f64) -> Option<usize> {
            if !(0.0..1.0).contains(&y) || x < 0.0 {
                return None;
            }
            let index = x as usize;
            (index < BitVector::LEN).then_some(index)
        }
    }

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn mouse_down_toggles_immediately() {
        let mut gc = GestureController::default();
        let now = Instant::now();
        assert_eq!(gc.handle(PointerEvent::MouseDown { index: 3 }, now, &DeadSurface), Some(3));
        assert!(gc.is_dragging());
    }

    #[test]
    fn mouse_enter_without_drag_is_noop() {
        let mut gc = GestureController::default();
        let now = Instant::now();
        assert_eq!(gc.handle(PointerEvent::MouseEnter { index: 3 }, now, &DeadSurface), None);
    }

    #[test]
    fn drag_reentry_toggles_again() {
        let mut gc = GestureController::default();
        let now = Instant::now();
        let surface = DeadSurface;

        assert_eq!(gc.handle(PointerEvent::MouseDown { index: 2 }, now, &surface), Some(2));
        assert_eq!(gc.handle(PointerEvent::MouseEnter { index: 3 }, now, &surface), Some(3));
        assert_eq!(gc.handle(PointerEvent::MouseEnter { index: 4 }, now, &surface), Some(4));
        // Back onto 3: toggles again because we left it in between.
        assert_eq!(gc.handle(PointerEvent::MouseEnter { index: 3 }, now, &surface), Some(3));
        // Still on 3: suppressed.
        assert_eq!(gc.handle(PointerEvent::MouseEnter { index: 3 }, now, &surface), None);
    }

    #[test]
    fn touch_start_locks_out_mouse() {
        let mut gc = GestureController::default();
        let base = Instant::now();
        let surface = DeadSurface;

        assert_eq!(gc.handle(PointerEvent::TouchStart { index: 5 }, base, &surface), Some(5));
        assert_eq!(gc.handle(PointerEvent::TouchEnd, base, &surface), None);

        // Synthetic mouse-down 100 ms later: discarded, same or different bit.
        assert_eq!(
            gc.handle(PointerEvent::MouseDown { index: 5 }, at(base, 100), &surface),
            None
        );
        assert_eq!(
            gc.handle(PointerEvent::MouseDown { index: 6 }, at(base, 599), &surface),
            None
        );

        // Window expired: a real mouse interaction works again.
        assert_eq!(
            gc.handle(PointerEvent::MouseDown { index: 6 }, at(base, 600), &surface),
            Some(6)
        );
    }

    #[test]
    fn suppression_window_is_configurable() {
        let config = GestureConfig { mouse_suppression_window: Duration::from_millis(50) };
        let mut gc = GestureController::new(config);
        let base = Instant::now();

        let _ = gc.handle(PointerEvent::TouchStart { index: 0 }, base, &DeadSurface);
        let _ = gc.handle(PointerEvent::TouchEnd, base, &DeadSurface);
        assert_eq!(
            gc.handle(PointerEvent::MouseDown { index: 1 }, at(base, 60), &DeadSurface),
            Some(1)
        );
    }

    #[test]
    fn touch_move_hit_tests_every_event() {
        let mut gc = GestureController::default();
        let now = Instant::now();
        let surface = RowSurface;

        assert_eq!(gc.handle(PointerEvent::TouchStart { index: 0 }, now, &surface), Some(0));
        // Finger slides across cells 1 and 2.
        assert_eq!(gc.handle(PointerEvent::TouchMove { x: 1.5, y: 0.5 }, now, &surface), Some(1));
        assert_eq!(gc.handle(PointerEvent::TouchMove { x: 1.7, y: 0.5 }, now, &surface), None);
        assert_eq!(gc.handle(PointerEvent::TouchMove { x: 2.2, y: 0.5 }, now, &surface), Some(2));
        // Off the row: dead space.
        assert_eq!(gc.handle(PointerEvent::TouchMove { x: 2.2, y: 3.0 }, now, &surface), None);
    }

    #[test]
    fn touch_move_without_drag_is_noop() {
        let mut gc = GestureController::default();
        let now = Instant::now();
        assert_eq!(gc.handle(PointerEvent::TouchMove { x: 0.5, y: 0.5 }, now, &RowSurface), None);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut gc = GestureController::default();
        let now = Instant::now();
        assert_eq!(gc.handle(PointerEvent::MouseDown { index: 12 }, now, &DeadSurface), None);
        // The drag itself still started; the next valid enter toggles.
        assert_eq!(gc.handle(PointerEvent::MouseEnter { index: 11 }, now, &DeadSurface), Some(11));
    }

    #[test]
    fn every_terminal_event_clears_drag() {
        for terminal in [
            PointerEvent::PointerUp,
            PointerEvent::PointerLeave,
            PointerEvent::TouchEnd,
            PointerEvent::TouchCancel,
        ] {
            let mut gc = GestureController::default();
            let now = Instant::now();
            let _ = gc.handle(PointerEvent::MouseDown { index: 1 }, now, &DeadSurface);
            assert!(gc.is_dragging());
            assert_eq!(gc.handle(terminal, now, &DeadSurface), None);
            assert!(!gc.is_dragging());
            // Next interaction starts clean: same bit toggles again.
            assert_eq!(
                gc.handle(PointerEvent::MouseDown { index: 1 }, now, &DeadSurface),
                Some(1)
            );
        }
    }

    #[test]
    fn new_drag_forgets_previous_active_index() {
        let mut gc = GestureController::default();
        let now = Instant::now();
        let _ = gc.handle(PointerEvent::MouseDown { index: 4 }, now, &DeadSurface);
        let _ = gc.handle(PointerEvent::PointerUp, now, &DeadSurface);
        // Tapping the same bit again is a fresh interaction.
        assert_eq!(gc.handle(PointerEvent::MouseDown { index: 4 }, now, &DeadSurface), Some(4));
    }
}
