//! Drag and keyboard reorder gestures.
//!
//! [`ReorderEngine`] tracks one gesture at a time and, when the gesture ends
//! on a target, yields a [`DragEnd`] describing it. The gesture itself never
//! touches the plan; [`apply_drag_end`] turns a finished gesture into a single
//! step reorder, regardless of whether a pointer or the keyboard produced it.
//!
//! ```text
//!            pointer_down                 moved > 5.0
//!   Idle ───────────────────▶ Pending ───────────────────▶ Dragging
//!    ▲  ◀──── pointer_up (click) ──┘                         │
//!    │                                                       │
//!    └──────────── pointer_up / Drop / Cancel ◀──────────────┘
//!   Idle ───────────── key PickUp ──────────────────────────▶ Dragging
//! ```
//!
//! Only step ids are reorderable. A gesture that starts on a sub-task is
//! tracked like any other but leaves the plan unchanged when applied.

use log::debug;

use crate::{models::Plan, store::reducers};

#[cfg(test)]
mod tests;

/// Pointer travel, in layout units, needed before a press becomes a drag.
pub const POINTER_ACTIVATION_DISTANCE: f64 = 5.0;

/// A pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Input device that activated a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Keyboard,
}

/// Keyboard commands understood while a sortable item has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Space/Enter on an idle item
    PickUp,
    /// Arrow up: target the previous sibling
    Up,
    /// Arrow down: target the next sibling
    Down,
    /// Space/Enter while dragging
    Drop,
    /// Escape
    Cancel,
}

/// Current gesture state.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    /// Pointer pressed on `active_id` but not moved past the threshold
    Pending { active_id: String, origin: Point },
    Dragging {
        active_id: String,
        source: DragSource,
        over_id: Option<String>,
    },
}

/// A completed gesture: the dragged id and where it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active_id: String,
    pub over_id: Option<String>,
}

/// State machine for one reorder gesture at a time.
#[derive(Debug, Clone)]
pub struct ReorderEngine {
    state: DragState,
    activation_distance: f64,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::with_activation_distance(POINTER_ACTIVATION_DISTANCE)
    }

    pub fn with_activation_distance(activation_distance: f64) -> Self {
        Self {
            state: DragState::Idle,
            activation_distance,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    fn keyboard_drag(&self) -> bool {
        matches!(
            self.state,
            DragState::Dragging {
                source: DragSource::Keyboard,
                ..
            }
        )
    }

    /// Presses the pointer on `active_id`. Ignored unless idle.
    pub fn pointer_down(&mut self, active_id: &str, at: Point) {
        if self.state == DragState::Idle {
            self.state = DragState::Pending {
                active_id: active_id.to_string(),
                origin: at,
            };
        }
    }

    /// Moves the pointer over `over_id`, activating the drag once the travel
    /// exceeds the activation distance.
    pub fn pointer_move(&mut self, at: Point, over_id: Option<&str>) {
        match &mut self.state {
            DragState::Pending { active_id, origin } => {
                if origin.distance_to(at) <= self.activation_distance {
                    return;
                }
                debug!("Drag activated for '{active_id}'");
                let active_id = std::mem::take(active_id);
                self.state = DragState::Dragging {
                    active_id,
                    source: DragSource::Pointer,
                    over_id: over_id.map(str::to_string),
                };
            }
            DragState::Dragging {
                source: DragSource::Pointer,
                over_id: current,
                ..
            } => *current = over_id.map(str::to_string),
            _ => {}
        }
    }

    /// Releases the pointer. A release before activation is a click and
    /// yields nothing; a keyboard drag is not ended by the pointer.
    pub fn pointer_up(&mut self) -> Option<DragEnd> {
        if self.keyboard_drag() {
            return None;
        }
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging {
                active_id, over_id, ..
            } => Some(DragEnd { active_id, over_id }),
            _ => None,
        }
    }

    /// Handles a key pressed while `focused_id` has focus.
    ///
    /// Arrow keys move the drop target among the siblings of the current
    /// target in `plan`: steps for a step, the owning step's sub-tasks for a
    /// sub-task.
    pub fn key(&mut self, focused_id: &str, command: KeyCommand, plan: &Plan) -> Option<DragEnd> {
        match command {
            KeyCommand::PickUp if self.state == DragState::Idle => {
                debug!("Keyboard drag picked up '{focused_id}'");
                self.state = DragState::Dragging {
                    active_id: focused_id.to_string(),
                    source: DragSource::Keyboard,
                    over_id: Some(focused_id.to_string()),
                };
                None
            }
            KeyCommand::Up | KeyCommand::Down if self.keyboard_drag() => {
                if let DragState::Dragging { over_id, .. } = &mut self.state {
                    let next = over_id
                        .as_deref()
                        .and_then(|current| sibling(plan, current, command == KeyCommand::Down));
                    if next.is_some() {
                        *over_id = next;
                    }
                }
                None
            }
            KeyCommand::Drop if self.keyboard_drag() => {
                match std::mem::replace(&mut self.state, DragState::Idle) {
                    DragState::Dragging {
                        active_id, over_id, ..
                    } => Some(DragEnd { active_id, over_id }),
                    _ => None,
                }
            }
            KeyCommand::Cancel => {
                self.cancel();
                None
            }
            _ => None,
        }
    }

    /// Abandons any gesture in progress.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a finished gesture to `plan`, returning the resulting plan.
///
/// No target, a drop on itself, or a dragged id that is not a step leave the
/// plan unchanged.
pub fn apply_drag_end(plan: &Plan, end: &DragEnd) -> Plan {
    let Some(over_id) = end.over_id.as_deref() else {
        return plan.clone();
    };
    if !plan.is_step(&end.active_id) {
        debug!(
            "Ignoring drop of '{}': only steps are reorderable",
            end.active_id
        );
        return plan.clone();
    }
    reducers::reorder_steps(plan, &end.active_id, over_id)
}

/// Moves the element at `from` to `to` in a copy of `items`.
///
/// The element is removed first and then inserted at `to` in the shortened
/// sequence; `to` past the end appends. An out-of-range `from` returns the
/// items unchanged.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    moved
}

fn sibling(plan: &Plan, id: &str, forward: bool) -> Option<String> {
    let siblings: Vec<&str> = if plan.is_step(id) {
        plan.step_ids()
    } else {
        plan.steps
            .iter()
            .find(|step| step.sub_tasks.iter().any(|sub_task| sub_task.id == id))?
            .sub_tasks
            .iter()
            .map(|sub_task| sub_task.id.as_str())
            .collect()
    };

    let index = siblings.iter().position(|sibling| *sibling == id)?;
    let next = if forward {
        index.checked_add(1)
    } else {
        index.checked_sub(1)
    }?;
    siblings.get(next).map(|sibling| sibling.to_string())
}
