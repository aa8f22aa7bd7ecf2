//! Manual ordering of display-order lists.
//!
//! Planning is pure: [`plan_move`] turns a move request into the order
//! assignments to persist, or `None` when the move is out of range. The
//! [`ReorderGate`] serializes moves per list so a second click never plans
//! against values the first move is about to change.

mod gate;
mod plan;

pub use gate::{BusyPolicy, ReorderGate};
pub use plan::{
    move_affordance, plan_move, plan_move_with, Direction, MoveAffordance, OrderAssignment,
    ReorderPlan, ReorderStrategy, SwapPersistence,
};

use crate::model::Resource;

/// An entity presented in a manually sorted list.
pub trait Orderable: Resource {
    /// How a move is written back for this entity.
    const STRATEGY: ReorderStrategy;

    fn display_order(&self) -> u32;
}

#[cfg(test)]
#[path = "../reorder_tests.rs"]
mod reorder_tests;
