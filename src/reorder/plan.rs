use serde::{Deserialize, Serialize};

use super::Orderable;

choice_enum! {
    Direction as "direction" {
        Up => "up",
        Down => "down",
    }
}

/// How a move is persisted for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderStrategy {
    /// Exchange the display orders of the moved item and its neighbour.
    PairwiseSwap,
    /// Give the moved item its neighbour's display order, leaving the
    /// neighbour untouched.
    AdoptNeighbor,
}

choice_enum! {
    /// Wire shape of a pairwise swap.
    #[derive(Default)]
    SwapPersistence as "swap_persistence" {
        /// One `PATCH /reorder` carrying both assignments.
        #[default]
        Batched => "batched",
        /// Two single-field `PATCH /{id}/display-order` calls.
        Sequential => "sequential",
    }
}

/// One `{id, display_order}` entry of a reorder request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAssignment<Id> {
    pub id: Id,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderPlan<Id> {
    Swap {
        target: OrderAssignment<Id>,
        partner: OrderAssignment<Id>,
    },
    Adopt {
        target: OrderAssignment<Id>,
    },
}

impl<Id: Clone> ReorderPlan<Id> {
    #[must_use]
    pub fn target(&self) -> &OrderAssignment<Id> {
        match self {
            Self::Swap { target, .. } | Self::Adopt { target } => target,
        }
    }

    /// Every assignment to persist, target first.
    #[must_use]
    pub fn assignments(&self) -> Vec<OrderAssignment<Id>> {
        match self {
            Self::Swap { target, partner } => vec![target.clone(), partner.clone()],
            Self::Adopt { target } => vec![target.clone()],
        }
    }
}

/// Plan a move with the entity's own strategy.
#[must_use]
pub fn plan_move<E: Orderable>(items: &[E], id: &E::Id, direction: Direction) -> Option<ReorderPlan<E::Id>> {
    plan_move_with(items, id, direction, E::STRATEGY)
}

/// Plan a move of `id` one step in `direction`.
///
/// Returns `None` when `id` is not in the list or is already first (moving
/// up) or last (moving down). Items are ranked by display order, ties keeping
/// their list position.
#[must_use]
pub fn plan_move_with<E: Orderable>(
    items: &[E],
    id: &E::Id,
    direction: Direction,
    strategy: ReorderStrategy,
) -> Option<ReorderPlan<E::Id>> {
    let sorted = sorted_view(items);
    let index = sorted.iter().position(|item| item.id() == id)?;
    let partner_index = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index.checked_add(1).filter(|next| *next < sorted.len())?,
    };
    let target = sorted.get(index)?;
    let partner = sorted.get(partner_index)?;

    let moved = OrderAssignment {
        id: target.id().clone(),
        display_order: partner.display_order(),
    };
    Some(match strategy {
        ReorderStrategy::PairwiseSwap => ReorderPlan::Swap {
            target: moved,
            partner: OrderAssignment {
                id: partner.id().clone(),
                display_order: target.display_order(),
            },
        },
        ReorderStrategy::AdoptNeighbor => ReorderPlan::Adopt { target: moved },
    })
}

/// Which move buttons are enabled for a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAffordance {
    pub up: bool,
    pub down: bool,
}

/// Enable moves by position in the sorted list, so gapped orders such as
/// `[1, 3]` still allow every in-range move.
#[must_use]
pub fn move_affordance<E: Orderable>(items: &[E], id: &E::Id) -> MoveAffordance {
    let sorted = sorted_view(items);
    match sorted.iter().position(|item| item.id() == id) {
        Some(index) => MoveAffordance {
            up: index > 0,
            down: index + 1 < sorted.len(),
        },
        None => MoveAffordance::default(),
    }
}

fn sorted_view<E: Orderable>(items: &[E]) -> Vec<&E> {
    let mut sorted: Vec<&E> = items.iter().collect();
    sorted.sort_by_key(|item| item.display_order());
    sorted
}
