//! Single-field actions from the row menu: status, featured flag, moves.

use tracing::debug;

use super::capitalize;
use super::list::ListScreen;
use super::state::ActionOutcome;
use crate::model::{Featurable, HasStatus};
use crate::reorder::{move_affordance, plan_move, Direction, MoveAffordance, Orderable};

impl<E: HasStatus> ListScreen<E> {
    /// Send `status` whatever the current value is. Sending the same value
    /// twice is harmless.
    pub async fn set_status(&self, id: &E::Id, status: E::Status) -> ActionOutcome {
        match self.service.set_status(id, status).await {
            Ok(()) => {
                let message = format!("{} status set to {status}", capitalize(E::LABEL));
                self.after_write(message, false).await
            }
            Err(e) => self.fail(&format!("change {} status", E::LABEL), &e),
        }
    }
}

impl<E: Featurable> ListScreen<E> {
    pub async fn set_featured(&self, id: &E::Id, featured: bool) -> ActionOutcome {
        match self.service.set_featured(id, featured).await {
            Ok(()) => {
                let verb = if featured { "featured" } else { "unfeatured" };
                self.after_write(format!("{} {verb}", capitalize(E::LABEL)), false)
                    .await
            }
            Err(e) => self.fail(&format!("update {}", E::LABEL), &e),
        }
    }
}

impl<E: Orderable> ListScreen<E> {
    /// Move a row one step.
    ///
    /// Runs under the list's reorder gate and plans against the rows as they
    /// are once the gate is held, so a queued move sees the previous move's
    /// refetch. The gate is released only after this move's own refetch.
    pub async fn move_row(&self, id: &E::Id, direction: Direction) -> ActionOutcome {
        let Some(_slot) = self.gate.enter(E::PATH).await else {
            return ActionOutcome::Busy;
        };
        let rows = self.rows().await;
        let Some(plan) = plan_move(&rows, id, direction) else {
            debug!(entity = E::PATH, %id, %direction, "Move out of range, nothing to do");
            return ActionOutcome::NoOp;
        };
        match self.service.persist(&plan, self.persistence).await {
            Ok(()) => {
                let message = format!("{} moved {direction}", capitalize(E::LABEL));
                self.after_write(message, false).await
            }
            Err(e) => self.fail(&format!("reorder {}", E::LABEL), &e),
        }
    }

    pub async fn move_affordance(&self, id: &E::Id) -> MoveAffordance {
        move_affordance(&self.state.lock().await.rows, id)
    }
}
