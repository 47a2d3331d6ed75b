//! Block-interaction resolution against the trigger action table.

use std::sync::Arc;

use tracing::debug;

use gate_core::{ActionTable, GateAction, TriggerConditions};

use crate::config::RuntimeConfig;
use crate::events::InteractEvent;
use crate::providers::{GateDirectory, Messenger, PermissionOracle};

/// Resolves what a player's block interaction is permitted to do to a gate
/// and performs it.
///
/// The resolver is stateless between events; the action table is built once
/// at construction and read concurrently without synchronization.
pub struct InteractionResolver {
    gates: Arc<dyn GateDirectory>,
    permissions: Arc<dyn PermissionOracle>,
    messenger: Arc<dyn Messenger>,
    actions: ActionTable,
    config: RuntimeConfig,
}

impl InteractionResolver {
    pub fn new(
        gates: Arc<dyn GateDirectory>,
        permissions: Arc<dyn PermissionOracle>,
        messenger: Arc<dyn Messenger>,
        config: RuntimeConfig,
    ) -> Self {
        Self {
            gates,
            permissions,
            messenger,
            actions: ActionTable::standard(),
            config,
        }
    }

    /// Handles one block-interaction event end to end.
    ///
    /// Failures from the gate are reported to the actor and never propagate
    /// past this handler.
    pub fn handle_interact(&self, event: &InteractEvent) {
        let Some(gate) = self.gates.gate_for_trigger(event.block) else {
            debug!(block = ?event.block, "no trigger gate at interaction block");
            return;
        };
        let player = event.player;

        // Whatever the action outcome, the interacting player's selected
        // gate becomes this one for downstream commands.
        self.gates.select_gate(player, &gate);

        let full_name = gate.full_name();
        let conditions = TriggerConditions {
            gate_open: gate.is_open(),
            can_open: self.permissions.has(
                player,
                &format!("{}{}", self.config.open_permission_prefix, full_name),
            ),
            can_close: self.permissions.has(
                player,
                &format!("{}{}", self.config.close_permission_prefix, full_name),
            ),
            // the trigger lookup above succeeding is what sets this bit
            is_trigger: true,
        };

        let Some(actions) = self.actions.resolve(conditions) else {
            debug!(key = conditions.key(), gate = %full_name, "no permitted action");
            self.messenger.notify(player, "not permitted");
            return;
        };
        debug!(key = conditions.key(), ?actions, gate = %full_name, "resolved gate actions");

        for action in actions {
            match action {
                GateAction::Open => match gate.open() {
                    Ok(()) => {
                        debug!(?player, gate = %gate.name(), "opened gate");
                        self.messenger
                            .notify(player, &format!("opened gate '{}'", gate.name()));
                    }
                    Err(err) => self.messenger.warn(player, &err.to_string()),
                },
                GateAction::Close => {
                    gate.close();
                    debug!(?player, gate = %gate.name(), "closed gate");
                    self.messenger
                        .notify(player, &format!("closed gate '{}'", gate.name()));
                }
            }
        }
    }
}
