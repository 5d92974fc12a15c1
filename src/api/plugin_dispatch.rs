use crate::extensions::{MountContext, MountEvent};

use super::mount_core::MountCore;

impl<C> MountCore<C> {
    pub(super) fn plugin_context(&self) -> MountContext {
        let snapshot = self.snapshot();
        MountContext {
            phase: snapshot.phase,
            kind: snapshot.kind,
            dimensions: snapshot.dimensions,
            subscription: snapshot.subscription,
        }
    }

    pub(super) fn emit_event(&mut self, event: MountEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
