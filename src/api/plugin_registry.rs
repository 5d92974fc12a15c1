use crate::core::Container;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::extensions::MountPlugin;

use super::MountLifecycleManager;

impl<C: Container + 'static> MountLifecycleManager<C> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn MountPlugin>) -> ShowcaseResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ShowcaseError::InvalidConfig(
                "plugin id must not be empty".to_owned(),
            ));
        }
        let mut core = self.core.borrow_mut();
        if core.plugins.iter().any(|entry| entry.id() == plugin_id) {
            return Err(ShowcaseError::InvalidConfig(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        core.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let mut core = self.core.borrow_mut();
        let position = core
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id);
        match position {
            Some(position) => {
                core.plugins.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.borrow().plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core
            .borrow()
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }
}
