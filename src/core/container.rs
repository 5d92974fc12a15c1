use super::ContentBox;

/// Host-owned element a widget is drawn into.
///
/// Implementations behave like DOM handles: every method takes `&self` and
/// mutates the underlying element through the host's own interior state.
pub trait Container {
    /// Measures the current content box (border and padding excluded).
    fn measure(&self) -> ContentBox;

    /// Removes every child node. Clearing an empty container is a no-op.
    fn clear(&self);

    /// Serialized content taken before a draw, so a failed draw can put it
    /// back. `None` when the host cannot serialize its content.
    fn snapshot_content(&self) -> Option<String> {
        None
    }

    /// Replaces the current content with a [`snapshot_content`](Self::snapshot_content) result.
    fn restore_content(&self, content: &str) {
        let _ = content;
        self.clear();
    }
}
