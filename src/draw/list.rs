//! Append-only list of drawing commands for one frame.

use super::command::DrawCommand;

/// Ordered drawing instructions for a single frame.
///
/// Commands are drawn in the order they were appended (first = bottom layer).
/// Canvas operations never read or remove entries; only the owner resets the
/// list between frames with [`DrawList::clear`].
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command on top of the existing ones.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops every command, starting a new frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Extend<DrawCommand> for DrawList {
    fn extend<T: IntoIterator<Item = DrawCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
