use super::{
    ClaudeSlashCommandConfigurator, GeminiSlashCommandConfigurator, QwenSlashCommandConfigurator,
    SlashCommandConfigurator,
};
use crate::error::{OpenSpecError, Result};

/// Every slash command configurator known to openspec, in display order.
pub struct SlashCommandRegistry {
    configurators: Vec<Box<dyn SlashCommandConfigurator>>,
}

impl Default for SlashCommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SlashCommandRegistry {
    pub fn new() -> Self {
        Self {
            configurators: vec![
                Box::new(ClaudeSlashCommandConfigurator),
                Box::new(GeminiSlashCommandConfigurator),
                Box::new(QwenSlashCommandConfigurator),
            ],
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn SlashCommandConfigurator> {
        self.configurators.iter().map(|c| c.as_ref())
    }

    pub fn available(&self) -> impl Iterator<Item = &dyn SlashCommandConfigurator> {
        self.all().filter(|c| c.is_available())
    }

    pub fn get(&self, tool_id: &str) -> Option<&dyn SlashCommandConfigurator> {
        self.all().find(|c| c.tool_id() == tool_id)
    }

    pub fn tool_ids(&self) -> Vec<&'static str> {
        self.all().map(|c| c.tool_id()).collect()
    }

    /// Look up each id in order; the first unknown id is an error.
    pub fn resolve<S: AsRef<str>>(&self, tool_ids: &[S]) -> Result<Vec<&dyn SlashCommandConfigurator>> {
        tool_ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .ok_or_else(|| OpenSpecError::UnknownTool(id.to_string()))
            })
            .collect()
    }
}
