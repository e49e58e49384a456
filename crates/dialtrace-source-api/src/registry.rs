use crate::source::Source;

/// Source registry - holds the registered sources in pipeline order
pub struct SourceRegistry {
    sources: Vec<Box<dyn Source>>,
}

impl SourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Register a source. A source whose type is already registered replaces
    /// the earlier one in place.
    pub fn register(&mut self, source: Box<dyn Source>) {
        match self
            .sources
            .iter()
            .position(|s| s.source_type() == source.source_type())
        {
            Some(index) => self.sources[index] = source,
            None => self.sources.push(source),
        }
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Source> {
        self.sources.iter().map(|s| s.as_ref())
    }

    /// Get all registered source types, in registration order
    pub fn source_types(&self) -> Vec<String> {
        self.iter().map(|s| s.source_type().to_string()).collect()
    }

    /// Get count of registered sources
    pub fn count(&self) -> usize {
        self.sources.len()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
