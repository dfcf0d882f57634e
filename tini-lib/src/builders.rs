use crate::{
    DEFAULT_PARAMETER_CAPACITY, DEFAULT_PARAMETER_GROWTH, DEFAULT_SECTION_CAPACITY, DEFAULT_SECTION_GROWTH, TiniError,
    models::{Document, Section},
    storage::GrowthPolicy,
};

/// Configures the storage of a [`Section`] before creating it.
#[derive(Debug, Clone)]
pub struct SectionBuilder<'name> {
    name: &'name str,
    capacity: usize,
    growth: GrowthPolicy,
}

impl<'name> SectionBuilder<'name> {
    pub fn new(name: &'name str) -> Self {
        Self { name, capacity: DEFAULT_PARAMETER_CAPACITY, growth: DEFAULT_PARAMETER_GROWTH }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    pub fn build(self) -> Result<Section, TiniError> {
        Section::with_storage(self.name, self.capacity, self.growth)
    }
}

/// Configures the storage of a [`Document`] and of every section it creates.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    section_capacity: usize,
    section_growth: GrowthPolicy,
    parameter_capacity: usize,
    parameter_growth: GrowthPolicy,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            section_capacity: DEFAULT_SECTION_CAPACITY,
            section_growth: DEFAULT_SECTION_GROWTH,
            parameter_capacity: DEFAULT_PARAMETER_CAPACITY,
            parameter_growth: DEFAULT_PARAMETER_GROWTH,
        }
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_capacity(mut self, capacity: usize) -> Self {
        self.section_capacity = capacity;
        self
    }

    pub fn section_growth(mut self, growth: GrowthPolicy) -> Self {
        self.section_growth = growth;
        self
    }

    pub fn parameter_capacity(mut self, capacity: usize) -> Self {
        self.parameter_capacity = capacity;
        self
    }

    pub fn parameter_growth(mut self, growth: GrowthPolicy) -> Self {
        self.parameter_growth = growth;
        self
    }

    pub fn build(self) -> Result<Document, TiniError> {
        Document::with_storage(self.section_capacity, self.section_growth, self.parameter_capacity, self.parameter_growth)
    }
}
