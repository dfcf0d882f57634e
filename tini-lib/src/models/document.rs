use std::{
    fmt::Display,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    DEFAULT_PARAMETER_CAPACITY, DEFAULT_PARAMETER_GROWTH, DEFAULT_SECTION_CAPACITY, DEFAULT_SECTION_GROWTH, TiniError,
    models::section::Section,
    parser,
    storage::{GrowableStorage, GrowthPolicy},
};

/// An ordered collection of uniquely named sections.
#[derive(Debug)]
pub struct Document {
    sections: GrowableStorage<Section>,
    parameter_capacity: usize,
    parameter_growth: GrowthPolicy,
}

impl Document {
    pub fn new() -> Result<Self, TiniError> {
        Self::with_storage(
            DEFAULT_SECTION_CAPACITY,
            DEFAULT_SECTION_GROWTH,
            DEFAULT_PARAMETER_CAPACITY,
            DEFAULT_PARAMETER_GROWTH,
        )
    }

    pub(crate) fn with_storage(
        section_capacity: usize,
        section_growth: GrowthPolicy,
        parameter_capacity: usize,
        parameter_growth: GrowthPolicy,
    ) -> Result<Self, TiniError> {
        Ok(Self {
            sections: GrowableStorage::with_capacity(section_capacity, section_growth)?,
            parameter_capacity,
            parameter_growth,
        })
    }

    /// Reads and parses the file at `path`. Duplicate keys are resolved in favour of the last one.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TiniError> {
        let path = path.as_ref();
        log::debug!("Loading {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Parses INI text into a new document. Nothing is returned unless every line was accepted.
    pub fn load_from_str(contents: &str) -> Result<Self, TiniError> {
        let mut document = Self::new()?;
        parser::parse(contents, |section, key, value| document.add_parameter(section, key, value, true))?;
        Ok(document)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TiniError> {
        let path = path.as_ref();
        log::debug!("Saving {} sections to {}", self.section_count(), path.display());
        let mut writer = BufWriter::new(File::create(path)?);
        self.dump(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes every section followed by a blank line. Output already written is not rolled back on failure.
    ///
    /// The text format has no escaping, so some names written here do not read back unchanged:
    /// - section names containing `]` are cut at the first `]`;
    /// - keys containing `=` or `:` are split at the first of them, the rest becoming part of the value;
    /// - keys starting with `;` or `#` are read back as comments, and keys starting with `[` as headers;
    /// - leading and trailing whitespace around keys and values is trimmed;
    /// - values containing whitespace followed by `;` are cut there;
    /// - anything containing a line break is split across lines, which can make the output unreadable;
    /// - sections without parameters are not recreated.
    pub fn dump<W: Write>(&self, writer: &mut W) -> Result<(), TiniError> {
        for section in self.sections.iter() {
            write!(writer, "{section}")?;
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Sets `key=value` in `section`, creating the section at the end of the document if needed.
    ///
    /// A section created here is only attached once the parameter is in it, so a failed call never
    /// leaves an empty section behind.
    pub fn add_parameter(&mut self, section: &str, key: &str, value: &str, replace: bool) -> Result<(), TiniError> {
        if let Some(existing) = self.find_section_mut(section) {
            return existing.add_parameter(key, value, replace);
        }

        let mut new_section = Section::with_storage(section, self.parameter_capacity, self.parameter_growth)?;
        new_section.add_parameter(key, value, replace)?;
        self.sections.try_push(new_section)?;
        log::debug!("Created section [{section}]");
        Ok(())
    }

    /// Attaches a separately built section at the end of the document.
    pub fn insert_section(&mut self, section: Section) -> Result<(), TiniError> {
        if self.find_section(section.name()).is_some() {
            return Err(TiniError::SectionAlreadyExists(section.name().to_owned()));
        }
        log::debug!("Inserting section [{}]", section.name());
        self.sections.try_push(section)
    }

    pub fn remove_section(&mut self, name: &str) -> Result<(), TiniError> {
        let index = self.section_index(name).ok_or_else(|| TiniError::SectionNotFound(name.to_owned()))?;
        self.sections.remove(index);
        log::debug!("Removed section [{name}]");
        Ok(())
    }

    pub fn remove_parameter(&mut self, section: &str, key: &str) -> Result<(), TiniError> {
        self.find_section_mut(section)
            .ok_or_else(|| TiniError::SectionNotFound(section.to_owned()))?
            .remove_parameter(key)
    }

    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.section_index(name).and_then(|index| self.sections.get(index))
    }

    pub fn find_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.section_index(name).and_then(|index| self.sections.get_mut(index))
    }

    /// Looks up `key` in `section`, falling back to `default` when either is missing.
    pub fn find_parameter<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.find_section(section)
            .map_or(default, |found| found.find_parameter_or(key, default))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections the document can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.sections.capacity()
    }

    pub fn sections(&self) -> &[Section] {
        self.sections.as_slice()
    }

    fn section_index(&self, name: &str) -> Option<usize> {
        self.sections.position(|section| section.name() == name)
    }
}

impl FromStr for Document {
    type Err = TiniError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        Self::load_from_str(contents)
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for section in self.sections.iter() {
            writeln!(f, "{section}")?;
        }
        Ok(())
    }
}
