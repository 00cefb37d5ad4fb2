//! Configuration document model
//!
//! A `Cruise` is the parsed form of one fetched `config.xml`. It owns its
//! pipeline groups, and each group owns its pipelines. Nothing here is
//! unique or keyed: groups may share names and pipelines may repeat.

/// Root of the configuration document (`<cruise>`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cruise {
    /// Pipeline groups in document order
    pub pipeline_groups: Vec<PipelineGroup>,
}

/// A named collection of pipelines (`<pipelines group="...">`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineGroup {
    /// Group name, empty when the attribute is absent
    pub group: String,

    /// Pipelines in document order
    pub pipelines: Vec<Pipeline>,
}

/// A single pipeline definition (`<pipeline name="..." template="...">`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    pub name: String,

    /// Referenced template, empty when none is assigned
    pub template: String,
}

impl Cruise {
    pub fn new(pipeline_groups: Vec<PipelineGroup>) -> Self {
        Self { pipeline_groups }
    }

    /// Iterate every pipeline across all groups
    pub fn pipelines(&self) -> impl Iterator<Item = &Pipeline> {
        self.pipeline_groups.iter().flat_map(|g| g.pipelines.iter())
    }
}

impl PipelineGroup {
    pub fn new(group: impl Into<String>, pipelines: Vec<Pipeline>) -> Self {
        Self {
            group: group.into(),
            pipelines,
        }
    }
}

impl Pipeline {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}
