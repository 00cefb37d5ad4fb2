//! Pipeline aggregation over a parsed configuration

use crate::core::Cruise;
use std::collections::BTreeMap;

/// Pipeline counts keyed by template name; the empty key means no template
pub type TemplateCounts = BTreeMap<String, usize>;

/// Number of pipeline groups in the document
pub fn count_pipeline_groups(config: &Cruise) -> usize {
    config.pipeline_groups.len()
}

/// Total number of pipelines across all groups
pub fn count_pipelines(config: &Cruise) -> usize {
    config.pipeline_groups.iter().map(|g| g.pipelines.len()).sum()
}

/// Number of pipelines referencing each template
pub fn count_pipelines_by_template(config: &Cruise) -> TemplateCounts {
    let mut counts = TemplateCounts::new();
    for pipeline in config.pipelines() {
        *counts.entry(pipeline.template.clone()).or_insert(0) += 1;
    }
    counts
}

/// Aggregated statistics for one configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStats {
    pub pipeline_groups: usize,
    pub pipelines: usize,
    pub by_template: TemplateCounts,
}

impl ConfigStats {
    pub fn from_config(config: &Cruise) -> Self {
        Self {
            pipeline_groups: count_pipeline_groups(config),
            pipelines: count_pipelines(config),
            by_template: count_pipelines_by_template(config),
        }
    }
}
