use crate::constants::{columns, defaults};
use crate::errors::PipelineError;
use crate::types::{ColumnName, FamilyLabel};

/// Top-level pipeline configuration.
///
/// Everything the surrounding loader used to hard-code lives here as plain
/// data, so the core stays testable in isolation: the family labels to
/// iterate, the blend utilization constant, and the column naming
/// conventions of the loaded tables.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Machine-family labels to summarize, in report order.
    pub families: Vec<FamilyLabel>,
    /// Utilization fraction in `[0, 1]` used for the blended power estimate.
    pub utilization: f64,
    /// Column holding the free-text processor description in both the
    /// benchmark table and the family-reference tables. Callers whose
    /// reference data names it differently (the AMD sheets say "Model")
    /// rename before handing tables in.
    pub description_column: ColumnName,
    /// Label attached to the whole-benchmark-table summary row.
    pub overall_label: FamilyLabel,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            families: defaults::MACHINE_FAMILIES
                .iter()
                .map(|family| family.to_string())
                .collect(),
            utilization: defaults::UTILIZATION,
            description_column: columns::PROCESSOR.to_string(),
            overall_label: defaults::OVERALL_LABEL.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Validate configuration values against their documented domains.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(0.0..=1.0).contains(&self.utilization) {
            return Err(PipelineError::Configuration(format!(
                "utilization must be within [0, 1], got {}",
                self.utilization
            )));
        }
        if self.description_column.is_empty() {
            return Err(PipelineError::Configuration(
                "description_column must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.utilization, 0.4);
        assert_eq!(config.description_column, "processor");
        assert_eq!(config.families.len(), 9);
    }

    #[test]
    fn out_of_range_utilization_is_rejected() {
        let config = PipelineConfig {
            utilization: 1.5,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::Configuration(_))
        ));
    }

    #[test]
    fn empty_description_column_is_rejected() {
        let config = PipelineConfig {
            description_column: String::new(),
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
