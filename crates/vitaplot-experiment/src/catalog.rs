//! The two built-in experiments and their sample groups.
//!
//! | Experiment | Group | Mean |
//! |---|---|---|
//! | Viability | Low | 40 |
//! | Viability | Optimal | 70 |
//! | Viability | High | 50 |
//! | Resilience | Standard | 65 |
//! | Resilience | Nutrient-rich | 85 |
//!
//! Every group shares a standard deviation of [`GROUP_STD_DEV`] and a size of
//! [`GROUP_SIZE`].

use crate::sample::{GroupSpec, SampleError};

pub const GROUP_STD_DEV: f64 = 10.0;
pub const GROUP_SIZE: usize = 100;

const VIABILITY_GROUPS: [(&str, f64); 3] = [("Low", 40.0), ("Optimal", 70.0), ("High", 50.0)];
const RESILIENCE_GROUPS: [(&str, f64); 2] = [("Standard", 65.0), ("Nutrient-rich", 85.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentKind {
    /// Embryo viability by incubation temperature.
    #[display("viability")]
    Viability,
    /// Maternal stress resilience by diet.
    #[display("resilience")]
    Resilience,
}

/// An experiment: its chart text and the groups compared in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub kind: ExperimentKind,
    pub title: &'static str,
    pub x_label: &'static str,
    /// Appended to each group label in the legend ("Low" becomes "Low Temp").
    pub legend_suffix: &'static str,
    pub groups: Vec<GroupSpec>,
}

impl Experiment {
    /// Embryo viability across the three temperature conditions.
    pub fn viability() -> Result<Self, SampleError> {
        Ok(Self {
            kind: ExperimentKind::Viability,
            title: "Embryo Viability Across Temperatures",
            x_label: "Viability (%)",
            legend_suffix: "Temp",
            groups: build_groups(&VIABILITY_GROUPS)?,
        })
    }

    /// Maternal stress resilience across the two diet conditions.
    pub fn resilience() -> Result<Self, SampleError> {
        Ok(Self {
            kind: ExperimentKind::Resilience,
            title: "Maternal Stress Resilience Across Diets",
            x_label: "Resilience (%)",
            legend_suffix: "Diet",
            groups: build_groups(&RESILIENCE_GROUPS)?,
        })
    }

    /// Both experiments, in the order their samples are generated and drawn.
    pub fn all() -> Result<Vec<Self>, SampleError> {
        Ok(vec![Self::viability()?, Self::resilience()?])
    }

    /// Returns the legend label of a group of this experiment.
    #[must_use]
    pub fn legend_label(&self, group: &GroupSpec) -> String {
        format!("{} {}", group.label(), self.legend_suffix)
    }
}

fn build_groups(table: &[(&str, f64)]) -> Result<Vec<GroupSpec>, SampleError> {
    table
        .iter()
        .map(|&(label, mean)| GroupSpec::new(label, mean, GROUP_STD_DEV, GROUP_SIZE))
        .collect()
}
