pub mod assessment;
pub mod criterion;

pub use assessment::{Assessment, CriterionAssessment, Evidence, QualificationLevel};
pub use criterion::Criterion;
