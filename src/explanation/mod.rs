pub mod types;
pub mod rotation;
pub mod generator;
pub mod formatters;

pub use types::{
    ConditionsSummary, CropCard, EconomicsCard, OverallExplanation, RecommendationExplanation,
    RotationCard,
};

pub use rotation::{partner_list, rotation_rationale, ROTATION_BENEFIT};

pub use generator::ExplanationGenerator;
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
