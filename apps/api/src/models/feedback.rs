use serde::{Deserialize, Serialize};

use crate::structured::schema::{FieldKind, FieldSpec, RecordSchema};
use crate::structured::StructuredRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const VALUES: &'static [&'static str] = &["positive", "neutral", "negative"];
}

/// Likelihood that the employee leaves, as judged from their feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttritionRisk {
    High,
    Medium,
    Low,
}

impl AttritionRisk {
    pub const VALUES: &'static [&'static str] = &["high", "medium", "low"];
}

/// Sentiment analysis of a piece of employee feedback. `sentiment_score` is on a 0–1 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub key_themes: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrition_risk: Option<AttritionRisk>,
}

impl StructuredRecord for FeedbackResult {
    const SCHEMA: RecordSchema = RecordSchema {
        title: "FeedbackResult",
        fields: &[
            FieldSpec::required(
                "sentiment",
                FieldKind::Enum(Sentiment::VALUES),
                "Overall sentiment of the feedback",
            ),
            FieldSpec::required(
                "sentiment_score",
                FieldKind::Score { min: 0.0, max: 1.0 },
                "Strength of positive sentiment, from 0 (very negative) to 1 (very positive)",
            ),
            FieldSpec::required(
                "key_themes",
                FieldKind::StringList,
                "Key issues, pain points or themes mentioned in the feedback",
            ),
            FieldSpec::required(
                "recommendations",
                FieldKind::StringList,
                "Personalized strategies to improve engagement",
            ),
            FieldSpec::optional(
                "attrition_risk",
                FieldKind::Enum(AttritionRisk::VALUES),
                "Likelihood that the employee leaves the company",
            ),
        ],
    };
}
