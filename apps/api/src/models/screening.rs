use serde::{Deserialize, Serialize};

use crate::structured::schema::{FieldKind, FieldSpec, RecordSchema};
use crate::structured::StructuredRecord;

/// Resume vs job description evaluation. `match_score` is on a 0–1 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub match_score: f64,
    pub highlighted_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

impl StructuredRecord for ScreeningResult {
    const SCHEMA: RecordSchema = RecordSchema {
        title: "ScreeningResult",
        fields: &[
            FieldSpec::required(
                "match_score",
                FieldKind::Score { min: 0.0, max: 1.0 },
                "How well the resume matches the job description, from 0 (no match) to 1 (perfect match)",
            ),
            FieldSpec::required(
                "highlighted_skills",
                FieldKind::StringList,
                "Skills from the resume that are most relevant to the job description",
            ),
            FieldSpec::required(
                "recommendations",
                FieldKind::StringList,
                "Concrete suggestions for the hiring team or the candidate",
            ),
        ],
    };
}

/// The richer screening record consumed by the web frontend.
/// `overallMatchScore` is a percentage, 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedScreeningResult {
    pub overall_match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: String,
    pub qualification_match: String,
    pub summary: String,
}

impl StructuredRecord for DetailedScreeningResult {
    const SCHEMA: RecordSchema = RecordSchema {
        title: "DetailedScreeningResult",
        fields: &[
            FieldSpec::required(
                "overallMatchScore",
                FieldKind::Score {
                    min: 0.0,
                    max: 100.0,
                },
                "Overall match between resume and job description as a percentage",
            ),
            FieldSpec::required(
                "matchingSkills",
                FieldKind::StringList,
                "Required or preferred skills the candidate demonstrably has",
            ),
            FieldSpec::required(
                "missingSkills",
                FieldKind::StringList,
                "Required or preferred skills absent from the resume",
            ),
            FieldSpec::required(
                "experienceMatch",
                FieldKind::Text,
                "One or two sentences on how the candidate's experience fits the role",
            ),
            FieldSpec::required(
                "qualificationMatch",
                FieldKind::Text,
                "One or two sentences on education and certifications versus requirements",
            ),
            FieldSpec::required(
                "summary",
                FieldKind::Text,
                "Short overall assessment for the hiring manager",
            ),
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured::{parse_record, PipelineError};
    use crate::structured::schema::ValidationError;

    #[test]
    fn test_fenced_output_with_prose_is_clamped_and_stringified() {
        let raw = "Here is the result:\n```json\n{\"match_score\": 1.4, \"highlighted_skills\": [\"Python\", 5], \"recommendations\": []}\n```";
        let result: ScreeningResult = parse_record(raw).unwrap();
        assert_eq!(
            result,
            ScreeningResult {
                match_score: 1.0,
                highlighted_skills: vec!["Python".to_string(), "5".to_string()],
                recommendations: vec![],
            }
        );
    }

    #[test]
    fn test_in_range_score_unchanged() {
        let raw = r#"{"match_score": 0.62, "highlighted_skills": ["Go"], "recommendations": ["Probe Kubernetes depth"]}"#;
        let result: ScreeningResult = parse_record(raw).unwrap();
        assert_eq!(result.match_score, 0.62);
        assert_eq!(result.recommendations, vec!["Probe Kubernetes depth"]);
    }

    #[test]
    fn test_missing_recommendations_rejected() {
        let raw = r#"{"match_score": 0.5, "highlighted_skills": []}"#;
        let err = parse_record::<ScreeningResult>(raw).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Validation(ValidationError::MissingField("recommendations"))
        ));
    }

    #[test]
    fn test_detailed_score_clamped_to_percentage() {
        let raw = r#"{
            "overallMatchScore": 112,
            "matchingSkills": ["SQL", true],
            "missingSkills": [],
            "experienceMatch": "Strong",
            "qualificationMatch": "Meets requirements",
            "summary": "Good fit"
        }"#;
        let result: DetailedScreeningResult = parse_record(raw).unwrap();
        assert_eq!(result.overall_match_score, 100.0);
        assert_eq!(result.matching_skills, vec!["SQL", "true"]);
    }

    #[test]
    fn test_detailed_fractional_score_not_rescaled() {
        let raw = r#"{
            "overallMatchScore": 0.8,
            "matchingSkills": [],
            "missingSkills": [],
            "experienceMatch": "",
            "qualificationMatch": "",
            "summary": ""
        }"#;
        let result: DetailedScreeningResult = parse_record(raw).unwrap();
        assert_eq!(result.overall_match_score, 0.8);
    }

    #[test]
    fn test_detailed_serializes_camel_case() {
        let result = DetailedScreeningResult {
            overall_match_score: 70.0,
            matching_skills: vec![],
            missing_skills: vec!["Rust".to_string()],
            experience_match: "Partial".to_string(),
            qualification_match: "Meets".to_string(),
            summary: "Worth a call".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overallMatchScore"], 70.0);
        assert_eq!(json["missingSkills"][0], "Rust");
    }
}
