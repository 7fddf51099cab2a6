//! Resume optimizer demo — input-gated canned output.
//!
//! Nothing here inspects the resume or the job description. The only branch
//! is whether the job description is empty, evaluated once per fired trigger.

pub mod canned;
pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::demo::canned::{
    EMPTY_JD_WARNING, MATCH_METRIC_DELTA, MATCH_METRIC_LABEL, MATCH_METRIC_VALUE,
    OPTIMIZED_BULLETS, OPTIMIZED_BULLETS_HEADING, OPTIMIZED_SUMMARY, OPTIMIZED_SUMMARY_HEADING,
    SKILL_CHECKLIST, SUGGESTED_FOCUS, SUGGESTED_FOCUS_LABEL,
};

/// Which demo trigger produced an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoAction {
    #[default]
    None,
    Analyze,
    Suggest,
}

/// Metadata of an uploaded resume. The bytes are received and dropped unread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: usize,
}

/// Inputs of one demo render pass. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoInputs {
    pub resume: Option<UploadedFile>,
    pub job_description: String,
}

/// The two buttons. Both may fire in the same pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoTriggers {
    #[serde(default)]
    pub analyze: bool,
    #[serde(default)]
    pub suggest: bool,
}

impl DemoTriggers {
    /// Fired actions in display order: analyze above suggest.
    pub fn actions(self) -> impl Iterator<Item = DemoAction> {
        [
            (self.analyze, DemoAction::Analyze),
            (self.suggest, DemoAction::Suggest),
        ]
        .into_iter()
        .filter_map(|(fired, action)| fired.then_some(action))
    }
}

/// A submitted demo form: the inputs plus whichever buttons fired.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoSubmission {
    pub inputs: DemoInputs,
    pub triggers: DemoTriggers,
}

impl DemoSubmission {
    pub fn outputs(&self) -> Vec<DemoOutput> {
        render_demo_outputs(self.triggers, &self.inputs.job_description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

/// One block in the outputs column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemoOutput {
    MatchAnalysis {
        metric: Metric,
        checklist: &'static [&'static str],
        suggestion_label: &'static str,
        suggestion: &'static str,
    },
    Suggestions {
        summary_heading: &'static str,
        summary: &'static str,
        bullets_heading: &'static str,
        bullets: &'static [&'static str],
    },
    Warning {
        message: &'static str,
    },
}

/// Renders the output for a single action.
///
/// Empty means zero-length: whitespace-only text counts as a job description.
pub fn render_demo_output(action: DemoAction, job_description: &str) -> Option<DemoOutput> {
    if action == DemoAction::None {
        return None;
    }
    if job_description.is_empty() {
        return Some(DemoOutput::Warning {
            message: EMPTY_JD_WARNING,
        });
    }

    let output = match action {
        DemoAction::Analyze => DemoOutput::MatchAnalysis {
            metric: Metric {
                label: MATCH_METRIC_LABEL,
                value: MATCH_METRIC_VALUE,
                delta: MATCH_METRIC_DELTA,
            },
            checklist: &SKILL_CHECKLIST,
            suggestion_label: SUGGESTED_FOCUS_LABEL,
            suggestion: SUGGESTED_FOCUS,
        },
        DemoAction::Suggest => DemoOutput::Suggestions {
            summary_heading: OPTIMIZED_SUMMARY_HEADING,
            summary: OPTIMIZED_SUMMARY,
            bullets_heading: OPTIMIZED_BULLETS_HEADING,
            bullets: &OPTIMIZED_BULLETS,
        },
        DemoAction::None => return None,
    };
    Some(output)
}

/// Renders every fired trigger independently, stacked in display order.
pub fn render_demo_outputs(triggers: DemoTriggers, job_description: &str) -> Vec<DemoOutput> {
    triggers
        .actions()
        .filter_map(|action| render_demo_output(action, job_description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Looking for a Python/SQL/NLP engineer";

    #[test]
    fn test_analyze_with_empty_jd_warns_only() {
        let output = render_demo_output(DemoAction::Analyze, "").unwrap();
        assert_eq!(
            output,
            DemoOutput::Warning {
                message: "Please paste a job description first."
            }
        );
    }

    #[test]
    fn test_suggest_with_empty_jd_warns_only() {
        let output = render_demo_output(DemoAction::Suggest, "").unwrap();
        assert!(matches!(output, DemoOutput::Warning { .. }));
    }

    #[test]
    fn test_analyze_with_jd_returns_fixed_metric_and_checklist() {
        match render_demo_output(DemoAction::Analyze, JD).unwrap() {
            DemoOutput::MatchAnalysis {
                metric, checklist, ..
            } => {
                assert_eq!(metric.value, "74%");
                assert_eq!(metric.delta, "+12% (simulated)");
                assert_eq!(
                    checklist,
                    &[
                        "✅ Python",
                        "✅ SQL",
                        "⚠️ NLP/Transformers (low emphasis)",
                        "⚠️ Cloud (briefly mentioned)",
                    ]
                );
            }
            other => panic!("expected match analysis, got {other:?}"),
        }
    }

    #[test]
    fn test_suggest_with_jd_returns_fixed_summary() {
        match render_demo_output(DemoAction::Suggest, JD).unwrap() {
            DemoOutput::Suggestions {
                summary, bullets, ..
            } => {
                assert_eq!(
                    summary,
                    "Data Scientist with strong Python/SQL skills and hands-on NLP + ML project experience."
                );
                assert_eq!(bullets.len(), 2);
            }
            other => panic!("expected suggestions, got {other:?}"),
        }
    }

    #[test]
    fn test_output_ignores_jd_content() {
        let a = render_demo_output(DemoAction::Analyze, "x");
        let b = render_demo_output(DemoAction::Analyze, JD);
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_jd_counts_as_present() {
        let output = render_demo_output(DemoAction::Analyze, "   ").unwrap();
        assert!(matches!(output, DemoOutput::MatchAnalysis { .. }));
    }

    #[test]
    fn test_none_action_produces_nothing() {
        assert!(render_demo_output(DemoAction::None, JD).is_none());
        assert!(render_demo_output(DemoAction::None, "").is_none());
    }

    #[test]
    fn test_no_triggers_produce_no_outputs() {
        assert!(render_demo_outputs(DemoTriggers::default(), JD).is_empty());
    }

    #[test]
    fn test_both_triggers_stack_analyze_then_suggest() {
        let triggers = DemoTriggers {
            analyze: true,
            suggest: true,
        };
        let outputs = render_demo_outputs(triggers, JD);
        assert_eq!(outputs.len(), 2);
        assert!(matches!(outputs[0], DemoOutput::MatchAnalysis { .. }));
        assert!(matches!(outputs[1], DemoOutput::Suggestions { .. }));
    }

    #[test]
    fn test_both_triggers_with_empty_jd_warn_twice() {
        let triggers = DemoTriggers {
            analyze: true,
            suggest: true,
        };
        let outputs = render_demo_outputs(triggers, "");
        assert_eq!(outputs.len(), 2);
        assert!(outputs
            .iter()
            .all(|o| matches!(o, DemoOutput::Warning { .. })));
    }

    #[test]
    fn test_resume_upload_has_no_effect() {
        let triggers = DemoTriggers {
            analyze: true,
            suggest: false,
        };
        let without = DemoSubmission {
            inputs: DemoInputs {
                resume: None,
                job_description: JD.to_string(),
            },
            triggers,
        };
        let with = DemoSubmission {
            inputs: DemoInputs {
                resume: Some(UploadedFile {
                    file_name: "resume.pdf".to_string(),
                    content_type: Some("application/pdf".to_string()),
                    size_bytes: 1024,
                }),
                job_description: JD.to_string(),
            },
            triggers,
        };
        assert_eq!(without.outputs(), with.outputs());
    }

    #[test]
    fn test_output_serializes_with_kind_tag() {
        let output = render_demo_output(DemoAction::Analyze, "").unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["kind"], "warning");
        assert_eq!(json["message"], "Please paste a job description first.");
    }
}
