// Canned demo output. Shown regardless of input content beyond the
// empty/non-empty check on the job description.

pub const EMPTY_JD_WARNING: &str = "Please paste a job description first.";

pub const MATCH_METRIC_LABEL: &str = "Match Score (demo)";
pub const MATCH_METRIC_VALUE: &str = "74%";
pub const MATCH_METRIC_DELTA: &str = "+12% (simulated)";

pub const SKILL_CHECKLIST: [&str; 4] = [
    "✅ Python",
    "✅ SQL",
    "⚠️ NLP/Transformers (low emphasis)",
    "⚠️ Cloud (briefly mentioned)",
];

pub const SUGGESTED_FOCUS_LABEL: &str = "Suggested focus:";
pub const SUGGESTED_FOCUS: &str =
    "add NLP/embeddings bullets, highlight ML pipeline + deployment.";

pub const OPTIMIZED_SUMMARY_HEADING: &str = "Optimized Summary (example):";
pub const OPTIMIZED_SUMMARY: &str =
    "Data Scientist with strong Python/SQL skills and hands-on NLP + ML project experience.";

pub const OPTIMIZED_BULLETS_HEADING: &str = "Optimized Bullets (example):";
pub const OPTIMIZED_BULLETS: [&str; 2] = [
    "Built an AI resume optimizer using NLP + semantic matching.",
    "Developed ML pipelines and dashboards to support decisions.",
];

/// Extensions offered by the upload picker. Not enforced server-side.
pub const ACCEPTED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];
