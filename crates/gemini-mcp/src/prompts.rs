//! Prompt templates and placeholder substitution.
//!
//! Placeholders are written `{name}`. Substitution is a single left-to-right
//! pass, so braces inside substituted values are never expanded again.

/// Replaces each `{key}` with its value. Unknown placeholders are left as is.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Kind of code analysis requested from `gemini_analyze_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    Bugs,
    Optimize,
    Explain,
    Review,
}

impl AnalysisType {
    pub const NAMES: [&'static str; 4] = ["bugs", "optimize", "explain", "review"];

    /// Unrecognized names fall back to [`AnalysisType::Review`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "bugs" => Self::Bugs,
            "optimize" => Self::Optimize,
            "explain" => Self::Explain,
            _ => Self::Review,
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Self::Bugs => "Analyze the following {language} code for bugs, errors, and potential issues:\n\n{code}\n\nProvide a detailed bug report.",
            Self::Optimize => "Review the following {language} code and suggest performance optimizations and best practices:\n\n{code}",
            Self::Explain => "Explain the following {language} code in detail, including what it does and how it works:\n\n{code}",
            Self::Review => "Perform a comprehensive code review of the following {language} code, covering bugs, performance, security, and best practices:\n\n{code}",
        }
    }

    pub fn render(self, language: &str, code: &str) -> String {
        render(self.template(), &[("language", language), ("code", code)])
    }
}

pub const DESIGN_UI_COMPONENT_TEMPLATE: &str = "Design a {component_type} component for {framework}.\n\n\
Requirements:\n{requirements}\n\n\
{design_system_line}\
Target accessibility: WCAG {accessibility_level}.\n\n\
Provide the component structure, props API, states and variants, styling approach, \
accessibility considerations (keyboard, focus, ARIA) and a complete implementation.";

pub const REVIEW_UI_IMPLEMENTATION_TEMPLATE: &str = "Review the following {framework_label}UI implementation.\n\n\
Focus areas: {focus_areas}.\n\n\
{code}\n\n\
For each focus area list concrete issues with their severity and a suggested fix, \
then summarize the most important improvements.";

pub const GENERATE_FRONTEND_CODE_TEMPLATE: &str = "Generate production-ready {framework} code in {language} styled with {styling}.\n\n\
Description:\n{description}\n\n\
Include component code, styles, types where applicable and brief usage notes. \
Follow accessibility and responsive design best practices.";

pub const UI_ARCHITECTURE_CONSULTATION_TEMPLATE: &str = "Act as a senior frontend architect and advise on the architecture of the following {scale}-scale project.\n\n\
Project:\n{project_description}\n\n\
{constraints_section}\
Cover framework choice, state management, component organization, design system strategy, \
performance, testing and deployment.";

pub const BRAND_IDENTITY_DESIGN_TEMPLATE: &str = "Create a brand identity for {brand_name}, a brand in the {industry} industry.\n\n\
{values_line}\
{audience_line}\
Deliverables: {deliverables}.\n\n\
For each deliverable give concrete recommendations with rationale, including hex codes for colors \
and font pairings for typography.";

/// Renders `label` followed by `value` and a blank line, or nothing when absent.
pub fn optional_line(label: &str, value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => format!("{label}: {value}\n\n"),
        _ => String::new(),
    }
}
