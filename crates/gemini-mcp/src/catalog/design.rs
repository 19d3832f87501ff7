//! Tools of `gemini-design-mcp-server`: UI/UX design and frontend assistance.

use gemini_llm::GenerationRequest;
use serde_json::json;

use crate::error::CoreResult;
use crate::prompts::{self, render};
use crate::tools::{ArgumentSchema, Arguments, Schema, ToolDescriptor, ToolRegistry};

use super::DEFAULT_MAX_OUTPUT_TOKENS;

pub const SERVER_NAME: &str = "gemini-design-mcp-server";

pub const DESIGN_UI_COMPONENT: &str = "design_ui_component";
pub const REVIEW_UI_IMPLEMENTATION: &str = "review_ui_implementation";
pub const GENERATE_FRONTEND_CODE: &str = "generate_frontend_code";
pub const UI_ARCHITECTURE_CONSULTATION: &str = "ui_architecture_consultation";
pub const BRAND_IDENTITY_DESIGN: &str = "brand_identity_design";

pub const DESIGN_TEMPERATURE: f64 = 0.7;

const ACCESSIBILITY_LEVELS: [&str; 3] = ["A", "AA", "AAA"];
const FOCUS_AREAS: [&str; 5] = [
    "accessibility",
    "usability",
    "performance",
    "visual_design",
    "responsiveness",
];
const STYLING_OPTIONS: [&str; 4] = ["tailwind", "css-modules", "styled-components", "plain-css"];
const PROJECT_SCALES: [&str; 4] = ["small", "medium", "large", "enterprise"];
const DEFAULT_DELIVERABLES: [&str; 4] = ["logo concepts", "color palette", "typography", "brand voice"];

pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // ── design_ui_component ───────────────────────────────────────
    registry.register(
        ToolDescriptor::new(
            DESIGN_UI_COMPONENT,
            "Design a UI component with structure, states, styling and accessibility guidance",
            Schema::object()
                .required(
                    "component_type",
                    ArgumentSchema::string("Kind of component (e.g., button, modal, data table)"),
                )
                .required(
                    "requirements",
                    ArgumentSchema::string("Functional and visual requirements"),
                )
                .optional("framework", framework_argument())
                .optional(
                    "design_system",
                    ArgumentSchema::string("Design system to follow (e.g., Material, Carbon)"),
                )
                .optional(
                    "accessibility_level",
                    ArgumentSchema::string("WCAG conformance level")
                        .with_enum(&ACCESSIBILITY_LEVELS)
                        .with_default(json!("AA")),
                ),
        ),
        Box::new(design_ui_component_request),
    );

    // ── review_ui_implementation ──────────────────────────────────
    registry.register(
        ToolDescriptor::new(
            REVIEW_UI_IMPLEMENTATION,
            "Review UI code for accessibility, usability, performance and visual quality",
            Schema::object()
                .required("code", ArgumentSchema::string("The UI code to review"))
                .optional(
                    "framework",
                    ArgumentSchema::string("Framework the code is written for"),
                )
                .optional(
                    "focus_areas",
                    ArgumentSchema::array(
                        "Aspects to concentrate the review on",
                        json!({"type": "string", "enum": FOCUS_AREAS}),
                    )
                    .with_default(json!(FOCUS_AREAS)),
                ),
        ),
        Box::new(review_ui_implementation_request),
    );

    // ── generate_frontend_code ────────────────────────────────────
    registry.register(
        ToolDescriptor::new(
            GENERATE_FRONTEND_CODE,
            "Generate frontend component code from a description",
            Schema::object()
                .required(
                    "description",
                    ArgumentSchema::string("What the generated code should do and look like"),
                )
                .optional("framework", framework_argument())
                .optional(
                    "styling",
                    ArgumentSchema::string("Styling approach")
                        .with_enum(&STYLING_OPTIONS)
                        .with_default(json!("tailwind")),
                )
                .optional(
                    "typescript",
                    ArgumentSchema::boolean("Emit TypeScript instead of JavaScript")
                        .with_default(json!(true)),
                ),
        ),
        Box::new(generate_frontend_code_request),
    );

    // ── ui_architecture_consultation ──────────────────────────────
    registry.register(
        ToolDescriptor::new(
            UI_ARCHITECTURE_CONSULTATION,
            "Get architecture advice for a frontend project",
            Schema::object()
                .required(
                    "project_description",
                    ArgumentSchema::string("The project and its goals"),
                )
                .optional(
                    "scale",
                    ArgumentSchema::string("Expected project scale")
                        .with_enum(&PROJECT_SCALES)
                        .with_default(json!("medium")),
                )
                .optional(
                    "constraints",
                    ArgumentSchema::string("Technical or organizational constraints"),
                ),
        ),
        Box::new(ui_architecture_consultation_request),
    );

    // ── brand_identity_design ─────────────────────────────────────
    registry.register(
        ToolDescriptor::new(
            BRAND_IDENTITY_DESIGN,
            "Create brand identity guidelines: logo concepts, colors, typography and voice",
            Schema::object()
                .required("brand_name", ArgumentSchema::string("Name of the brand"))
                .required("industry", ArgumentSchema::string("Industry the brand operates in"))
                .optional("values", ArgumentSchema::string("Core brand values"))
                .optional(
                    "target_audience",
                    ArgumentSchema::string("Who the brand speaks to"),
                )
                .optional(
                    "deliverables",
                    ArgumentSchema::array("Brand assets to produce", json!({"type": "string"}))
                        .with_default(json!(DEFAULT_DELIVERABLES)),
                ),
        ),
        Box::new(brand_identity_design_request),
    );

    registry
}

fn framework_argument() -> ArgumentSchema {
    ArgumentSchema::string("Target framework (e.g., react, vue, svelte)").with_default(json!("react"))
}

fn design_request(prompt: String) -> GenerationRequest {
    GenerationRequest::from_prompt(prompt)
        .with_temperature(DESIGN_TEMPERATURE)
        .with_max_output_tokens(DEFAULT_MAX_OUTPUT_TOKENS)
}

fn design_ui_component_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    let design_system = prompts::optional_line("Design system", args.opt_str("design_system")?);
    let prompt = render(
        prompts::DESIGN_UI_COMPONENT_TEMPLATE,
        &[
            ("component_type", args.str("component_type")?),
            ("framework", args.str("framework")?),
            ("requirements", args.str("requirements")?),
            ("design_system_line", design_system.as_str()),
            ("accessibility_level", args.str("accessibility_level")?),
        ],
    );
    Ok(design_request(prompt))
}

fn review_ui_implementation_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    let framework_label = match args.opt_str("framework")? {
        Some(framework) if !framework.is_empty() => format!("{framework} "),
        _ => String::new(),
    };
    let focus_areas = args
        .string_list("focus_areas")?
        .iter()
        .map(|area| area.replace('_', " "))
        .collect::<Vec<_>>()
        .join(", ");
    let prompt = render(
        prompts::REVIEW_UI_IMPLEMENTATION_TEMPLATE,
        &[
            ("framework_label", framework_label.as_str()),
            ("focus_areas", focus_areas.as_str()),
            ("code", args.str("code")?),
        ],
    );
    Ok(design_request(prompt))
}

fn generate_frontend_code_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    let language = if args.bool("typescript")? {
        "TypeScript"
    } else {
        "JavaScript"
    };
    let prompt = render(
        prompts::GENERATE_FRONTEND_CODE_TEMPLATE,
        &[
            ("framework", args.str("framework")?),
            ("language", language),
            ("styling", args.str("styling")?),
            ("description", args.str("description")?),
        ],
    );
    Ok(design_request(prompt))
}

fn ui_architecture_consultation_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    let constraints = prompts::optional_line("Constraints", args.opt_str("constraints")?);
    let prompt = render(
        prompts::UI_ARCHITECTURE_CONSULTATION_TEMPLATE,
        &[
            ("scale", args.str("scale")?),
            ("project_description", args.str("project_description")?),
            ("constraints_section", constraints.as_str()),
        ],
    );
    Ok(design_request(prompt))
}

fn brand_identity_design_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    let values = prompts::optional_line("Brand values", args.opt_str("values")?);
    let audience = prompts::optional_line("Target audience", args.opt_str("target_audience")?);
    let deliverables = args.string_list("deliverables")?.join(", ");
    let prompt = render(
        prompts::BRAND_IDENTITY_DESIGN_TEMPLATE,
        &[
            ("brand_name", args.str("brand_name")?),
            ("industry", args.str("industry")?),
            ("values_line", values.as_str()),
            ("audience_line", audience.as_str()),
            ("deliverables", deliverables.as_str()),
        ],
    );
    Ok(design_request(prompt))
}
