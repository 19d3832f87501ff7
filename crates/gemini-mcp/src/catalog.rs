//! Fixed tool catalogs served by the two binaries.

pub mod chat;
pub mod design;

use crate::tools::ToolRegistry;

/// Version reported in `initialize` by both servers.
pub const SERVER_VERSION: &str = "1.0.0";

/// Maximum output tokens requested by every tool that sets one.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Identity and tools of one server process.
pub struct ServerCatalog {
    pub name: &'static str,
    pub version: &'static str,
    pub registry: ToolRegistry,
}

/// General chat and code analysis server.
pub fn chat_server() -> ServerCatalog {
    ServerCatalog {
        name: chat::SERVER_NAME,
        version: SERVER_VERSION,
        registry: chat::registry(),
    }
}

/// UI/UX design server.
pub fn design_server() -> ServerCatalog {
    ServerCatalog {
        name: design::SERVER_NAME,
        version: SERVER_VERSION,
        registry: design::registry(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(catalog: &ServerCatalog) -> Vec<&str> {
        catalog
            .registry
            .list_tools()
            .iter()
            .map(|tool| tool.name.as_str())
            .collect()
    }

    #[test]
    fn chat_server_lists_its_fixed_catalog() {
        let catalog = chat_server();
        assert_eq!(catalog.name, "gemini-mcp-server");
        assert_eq!(catalog.version, "1.0.0");
        assert_eq!(
            names(&catalog),
            vec!["gemini_chat", "gemini_chat_with_history", "gemini_analyze_code"]
        );
    }

    #[test]
    fn design_server_lists_its_fixed_catalog() {
        let catalog = design_server();
        assert_eq!(catalog.name, "gemini-design-mcp-server");
        assert_eq!(catalog.version, "1.0.0");
        assert_eq!(
            names(&catalog),
            vec![
                "design_ui_component",
                "review_ui_implementation",
                "generate_frontend_code",
                "ui_architecture_consultation",
                "brand_identity_design",
            ]
        );
    }

    #[test]
    fn tool_names_are_unique() {
        for catalog in [chat_server(), design_server()] {
            let names = names(&catalog);
            let unique: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(unique.len(), names.len(), "{}", catalog.name);
        }
    }

    #[test]
    fn every_tool_documents_its_arguments() {
        for catalog in [chat_server(), design_server()] {
            for tool in catalog.registry.list_tools() {
                assert!(!tool.description.is_empty(), "{}", tool.name);
                for required in tool.required_arguments() {
                    assert!(
                        tool.input_schema.properties.contains_key(required),
                        "{} requires undeclared '{required}'",
                        tool.name
                    );
                }
            }
        }
    }
}
