//! OpenAPI document assembled from module fragments.

use bookstore_kernel::ModuleRegistry;
use serde_json::{json, Value};

pub const TITLE: &str = "Bookstore API";
pub const VERSION: &str = "1.0.0";

/// Merge every module's fragment into one OpenAPI 3 document.
///
/// Fragment paths are relative to the module and get prefixed with
/// `/{module_name}`; a fragment path of `/` maps to the bare prefix.
pub fn document(registry: &ModuleRegistry) -> Value {
    let mut doc = json!({
        "openapi": "3.1.0",
        "info": {
            "title": TITLE,
            "version": VERSION,
            "description": "Catalog of books, tags, categories and authors"
        },
        "paths": {},
        "components": {
            "schemas": {}
        }
    });

    doc["components"]["schemas"]["ErrorResponse"] = json!({
        "type": "object",
        "properties": {
            "error": {
                "type": "object",
                "properties": {
                    "code": { "type": "string" },
                    "message": { "type": "string" },
                    "details": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "field": { "type": "string" },
                                "error": { "type": "string" }
                            }
                        }
                    },
                    "trace_id": { "type": "string" },
                    "timestamp": { "type": "string" }
                },
                "required": ["code", "message", "details", "trace_id", "timestamp"]
            }
        },
        "required": ["error"]
    });

    doc["paths"]["/healthz"] = json!({
        "get": {
            "summary": "Health check",
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "text/plain": {
                            "schema": { "type": "string" }
                        }
                    }
                }
            }
        }
    });

    for module in registry.modules() {
        let Some(fragment) = module.openapi() else {
            continue;
        };

        if let Some(paths) = fragment.get("paths").and_then(Value::as_object) {
            for (path, item) in paths {
                let prefixed = if path == "/" {
                    format!("/{}", module.name())
                } else {
                    format!("/{}{}", module.name(), path)
                };
                doc["paths"][prefixed] = item.clone();
            }
        }

        if let Some(schemas) = fragment
            .get("components")
            .and_then(|components| components.get("schemas"))
            .and_then(Value::as_object)
        {
            for (name, schema) in schemas {
                doc["components"]["schemas"][name] = schema.clone();
            }
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bookstore_kernel::Module;
    use std::sync::Arc;

    struct Shelves;

    #[async_trait]
    impl Module for Shelves {
        fn name(&self) -> &'static str {
            "shelves"
        }

        fn openapi(&self) -> Option<Value> {
            Some(json!({
                "paths": {
                    "/": { "get": { "summary": "List shelves", "responses": {} } },
                    "/{id}": { "delete": { "summary": "Delete shelf", "responses": {} } }
                },
                "components": {
                    "schemas": { "Shelf": { "type": "object" } }
                }
            }))
        }
    }

    #[test]
    fn fragments_are_prefixed_and_merged() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(Shelves)).unwrap();

        let doc = document(&registry);
        assert_eq!(doc["paths"]["/shelves"]["get"]["summary"], "List shelves");
        assert_eq!(
            doc["paths"]["/shelves/{id}"]["delete"]["summary"],
            "Delete shelf"
        );
        assert!(doc["paths"]["/healthz"].is_object());
        assert!(doc["components"]["schemas"]["Shelf"].is_object());
        assert!(doc["components"]["schemas"]["ErrorResponse"].is_object());
    }
}
