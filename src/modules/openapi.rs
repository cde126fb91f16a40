//! OpenAPI fragment shared by the four CRUD resources.

use serde_json::{json, Value};

/// Names used to describe one resource's endpoints
pub struct ResourceDoc {
    /// OpenAPI tag, e.g. `Books`
    pub tag: &'static str,
    /// Lowercase singular noun used in summaries, e.g. `book`
    pub noun: &'static str,
    pub plural: &'static str,
    /// Schema name of the stored record
    pub record: &'static str,
    /// Schema name of the request body
    pub payload: &'static str,
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

/// Build the list/create/update/delete fragment for one resource
pub fn crud_fragment(doc: &ResourceDoc, record_schema: Value, payload_schema: Value) -> Value {
    let record_ref = json!({ "$ref": format!("#/components/schemas/{}", doc.record) });
    let payload_body = json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{}", doc.payload) }
            }
        }
    });
    let record_response = |description: String| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": record_ref.clone() } }
        })
    };
    let id_parameter = json!([{
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    }]);

    json!({
        "paths": {
            "/": {
                "get": {
                    "summary": format!("List {}", doc.plural),
                    "tags": [doc.tag],
                    "responses": {
                        "200": {
                            "description": format!("Every stored {}", doc.noun),
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": record_ref.clone() }
                                }
                            }
                        },
                        "500": error_response("Internal server error")
                    }
                },
                "post": {
                    "summary": format!("Create a {}", doc.noun),
                    "tags": [doc.tag],
                    "requestBody": payload_body.clone(),
                    "responses": {
                        "200": record_response(format!("The stored {}, including its id", doc.noun)),
                        "422": error_response("Validation error"),
                        "500": error_response("Internal server error")
                    }
                }
            },
            "/{id}": {
                "put": {
                    "summary": format!("Replace every field of a {}", doc.noun),
                    "tags": [doc.tag],
                    "parameters": id_parameter.clone(),
                    "requestBody": payload_body,
                    "responses": {
                        "200": record_response(format!("The updated {}", doc.noun)),
                        "404": error_response(&format!("No {} with this id", doc.noun)),
                        "422": error_response("Validation error"),
                        "500": error_response("Internal server error")
                    }
                },
                "delete": {
                    "summary": format!("Delete a {}", doc.noun),
                    "tags": [doc.tag],
                    "parameters": id_parameter,
                    "responses": {
                        "200": {
                            "description": "Confirmation message",
                            "content": {
                                "application/json": { "schema": { "type": "string" } }
                            }
                        },
                        "404": error_response(&format!("No {} with this id", doc.noun)),
                        "422": error_response("Validation error"),
                        "500": error_response("Internal server error")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                doc.record: record_schema,
                doc.payload: payload_schema
            }
        }
    })
}

/// Bounded string property
pub fn text_property(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "maxLength": super::MAX_TEXT_LEN,
        "description": description
    })
}

/// Integer property bounded exclusively on both sides
pub fn integer_property(description: &str, gt: i64, lt: i64) -> Value {
    json!({
        "type": "integer",
        "format": "int64",
        "exclusiveMinimum": gt,
        "exclusiveMaximum": lt,
        "description": description
    })
}

/// Record schema: the payload's properties plus the generated id
pub fn record_schema(payload_schema: &Value) -> Value {
    let mut schema = payload_schema.clone();
    schema["properties"]["id"] = json!({
        "type": "integer",
        "format": "int64",
        "description": "Identifier assigned by the database"
    });
    if let Some(required) = schema["required"].as_array_mut() {
        required.insert(0, json!("id"));
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: ResourceDoc = ResourceDoc {
        tag: "Tags",
        noun: "tag",
        plural: "tags",
        record: "Tag",
        payload: "TagPayload",
    };

    #[test]
    fn fragment_covers_all_four_operations() {
        let payload = json!({
            "type": "object",
            "properties": { "title": text_property("Tag title") },
            "required": ["title"]
        });
        let fragment = crud_fragment(&DOC, record_schema(&payload), payload);

        let paths = &fragment["paths"];
        assert_eq!(paths["/"]["get"]["summary"], "List tags");
        assert_eq!(paths["/"]["post"]["summary"], "Create a tag");
        assert!(paths["/{id}"]["put"]["responses"]["404"].is_object());
        assert!(paths["/{id}"]["delete"]["responses"]["404"].is_object());

        let record = &fragment["components"]["schemas"]["Tag"];
        assert_eq!(record["required"], json!(["id", "title"]));
        assert_eq!(record["properties"]["title"]["maxLength"], 212);
        assert!(fragment["components"]["schemas"]["TagPayload"]["properties"]["id"].is_null());
    }
}
