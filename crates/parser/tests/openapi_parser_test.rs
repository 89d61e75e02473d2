//! Integration test for the OpenAPI parser

use api_doc_parser::openapi::OpenApiParser;
use api_doc_parser_common::{FieldType, OperationType, ResourceRef};

#[test]
fn parses_a_library_openapi_spec() {
    let openapi_json = r##"{
        "openapi": "3.0.0",
        "info": {
            "title": "Library API",
            "version": "1.0.0"
        },
        "servers": [{ "url": "https://library.example.com" }],
        "paths": {
            "/books": {
                "get": {
                    "operationId": "listBooks",
                    "parameters": [
                        {
                            "name": "page",
                            "in": "query",
                            "description": "The collection page number",
                            "schema": { "type": "integer" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "operationId": "createBook",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Book" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
                                }
                            }
                        }
                    }
                }
            },
            "/books/{id}": {
                "get": {
                    "operationId": "showBook",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
                                }
                            }
                        }
                    }
                },
                "put": {
                    "operationId": "editBook",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
                                }
                            }
                        }
                    }
                },
                "delete": {
                    "operationId": "deleteBook",
                    "responses": { "204": { "description": "No Content" } }
                }
            },
            "/reviews": {
                "get": {
                    "operationId": "listReviews",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Review" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/reviews/{id}": {
                "get": {
                    "operationId": "showReview",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Review" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Book": {
                    "type": "object",
                    "title": "Book",
                    "properties": {
                        "isbn": { "type": "string", "description": "The ISBN of the book" },
                        "name": { "type": "string" },
                        "publicationDate": { "type": "string", "format": "date-time" }
                    },
                    "required": ["isbn", "name"]
                },
                "Review": {
                    "type": "object",
                    "title": "Review",
                    "properties": {
                        "body": { "type": "string" },
                        "rating": { "type": "integer" },
                        "book": { "$ref": "#/components/schemas/Book" }
                    }
                }
            }
        }
    }"##;

    let api = OpenApiParser::from_json(openapi_json)
        .expect("valid spec")
        .parse()
        .expect("convertible");

    assert_eq!(api.title.as_deref(), Some("Library API"));
    assert_eq!(api.entrypoint, "https://library.example.com");
    assert_eq!(api.resources.len(), 2);

    let (book_id, books) = api.find_resource("books").expect("books resource");
    assert_eq!(books.url, "https://library.example.com/books");
    assert_eq!(books.id.as_deref(), Some("Book"));

    let isbn = books.field("isbn").expect("isbn field");
    assert!(isbn.required);
    assert_eq!(isbn.field_type, Some(FieldType::String));
    assert_eq!(isbn.description.as_deref(), Some("The ISBN of the book"));
    let publication_date = books.field("publicationDate").expect("date field");
    assert_eq!(publication_date.field_type, Some(FieldType::DateTime));

    let kinds: Vec<OperationType> = books.operations.iter().map(|op| op.kind).collect();
    assert_eq!(
        kinds,
        vec![
            OperationType::List,
            OperationType::Create,
            OperationType::Show,
            OperationType::Edit,
            OperationType::Delete,
        ]
    );

    // The query parameter of the collection GET is carried eagerly.
    assert_eq!(books.parameters.len(), 1);
    assert_eq!(books.parameters[0].variable, "page");
    assert_eq!(books.parameters[0].range.as_deref(), Some("integer"));

    // The $ref field resolves to the books resource.
    let (_, reviews) = api.find_resource("reviews").expect("reviews resource");
    let book_field = reviews.field("book").expect("book field");
    assert_eq!(book_field.reference, Some(ResourceRef::Resolved(book_id)));
}

#[test]
fn spec_without_matching_schema_still_yields_operations() {
    let openapi_json = r#"{
        "openapi": "3.0.0",
        "info": { "title": "Minimal", "version": "1" },
        "paths": {
            "/things": {
                "get": {
                    "operationId": "listThings",
                    "responses": { "200": { "description": "OK" } }
                }
            }
        }
    }"#;

    let api = OpenApiParser::from_json(openapi_json)
        .expect("valid spec")
        .parse()
        .expect("convertible");

    assert_eq!(api.resources.len(), 1);
    let things = &api.resources[0];
    assert_eq!(things.name, "things");
    assert!(things.fields.is_empty());
    assert_eq!(things.operations.len(), 1);
    assert_eq!(things.operations[0].kind, OperationType::List);
}
