//! Integration test for the Swagger parser

use api_doc_parser::swagger::SwaggerParser;
use api_doc_parser_common::{FieldType, OperationType, ResourceRef};

#[test]
fn parses_a_library_swagger_spec() {
    let swagger_json = r##"{
        "swagger": "2.0",
        "info": {
            "title": "Library API",
            "version": "1.0.0"
        },
        "host": "library.example.com",
        "basePath": "/v2",
        "schemes": ["https"],
        "paths": {
            "/books": {
                "get": {
                    "operationId": "listBooks",
                    "parameters": [
                        {
                            "name": "isbn",
                            "in": "query",
                            "description": "Filter by ISBN",
                            "type": "string"
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "schema": { "$ref": "#/definitions/Book" }
                        }
                    }
                },
                "post": {
                    "operationId": "createBook",
                    "parameters": [
                        {
                            "name": "body",
                            "in": "body",
                            "required": true,
                            "schema": { "$ref": "#/definitions/Book" }
                        }
                    ],
                    "responses": {
                        "201": {
                            "description": "Created",
                            "schema": { "$ref": "#/definitions/Book" }
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
                            "schema": { "$ref": "#/definitions/Book" }
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
                            "schema": { "$ref": "#/definitions/Review" }
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
                            "schema": { "$ref": "#/definitions/Review" }
                        }
                    }
                }
            }
        },
        "definitions": {
            "Book": {
                "type": "object",
                "title": "Book",
                "properties": {
                    "isbn": { "type": "string", "description": "The ISBN of the book" },
                    "name": { "type": "string" },
                    "rating": { "type": "integer" }
                },
                "required": ["isbn", "name"]
            },
            "Review": {
                "type": "object",
                "title": "Review",
                "properties": {
                    "body": { "type": "string" },
                    "book": { "$ref": "#/definitions/Book" },
                    "tags": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                }
            }
        }
    }"##;

    let api = SwaggerParser::from_json(swagger_json)
        .expect("valid spec")
        .parse()
        .expect("convertible");

    assert_eq!(api.title.as_deref(), Some("Library API"));
    assert_eq!(api.entrypoint, "https://library.example.com/v2");
    assert_eq!(api.resources.len(), 2);

    let (book_id, books) = api.find_resource("books").expect("books resource");
    assert_eq!(books.url, "https://library.example.com/v2/books");
    assert_eq!(books.id.as_deref(), Some("Book"));
    assert!(books.field("isbn").expect("isbn field").required);
    assert_eq!(
        books.field("rating").expect("rating field").field_type,
        Some(FieldType::Integer)
    );

    let kinds: Vec<OperationType> = books.operations.iter().map(|op| op.kind).collect();
    assert_eq!(
        kinds,
        vec![
            OperationType::List,
            OperationType::Create,
            OperationType::Show,
            OperationType::Delete,
        ]
    );

    // The body parameter names what the create operation expects.
    let create = books
        .operations
        .iter()
        .find(|op| op.kind == OperationType::Create)
        .expect("create operation");
    assert_eq!(create.expects.as_deref(), Some("#/definitions/Book"));

    assert_eq!(books.parameters.len(), 1);
    assert_eq!(books.parameters[0].variable, "isbn");
    assert_eq!(books.parameters[0].range.as_deref(), Some("string"));

    let (_, reviews) = api.find_resource("reviews").expect("reviews resource");
    let book_field = reviews.field("book").expect("book field");
    assert_eq!(book_field.reference, Some(ResourceRef::Resolved(book_id)));
    let tags = reviews.field("tags").expect("tags field");
    assert_eq!(
        tags.field_type,
        Some(FieldType::List(Box::new(FieldType::String)))
    );
}
