//! Integration test for the GraphQL introspection parser

use api_doc_parser::graphql::GraphQlParser;
use api_doc_parser_common::{FieldType, ResourceRef};

#[test]
fn parses_a_library_introspection_result() {
    let introspection_json = r##"{
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": { "name": "Mutation" },
                "types": [
                    {
                        "kind": "OBJECT",
                        "name": "Query",
                        "fields": [
                            {
                                "name": "book",
                                "type": { "kind": "OBJECT", "name": "Book" }
                            }
                        ]
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Mutation",
                        "fields": []
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Book",
                        "description": "A book.",
                        "fields": [
                            {
                                "name": "isbn",
                                "type": {
                                    "kind": "NON_NULL",
                                    "ofType": { "kind": "SCALAR", "name": "String" }
                                }
                            },
                            {
                                "name": "name",
                                "type": {
                                    "kind": "NON_NULL",
                                    "ofType": { "kind": "SCALAR", "name": "String" }
                                }
                            },
                            {
                                "name": "reviews",
                                "type": {
                                    "kind": "LIST",
                                    "ofType": { "kind": "OBJECT", "name": "Review" }
                                }
                            }
                        ]
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Review",
                        "fields": [
                            {
                                "name": "body",
                                "type": { "kind": "SCALAR", "name": "String" }
                            },
                            {
                                "name": "rating",
                                "type": {
                                    "kind": "NON_NULL",
                                    "ofType": { "kind": "SCALAR", "name": "Int" }
                                }
                            },
                            {
                                "name": "book",
                                "type": { "kind": "OBJECT", "name": "Book" },
                                "isDeprecated": true,
                                "deprecationReason": "Use itemReviewed instead"
                            }
                        ]
                    },
                    {
                        "kind": "SCALAR",
                        "name": "String"
                    },
                    {
                        "kind": "OBJECT",
                        "name": "__Schema",
                        "fields": []
                    }
                ]
            }
        }
    }"##;

    let api = GraphQlParser::from_json(introspection_json, "https://library.example.com/graphql")
        .expect("valid introspection")
        .parse()
        .expect("convertible");

    // Query, Mutation, scalars and __Schema are not resources.
    assert_eq!(api.resources.len(), 2);
    assert_eq!(api.entrypoint, "https://library.example.com/graphql");

    let (book_id, book) = api.find_resource("Book").expect("Book resource");
    assert_eq!(book.description.as_deref(), Some("A book."));
    assert_eq!(book.url, "https://library.example.com/graphql#Book");

    let isbn = book.field("isbn").expect("isbn field");
    assert!(isbn.required);
    assert_eq!(isbn.field_type, Some(FieldType::String));

    let (review_id, review) = api.find_resource("Review").expect("Review resource");
    let rating = review.field("rating").expect("rating field");
    assert_eq!(rating.field_type, Some(FieldType::Integer));
    assert!(rating.required);

    // Object fields link the two resources in both directions.
    let book_ref = review.field("book").expect("book field");
    assert_eq!(book_ref.reference, Some(ResourceRef::Resolved(book_id)));
    assert!(book_ref.deprecated);
    let reviews_ref = book.field("reviews").expect("reviews field");
    assert_eq!(reviews_ref.reference, Some(ResourceRef::Resolved(review_id)));
}
