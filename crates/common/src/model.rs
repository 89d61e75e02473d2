//! The normalized API model
//!
//! All parsers populate the same entities: an [`Api`] owning a list of
//! [`Resource`]s, each described by [`Field`]s, [`Operation`]s and query
//! [`Parameter`]s. Links between resources are expressed as indices
//! ([`ResourceId`]) into [`Api::resources`], never as owning pointers.

use serde::{Deserialize, Serialize};

/// Index of a resource inside [`Api::resources`].
///
/// Used as a non-owning back-reference from [`Field::reference`] and
/// [`Field::embedded`]: the resources themselves stay owned by the `Api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub usize);

/// A link from a field to another resource.
///
/// During the first construction pass the target is only known by IRI; the
/// second pass rewrites every `Unresolved` entry to `Resolved`, or drops it
/// when no resource carries that IRI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceRef {
    /// Target IRI recorded while the resource list is still being built.
    Unresolved(String),
    /// Index of the target resource in [`Api::resources`].
    Resolved(ResourceId),
}

impl ResourceRef {
    /// The resolved target, if the second pass matched one.
    pub fn resolved(&self) -> Option<ResourceId> {
        match self {
            ResourceRef::Resolved(id) => Some(*id),
            ResourceRef::Unresolved(_) => None,
        }
    }

    /// The pending IRI, if still unresolved.
    pub fn iri(&self) -> Option<&str> {
        match self {
            ResourceRef::Unresolved(iri) => Some(iri),
            ResourceRef::Resolved(_) => None,
        }
    }
}

/// Field type in the normalized model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Object,
    List(Box<FieldType>),
    Map(Box<FieldType>, Box<FieldType>),
}

/// Operation category, derived from the HTTP method and whether the
/// operation acts on a collection or on a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Show,
    Edit,
    Delete,
    List,
    Create,
}

/// An operation permitted on a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub kind: OperationType,
    pub method: Option<String>,
    /// IRI or schema name of the expected payload.
    pub expects: Option<String>,
    /// IRI or schema name of the returned payload. `owl:Nothing` is kept
    /// as-is: the absence of a return payload is itself meaningful.
    pub returns: Option<String>,
    /// RDF types of the operation, when the format provides them.
    pub types: Vec<String>,
    pub deprecated: bool,
}

/// A query parameter accepted by a resource collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub variable: String,
    pub range: Option<String>,
    pub required: bool,
    pub description: String,
    pub deprecated: bool,
}

/// A field of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// IRI of the underlying property, when the format provides one.
    pub id: Option<String>,
    /// Range IRI or type name (an XSD datatype, a class IRI, a schema name).
    pub range: Option<String>,
    pub field_type: Option<FieldType>,
    /// Link to another resource. Mutually exclusive with `embedded`.
    pub reference: Option<ResourceRef>,
    /// Embedded resource relation. Mutually exclusive with `reference`.
    pub embedded: Option<ResourceRef>,
    pub readable: bool,
    pub writable: bool,
    pub required: bool,
    pub description: Option<String>,
    pub max_cardinality: Option<u64>,
    pub deprecated: bool,
}

impl Field {
    /// A field with the given name and every other attribute at its
    /// neutral value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            range: None,
            field_type: None,
            reference: None,
            embedded: None,
            readable: true,
            writable: true,
            required: false,
            description: None,
            max_cardinality: None,
            deprecated: false,
        }
    }
}

/// A resource exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Short identifier derived from the URL suffix relative to the API
    /// entrypoint (e.g. `books`).
    pub name: String,
    pub url: String,
    /// IRI or schema name of the class backing this resource.
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub operations: Vec<Operation>,
    /// Query parameters. Filled eagerly by the document-based parsers;
    /// the Hydra parser leaves this empty and exposes an on-demand
    /// parameter fetch instead.
    pub parameters: Vec<Parameter>,
    pub deprecated: bool,
}

impl Resource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            id: None,
            title: None,
            description: None,
            fields: Vec::new(),
            operations: Vec::new(),
            parameters: Vec::new(),
            deprecated: false,
        }
    }

    /// Fields readable through the API. Borrows the same [`Field`]
    /// instances held in [`Resource::fields`].
    pub fn readable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.readable)
    }

    /// Fields writable through the API. Borrows the same [`Field`]
    /// instances held in [`Resource::fields`].
    pub fn writable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.writable)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A parsed API: the entrypoint URL and the resources discovered behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    pub entrypoint: String,
    pub title: Option<String>,
    pub resources: Vec<Resource>,
}

impl Api {
    /// An API with no resources, as also produced by a failed parse.
    pub fn new(entrypoint: impl Into<String>) -> Self {
        Self {
            entrypoint: entrypoint.into(),
            title: None,
            resources: Vec::new(),
        }
    }

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.0)
    }

    /// Look up a resource by its short name.
    pub fn find_resource(&self, name: &str) -> Option<(ResourceId, &Resource)> {
        self.resources
            .iter()
            .enumerate()
            .find(|(_, r)| r.name == name)
            .map(|(i, r)| (ResourceId(i), r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resource() -> Resource {
        let mut resource = Resource::new("books", "https://example.com/books");
        let mut isbn = Field::new("isbn");
        isbn.readable = true;
        isbn.writable = false;
        let mut archived = Field::new("archived");
        archived.readable = false;
        archived.writable = true;
        resource.fields = vec![isbn, archived];
        resource
    }

    #[test]
    fn field_views_borrow_the_same_instances() {
        let resource = sample_resource();

        let readable: Vec<&Field> = resource.readable_fields().collect();
        let writable: Vec<&Field> = resource.writable_fields().collect();

        assert_eq!(readable.len(), 1);
        assert_eq!(writable.len(), 1);
        assert!(std::ptr::eq(readable[0], &resource.fields[0]));
        assert!(std::ptr::eq(writable[0], &resource.fields[1]));
    }

    #[test]
    fn resource_lookup_by_name() {
        let mut api = Api::new("https://example.com/");
        api.resources.push(sample_resource());

        let (id, resource) = api.find_resource("books").expect("resource exists");
        assert_eq!(id, ResourceId(0));
        assert_eq!(resource.url, "https://example.com/books");
        assert!(api.find_resource("reviews").is_none());
    }

    #[test]
    fn resource_ref_accessors() {
        let pending = ResourceRef::Unresolved("https://example.com/docs#Book".into());
        assert_eq!(pending.iri(), Some("https://example.com/docs#Book"));
        assert_eq!(pending.resolved(), None);

        let resolved = ResourceRef::Resolved(ResourceId(2));
        assert_eq!(resolved.resolved(), Some(ResourceId(2)));
        assert_eq!(resolved.iri(), None);
    }
}
