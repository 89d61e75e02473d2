//! Vocabulary IRIs used while walking expanded documents

/// Prefix of the Hydra core vocabulary; used to filter Hydra-internal
/// terms out of `returns` values.
pub const HYDRA: &str = "http://www.w3.org/ns/hydra/core";

pub const HYDRA_API_DOCUMENTATION: &str = "http://www.w3.org/ns/hydra/core#apiDocumentation";
pub const HYDRA_SUPPORTED_CLASS: &str = "http://www.w3.org/ns/hydra/core#supportedClass";
pub const HYDRA_SUPPORTED_PROPERTY: &str = "http://www.w3.org/ns/hydra/core#supportedProperty";
pub const HYDRA_SUPPORTED_OPERATION: &str = "http://www.w3.org/ns/hydra/core#supportedOperation";
pub const HYDRA_PROPERTY: &str = "http://www.w3.org/ns/hydra/core#property";
pub const HYDRA_TITLE: &str = "http://www.w3.org/ns/hydra/core#title";
pub const HYDRA_DESCRIPTION: &str = "http://www.w3.org/ns/hydra/core#description";
pub const HYDRA_METHOD: &str = "http://www.w3.org/ns/hydra/core#method";
pub const HYDRA_EXPECTS: &str = "http://www.w3.org/ns/hydra/core#expects";
pub const HYDRA_RETURNS: &str = "http://www.w3.org/ns/hydra/core#returns";
pub const HYDRA_READABLE: &str = "http://www.w3.org/ns/hydra/core#readable";
/// Both spellings occur in the wild, depending on the documentation
/// generator.
pub const HYDRA_WRITEABLE: &str = "http://www.w3.org/ns/hydra/core#writeable";
pub const HYDRA_WRITABLE: &str = "http://www.w3.org/ns/hydra/core#writable";
pub const HYDRA_REQUIRED: &str = "http://www.w3.org/ns/hydra/core#required";
pub const HYDRA_MEMBER: &str = "http://www.w3.org/ns/hydra/core#member";
pub const HYDRA_LINK: &str = "http://www.w3.org/ns/hydra/core#Link";

pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
pub const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
pub const OWL_DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";
