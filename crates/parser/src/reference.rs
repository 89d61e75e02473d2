//! Second-pass reference resolution shared by every parser
//!
//! Forward references are common: a field recorded while building one
//! resource may point at a resource enumerated later. Every parser
//! therefore records targets as pending IRIs first and calls this pass
//! once the full resource list exists.

use std::collections::HashMap;

use api_doc_parser_common::{Resource, ResourceId, ResourceRef};

/// Rewrite every pending IRI in `resources` into the index of the resource
/// whose `id` matches, dropping references nothing matches.
pub(crate) fn resolve_resource_references(resources: &mut [Resource]) {
    let by_id: HashMap<String, ResourceId> = resources
        .iter()
        .enumerate()
        .filter_map(|(index, resource)| resource.id.clone().map(|id| (id, ResourceId(index))))
        .collect();

    for resource in resources.iter_mut() {
        for field in &mut resource.fields {
            field.reference = resolve(field.reference.take(), &by_id);
            field.embedded = resolve(field.embedded.take(), &by_id);
        }
    }
}

fn resolve(
    reference: Option<ResourceRef>,
    by_id: &HashMap<String, ResourceId>,
) -> Option<ResourceRef> {
    match reference {
        Some(ResourceRef::Unresolved(iri)) => by_id.get(&iri).copied().map(ResourceRef::Resolved),
        other => other,
    }
}
