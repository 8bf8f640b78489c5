//! Instance fields of a class together with their accessor names.

use crate::error::{SynthError, SynthResult};
use beanweave_core::{ClassNode, OTHER_ATTRIBUTES_FIELD, TypeRef};
use tracing::debug;

/// A non-static field and the public base name of its accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceField {
    pub name: String,
    pub ty: TypeRef,

    /// `Name` in `getName`
    pub accessor: String,
}

/// Instance fields declared directly on `class`, in declaration order.
///
/// Every field must have a schema property, except the any-attribute map
/// which uses its own name as accessor name.
pub fn all_instance_fields(class: &ClassNode) -> SynthResult<Vec<InstanceField>> {
    let mut fields = Vec::with_capacity(class.fields.len());
    for field in &class.fields {
        if field.is_static {
            debug!("Ignoring static field '{}' of {}", field.name, class.name);
            continue;
        }

        let accessor = match class.property(&field.name) {
            Some(property) => property.public_name.clone(),
            None if field.name == OTHER_ATTRIBUTES_FIELD => field.name.clone(),
            None => {
                return Err(SynthError::UnknownProperty {
                    class: class.name.clone(),
                    field: field.name.clone(),
                    known: class.properties.iter().map(|p| p.name.clone()).collect(),
                });
            }
        };

        fields.push(InstanceField {
            name: field.name.clone(),
            ty: field.ty.clone(),
            accessor,
        });
    }
    Ok(fields)
}
