//! Language-neutral class planning.
//!
//! A [`ClassPlan`] captures every naming decision for one entity: its type
//! name, its supertype and the ordered list of fields derived from its
//! outgoing associations. Renderers only format a plan; they never look at
//! the model again.

use std::collections::HashSet;

use log::debug;

use draftsmith_core::{
    model::{Cardinality, Entity, ResolvedModel},
    naming,
};

/// Whether a field holds one value or an ordered collection of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Single,
    Collection,
}

impl From<Cardinality> for FieldKind {
    fn from(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::Single => FieldKind::Single,
            Cardinality::Many => FieldKind::Collection,
        }
    }
}

/// A single field of a planned class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan {
    name: String,
    element_type: String,
    kind: FieldKind,
}

impl FieldPlan {
    /// Returns the field name, already disambiguated.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type name of one element of this field.
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Returns whether this field is a collection.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` for collection fields.
    pub fn is_collection(&self) -> bool {
        self.kind == FieldKind::Collection
    }

    /// Returns the field name with its first character upper-cased, as used
    /// in accessor names.
    pub fn accessor_suffix(&self) -> String {
        naming::upper_first(&self.name)
    }

    /// Returns the parameter name for a single element of a collection field.
    pub fn element_parameter(&self) -> &str {
        naming::singular_parameter(&self.name)
    }
}

/// Everything a renderer needs to write the source of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPlan {
    type_name: String,
    supertype: Option<String>,
    fields: Vec<FieldPlan>,
}

impl ClassPlan {
    /// Plans the class for `entity`.
    ///
    /// Associations whose target is not a known entity are skipped. Field
    /// names that are already taken on this class get
    /// [`naming::COLLISION_SUFFIX`] appended once.
    pub fn for_entity(model: &ResolvedModel, entity: &Entity) -> Self {
        let type_name = naming::type_name(entity.display_name());

        let supertype = model
            .parent_of(entity.id().as_str())
            .and_then(|parent| model.entity(parent.as_str()))
            .map(|parent| naming::type_name(parent.display_name()));

        let mut used_names = HashSet::new();
        let mut fields = Vec::new();

        for association in model.outgoing(entity.id().as_str()) {
            let Some(target) = model.entity(association.target().as_str()) else {
                debug!(
                    source = entity.id().as_str(),
                    target = association.target().as_str();
                    "Dropping field with unknown target"
                );
                continue;
            };

            let element_type = naming::type_name(target.display_name());
            let kind = FieldKind::from(association.cardinality());
            let base = naming::lower_first(&element_type);
            let mut name = match kind {
                FieldKind::Single => base,
                FieldKind::Collection => naming::pluralize(&base),
            };

            if used_names.contains(&name) {
                name.push_str(naming::COLLISION_SUFFIX);
                debug!(type_name = type_name.as_str(), field = name.as_str(); "Renamed colliding field");
            }
            used_names.insert(name.clone());

            fields.push(FieldPlan {
                name,
                element_type,
                kind,
            });
        }

        Self {
            type_name,
            supertype,
            fields,
        }
    }

    /// Returns the type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the supertype name, when the parent is a known entity.
    pub fn supertype(&self) -> Option<&str> {
        self.supertype.as_deref()
    }

    /// Returns the fields in association order.
    pub fn fields(&self) -> &[FieldPlan] {
        &self.fields
    }

    /// Returns `true` when at least one field is a collection.
    pub fn has_collections(&self) -> bool {
        self.fields.iter().any(FieldPlan::is_collection)
    }
}
