//! The canonical class model.
//!
//! A [`ResolvedModel`] is the immutable snapshot the resolver hands to the
//! emitter: every entity keyed by its cell id in drawing order, every
//! association in resolution order, and every inheritance pair.
//!
//! Endpoint ids on relationships are not checked against the entity map.
//! Consumers are expected to skip references that do not resolve.

use std::fmt;

use indexmap::IndexMap;

use crate::identifier::CellId;

/// A node of the drawing that becomes a generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: CellId,
    display_name: String,
}

impl Entity {
    /// Creates an entity from its cell id and the (already cleaned) label text.
    pub fn new(id: impl Into<CellId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns the cell id this entity was created from.
    pub fn id(&self) -> &CellId {
        &self.id
    }

    /// Returns the free-form name shown in the drawing.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// How many instances of the target an association holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// A single related instance.
    #[default]
    Single,
    /// An ordered collection of related instances.
    Many,
}

impl Cardinality {
    /// Returns `true` for [`Cardinality::Many`].
    pub fn is_many(self) -> bool {
        matches!(self, Cardinality::Many)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Single => write!(f, "1"),
            Cardinality::Many => write!(f, "N"),
        }
    }
}

/// A directed, labeled relationship that produces a field on its source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    source: CellId,
    target: CellId,
    label: String,
    cardinality: Cardinality,
}

impl Association {
    /// Creates an association from `source` to `target`.
    pub fn new(
        source: impl Into<CellId>,
        target: impl Into<CellId>,
        label: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            cardinality,
        }
    }

    /// Returns the id of the entity owning the field.
    pub fn source(&self) -> &CellId {
        &self.source
    }

    /// Returns the id of the entity the field refers to.
    pub fn target(&self) -> &CellId {
        &self.target
    }

    /// Returns the relation name, which may be empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the cardinality of the relation.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Replaces the label and cardinality.
    ///
    /// Only meaningful while a model is being assembled; a [`ResolvedModel`]
    /// hands out shared references exclusively.
    pub fn relabel(&mut self, label: impl Into<String>, cardinality: Cardinality) {
        self.label = label.into();
        self.cardinality = cardinality;
    }
}

/// A child type extending a parent type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inheritance {
    child: CellId,
    parent: CellId,
}

impl Inheritance {
    /// Creates an inheritance pair.
    pub fn new(child: impl Into<CellId>, parent: impl Into<CellId>) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
        }
    }

    /// Returns the id of the extending entity.
    pub fn child(&self) -> &CellId {
        &self.child
    }

    /// Returns the id of the extended entity.
    pub fn parent(&self) -> &CellId {
        &self.parent
    }
}

/// A resolved edge of the drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    Inheritance(Inheritance),
    Association(Association),
}

/// Immutable snapshot produced by resolution and consumed by emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedModel {
    entities: IndexMap<CellId, Entity>,
    associations: Vec<Association>,
    inheritances: Vec<Inheritance>,
}

impl ResolvedModel {
    /// Creates a model from its three collections.
    pub fn new(
        entities: IndexMap<CellId, Entity>,
        associations: Vec<Association>,
        inheritances: Vec<Inheritance>,
    ) -> Self {
        Self {
            entities,
            associations,
            inheritances,
        }
    }

    /// Starts an empty [`ModelBuilder`].
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    /// Returns the entities in drawing order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Returns the number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Looks up an entity by cell id.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Returns all associations in resolution order.
    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    /// Returns all inheritance pairs in resolution order.
    pub fn inheritances(&self) -> &[Inheritance] {
        &self.inheritances
    }

    /// Returns the associations whose source is `id`, in resolution order.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Association> + 'a {
        self.associations
            .iter()
            .filter(move |association| association.source().as_str() == id)
    }

    /// Returns the parent id declared for `child`.
    ///
    /// When the drawing declares several parents, the last one wins.
    pub fn parent_of(&self, child: &str) -> Option<&CellId> {
        self.inheritances
            .iter()
            .rev()
            .find(|inheritance| inheritance.child().as_str() == child)
            .map(Inheritance::parent)
    }
}

/// Incremental constructor for a [`ResolvedModel`].
///
/// # Example
///
/// ```
/// # use draftsmith_core::model::{Cardinality, ResolvedModel};
/// let model = ResolvedModel::builder()
///     .entity("a", "Car")
///     .entity("b", "Engine")
///     .association("a", "b", "has", Cardinality::Many)
///     .build();
///
/// assert_eq!(model.entity_count(), 2);
/// assert_eq!(model.outgoing("a").count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ModelBuilder {
    entities: IndexMap<CellId, Entity>,
    associations: Vec<Association>,
    inheritances: Vec<Inheritance>,
}

impl ModelBuilder {
    /// Adds an entity. Re-using an id replaces the name but keeps the position.
    pub fn entity(mut self, id: &str, display_name: impl Into<String>) -> Self {
        self.entities
            .insert(CellId::new(id), Entity::new(id, display_name));
        self
    }

    /// Adds an association.
    pub fn association(
        mut self,
        source: &str,
        target: &str,
        label: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        self.associations
            .push(Association::new(source, target, label, cardinality));
        self
    }

    /// Adds an inheritance pair.
    pub fn inheritance(mut self, child: &str, parent: &str) -> Self {
        self.inheritances.push(Inheritance::new(child, parent));
        self
    }

    /// Adds a relationship of either kind.
    pub fn relationship(mut self, relationship: Relationship) -> Self {
        match relationship {
            Relationship::Inheritance(inheritance) => self.inheritances.push(inheritance),
            Relationship::Association(association) => self.associations.push(association),
        }
        self
    }

    /// Finishes the model.
    pub fn build(self) -> ResolvedModel {
        ResolvedModel::new(self.entities, self.associations, self.inheritances)
    }
}
