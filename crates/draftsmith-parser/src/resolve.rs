//! Two-pass resolution of a drawing into a [`ResolvedModel`].
//!
//! The first pass classifies every cell in document order, turning entities
//! into the entity map and edges into relationships, and remembers which
//! relationship each edge id produced. The second pass stitches detached
//! labels onto the association of their owning edge through that map.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, info, warn};
use roxmltree::Document;

use draftsmith_core::{
    identifier::CellId,
    model::{Association, Entity, Inheritance, Relationship, ResolvedModel},
};

use crate::{
    cell::Cell,
    error::{Diagnostic, ErrorCode, ParseError},
    label::{RelationLabel, parse_label},
    span::Span,
    style::CellStyle,
};

/// Root element names of a draw.io document.
const ROOT_TAGS: [&str; 2] = ["mxfile", "mxGraphModel"];

/// What an edge turned into during the first pass.
#[derive(Debug, Clone, Copy)]
enum EdgeSlot {
    Inheritance,
    Association(usize),
}

/// Classify an edge by its head: open heads are generalizations.
fn classify_edge(source: &str, target: &str, text: &str, style: &CellStyle<'_>) -> Relationship {
    if style.has_open_head() {
        return Relationship::Inheritance(Inheritance::new(source, target));
    }

    let RelationLabel { name, cardinality } = parse_label(text);
    Relationship::Association(Association::new(source, target, name, cardinality))
}

#[derive(Debug, Default)]
struct Resolver<'a> {
    entities: IndexMap<CellId, Entity>,
    associations: Vec<Association>,
    inheritances: Vec<Inheritance>,
    edges: HashMap<&'a str, EdgeSlot>,
    labels: Vec<(&'a str, String)>,
    cells: usize,
}

impl<'a> Resolver<'a> {
    fn ingest(&mut self, cell: Cell<'a>) {
        self.cells += 1;

        match cell {
            Cell::Entity { id, name } => {
                let entity = Entity::new(id, name);
                if let Some(previous) = self.entities.insert(CellId::new(id), entity) {
                    debug!(
                        id = id,
                        replaced = previous.display_name();
                        "Duplicate entity id, keeping the later cell"
                    );
                }
            }
            Cell::Edge {
                id,
                source,
                target,
                text,
                style,
            } => {
                let slot = match classify_edge(source, target, &text, &style) {
                    Relationship::Inheritance(inheritance) => {
                        if !text.is_empty() {
                            debug!(id = id, text = text.as_str(); "Ignoring text on inheritance edge");
                        }
                        self.inheritances.push(inheritance);
                        EdgeSlot::Inheritance
                    }
                    Relationship::Association(association) => {
                        self.associations.push(association);
                        EdgeSlot::Association(self.associations.len() - 1)
                    }
                };
                self.edges.insert(id, slot);
            }
            Cell::Label { owner, text } => self.labels.push((owner, text)),
            Cell::Ignored => {}
        }
    }

    fn finish(self) -> ResolvedModel {
        let Resolver {
            entities,
            mut associations,
            inheritances,
            edges,
            labels,
            ..
        } = self;

        for (owner, text) in labels {
            match edges.get(owner) {
                Some(EdgeSlot::Association(index)) => {
                    let association = &mut associations[*index];
                    if association.label().is_empty() {
                        let RelationLabel { name, cardinality } = parse_label(&text);
                        association.relabel(name, cardinality);
                    } else {
                        debug!(
                            edge = owner,
                            text = text.as_str();
                            "Edge already labeled, ignoring detached label"
                        );
                    }
                }
                Some(EdgeSlot::Inheritance) => {
                    debug!(edge = owner; "Ignoring detached label on inheritance edge");
                }
                None => {
                    debug!(owner = owner, text = text.as_str(); "Detached label has no owning edge");
                }
            }
        }

        ResolvedModel::new(entities, associations, inheritances)
    }
}

fn markup_error(source: &str, err: &roxmltree::Error) -> ParseError {
    let pos = err.pos();
    Diagnostic::error(format!("{}: {err}", ErrorCode::E001.description()))
        .with_code(ErrorCode::E001)
        .with_label(Span::at_position(source, pos.row, pos.col), "markup breaks here")
        .with_help("make sure the file is an uncompressed draw.io XML export")
        .into()
}

fn check_root(document: &Document<'_>) -> Result<(), ParseError> {
    let root = document.root_element();
    let name = root.tag_name().name();
    if ROOT_TAGS.contains(&name) {
        return Ok(());
    }

    // The element starts with `<` followed by its tag name.
    let start = root.range().start;
    let span = Span::new(start..start + 1 + name.len());

    Err(Diagnostic::error(format!("root element is `{name}`"))
        .with_code(ErrorCode::E002)
        .with_label(span, "expected `mxfile` or `mxGraphModel`")
        .with_help("open the file in draw.io and export it as XML")
        .into())
}

/// Compressed drawings keep their cells in an encoded `<diagram>` payload.
fn has_encoded_payload(document: &Document<'_>) -> bool {
    document.descendants().any(|node| {
        node.has_tag_name("diagram") && node.text().is_some_and(|text| !text.trim().is_empty())
    })
}

/// Resolve draw.io markup into the canonical model.
///
/// Resolution never rejects a drawing for what it models; dangling
/// references, duplicate names and stray labels are carried or dropped
/// silently. It fails only when `source` is not well-formed XML ([`ErrorCode::E001`])
/// or not a draw.io document ([`ErrorCode::E002`]).
///
/// # Example
///
/// ```
/// # use draftsmith_parser::resolve;
/// let source = r#"
/// <mxGraphModel><root>
///   <mxCell id="0"/>
///   <mxCell id="1" parent="0"/>
///   <mxCell id="a" value="Car" vertex="1" parent="1"/>
///   <mxCell id="b" value="Engine" vertex="1" parent="1"/>
///   <mxCell id="e" value="has (N)" edge="1" source="a" target="b" parent="1"/>
/// </root></mxGraphModel>"#;
///
/// let model = resolve(source).expect("valid drawing");
/// assert_eq!(model.entity_count(), 2);
/// assert_eq!(model.associations()[0].label(), "has");
/// ```
pub fn resolve(source: &str) -> Result<ResolvedModel, ParseError> {
    let document = Document::parse(source).map_err(|err| markup_error(source, &err))?;
    check_root(&document)?;

    let mut resolver = Resolver::default();
    for node in document
        .descendants()
        .filter(|node| node.has_tag_name("mxCell"))
    {
        resolver.ingest(Cell::ingest(node));
    }

    if resolver.cells == 0 && has_encoded_payload(&document) {
        warn!("Drawing is stored compressed; no cells could be read");
    }

    let model = resolver.finish();
    info!(
        entities = model.entity_count(),
        associations = model.associations().len(),
        inheritances = model.inheritances().len();
        "Model resolved"
    );

    Ok(model)
}
