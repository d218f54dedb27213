//! Ingestion of raw `mxCell` elements.
//!
//! Each `mxCell` of a drawing is classified exactly once into a [`Cell`]. The
//! resolver only ever matches on the variant, never on raw attributes.

use log::trace;
use roxmltree::Node;

use crate::{style::CellStyle, text::strip_markup};

/// Ids of the implicit root cell and the default layer present in every drawing.
const RESERVED_IDS: [&str; 2] = ["0", "1"];

/// Wrapper elements draw.io uses for cells that carry custom properties.
const WRAPPER_TAGS: [&str; 2] = ["object", "UserObject"];

/// A classified drawing cell.
#[derive(Debug, Clone)]
pub(crate) enum Cell<'a> {
    /// A connectable vertex with text; becomes a type.
    Entity { id: &'a str, name: String },
    /// A connector with both endpoints.
    Edge {
        id: &'a str,
        source: &'a str,
        target: &'a str,
        text: String,
        style: CellStyle<'a>,
    },
    /// Free-floating text attached to another cell.
    Label { owner: &'a str, text: String },
    /// Anything else: reserved cells, layers, decorations, empty shapes.
    Ignored,
}

/// Identity and text of a cell, read from its wrapper element when present.
struct Identity<'a> {
    id: Option<&'a str>,
    text: &'a str,
}

fn identity<'a>(cell: Node<'a, '_>) -> Identity<'a> {
    let wrapper = cell
        .parent_element()
        .filter(|parent| WRAPPER_TAGS.contains(&parent.tag_name().name()));

    match wrapper {
        Some(wrapper) => Identity {
            id: wrapper.attribute("id"),
            text: wrapper.attribute("label").unwrap_or_default(),
        },
        None => Identity {
            id: cell.attribute("id"),
            text: cell.attribute("value").unwrap_or_default(),
        },
    }
}

fn is_set(cell: Node<'_, '_>, flag: &str) -> bool {
    cell.attribute(flag) == Some("1")
}

impl<'a> Cell<'a> {
    /// Classify an `mxCell` element.
    pub(crate) fn ingest(cell: Node<'a, '_>) -> Self {
        let Identity { id, text } = identity(cell);

        if id.is_some_and(|id| RESERVED_IDS.contains(&id)) {
            return Cell::Ignored;
        }

        let connectable = cell.attribute("connectable") != Some("0");

        if is_set(cell, "vertex") && connectable {
            let name = strip_markup(text);
            return match id {
                Some(id) if !name.is_empty() => Cell::Entity { id, name },
                _ => {
                    trace!(id = id.unwrap_or_default(); "Skipping vertex without name or id");
                    Cell::Ignored
                }
            };
        }

        if is_set(cell, "edge") {
            return match (id, cell.attribute("source"), cell.attribute("target")) {
                (Some(id), Some(source), Some(target)) => Cell::Edge {
                    id,
                    source,
                    target,
                    text: strip_markup(text),
                    style: CellStyle::parse(cell.attribute("style").unwrap_or_default()),
                },
                _ => {
                    trace!(id = id.unwrap_or_default(); "Skipping edge without both endpoints");
                    Cell::Ignored
                }
            };
        }

        if connectable {
            return Cell::Ignored;
        }

        let text = strip_markup(text);
        match cell.attribute("parent") {
            Some(owner) if !text.is_empty() => Cell::Label { owner, text },
            _ => Cell::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use roxmltree::Document;

    use super::*;

    fn ingest_all(xml: &str) -> Vec<String> {
        let doc = Document::parse(xml).expect("test markup is well-formed");
        doc.descendants()
            .filter(|node| node.has_tag_name("mxCell"))
            .map(|node| match Cell::ingest(node) {
                Cell::Entity { id, name } => format!("entity {id} {name}"),
                Cell::Edge {
                    id,
                    source,
                    target,
                    text,
                    style,
                } => format!(
                    "edge {id} {source}->{target} '{text}' open={}",
                    style.has_open_head()
                ),
                Cell::Label { owner, text } => format!("label {owner} '{text}'"),
                Cell::Ignored => "ignored".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_reserved_cells_are_ignored() {
        let cells = ingest_all(
            r#"<root>
                <mxCell id="0"/>
                <mxCell id="1" parent="0"/>
            </root>"#,
        );
        assert_eq!(cells, ["ignored", "ignored"]);
    }

    #[test]
    fn test_vertex_classification() {
        let cells = ingest_all(
            r#"<root>
                <mxCell id="2" value="&lt;b&gt;Car&lt;/b&gt;" vertex="1" parent="1"/>
                <mxCell id="3" value="" vertex="1" parent="1"/>
                <mxCell id="4" value="  " vertex="1" connectable="1" parent="1"/>
            </root>"#,
        );
        assert_eq!(cells, ["entity 2 Car", "ignored", "ignored"]);
    }

    #[test]
    fn test_edge_classification() {
        let cells = ingest_all(
            r#"<root>
                <mxCell id="e1" value="has (N)" edge="1" source="2" target="3" style="endArrow=classic;"/>
                <mxCell id="e2" edge="1" source="3" target="4" style="endArrow=block;endFill=0;"/>
                <mxCell id="e3" value="dangling" edge="1" source="3"/>
            </root>"#,
        );
        assert_eq!(
            cells,
            [
                "edge e1 2->3 'has (N)' open=false",
                "edge e2 3->4 '' open=true",
                "ignored",
            ]
        );
    }

    #[test]
    fn test_label_classification() {
        let cells = ingest_all(
            r#"<root>
                <mxCell id="l1" value="owns (N)" style="edgeLabel;" vertex="1" connectable="0" parent="e1"/>
                <mxCell id="l2" value="" vertex="1" connectable="0" parent="e1"/>
                <mxCell id="l3" value="text" vertex="1" connectable="0"/>
            </root>"#,
        );
        assert_eq!(cells, ["label e1 'owns (N)'", "ignored", "ignored"]);
    }

    #[test]
    fn test_wrapped_cells_use_wrapper_identity() {
        let cells = ingest_all(
            r#"<root>
                <object id="7" label="Licence plate" owner="fleet">
                    <mxCell vertex="1" parent="1"/>
                </object>
                <UserObject id="8" label="has (1)">
                    <mxCell edge="1" source="2" target="7" parent="1"/>
                </UserObject>
            </root>"#,
        );
        assert_eq!(
            cells,
            ["entity 7 Licence plate", "edge 8 2->7 'has (1)' open=false"]
        );
    }
}
