//! Console summary of a resolved drawing.

use std::io::{self, Write};

use draftsmith::model::ResolvedModel;

/// Name printed for relationship endpoints that are not known classes.
const UNKNOWN: &str = "?";

fn display_name<'a>(model: &'a ResolvedModel, id: &str) -> &'a str {
    model
        .entity(id)
        .map_or(UNKNOWN, |entity| entity.display_name())
}

/// Writes the counts and the class, association and inheritance listings.
pub fn write_model_summary(out: &mut impl Write, model: &ResolvedModel) -> io::Result<()> {
    writeln!(
        out,
        "Found {} classes, {} associations, {} inheritance relationships.",
        model.entity_count(),
        model.associations().len(),
        model.inheritances().len()
    )?;
    writeln!(out)?;

    writeln!(out, "Classes:")?;
    for entity in model.entities() {
        writeln!(out, "  - {}", entity.display_name())?;
    }

    writeln!(out)?;
    writeln!(out, "Associations:")?;
    for association in model.associations() {
        writeln!(
            out,
            "  - {} --{} ({})--> {}",
            display_name(model, association.source().as_str()),
            association.label(),
            association.cardinality(),
            display_name(model, association.target().as_str())
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Inheritance:")?;
    for inheritance in model.inheritances() {
        writeln!(
            out,
            "  - {} extends {}",
            display_name(model, inheritance.child().as_str()),
            display_name(model, inheritance.parent().as_str())
        )?;
    }

    Ok(())
}
