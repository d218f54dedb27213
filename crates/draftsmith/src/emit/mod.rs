//! Source emission for resolved models.
//!
//! This module turns a [`ResolvedModel`] into one source file per entity. It
//! is the last stage of the pipeline:
//!
//! ```text
//! draw.io markup
//!     ↓ resolve
//! ResolvedModel
//!     ↓ plan (naming, supertype, fields)
//! ClassPlan per entity
//!     ↓ render (this module)
//! GeneratedSource per entity
//! ```
//!
//! Planning is independent of the target language. A [`Renderer`] formats a
//! plan; [`java::JavaRenderer`] is the built-in backend.

/// Java backend.
pub mod java;

mod plan;
mod writer;

pub use plan::{ClassPlan, FieldKind, FieldPlan};

use log::debug;

use draftsmith_core::model::ResolvedModel;

use crate::config::EmitConfig;

/// Abstraction for source backends.
///
/// Implementors format a [`ClassPlan`] into the complete text of one source
/// file. Rendering is pure: the same plan and configuration always produce
/// the same text.
pub trait Renderer {
    /// Extension of generated files, without the leading dot.
    fn file_extension(&self) -> &'static str;

    /// Renders the full contents of one source file.
    fn render(&self, plan: &ClassPlan, config: &EmitConfig) -> String;
}

/// The rendered source of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    type_name: String,
    file_name: String,
    contents: String,
}

impl GeneratedSource {
    /// Returns the generated type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the file name, `<TypeName>.<extension>`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Renders every entity of `model`, in entity order.
///
/// Entities whose display names map to the same type name produce sources
/// with the same file name; the later one wins once written to disk.
pub fn emit(
    model: &ResolvedModel,
    renderer: &dyn Renderer,
    config: &EmitConfig,
) -> Vec<GeneratedSource> {
    model
        .entities()
        .map(|entity| {
            let plan = ClassPlan::for_entity(model, entity);
            let contents = renderer.render(&plan, config);
            let file_name = format!("{}.{}", plan.type_name(), renderer.file_extension());

            debug!(
                type_name = plan.type_name(),
                fields = plan.fields().len();
                "Rendered type"
            );

            GeneratedSource {
                type_name: plan.type_name().to_string(),
                file_name,
                contents,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use draftsmith_core::model::Cardinality;

    use super::*;
    use super::java::JavaRenderer;

    fn emit_java(model: &ResolvedModel) -> Vec<GeneratedSource> {
        emit(model, &JavaRenderer, &EmitConfig::default())
    }

    #[test]
    fn test_one_source_per_entity() {
        let model = ResolvedModel::builder()
            .entity("a", "Car")
            .entity("b", "Engine")
            .entity("c", "fuel tank")
            .association("a", "b", "has", Cardinality::Many)
            .build();

        let names: Vec<_> = emit_java(&model)
            .iter()
            .map(|source| source.file_name().to_string())
            .collect();
        assert_eq!(names, ["Car.java", "Engine.java", "FuelTank.java"]);
    }

    #[test]
    fn test_car_has_many_engines() {
        let model = ResolvedModel::builder()
            .entity("A", "Car")
            .entity("B", "Engine")
            .association("A", "B", "has", Cardinality::Many)
            .build();

        let sources = emit_java(&model);
        let car = sources[0].contents();

        assert_eq!(sources[0].type_name(), "Car");
        assert!(car.contains("    private List<Engine> engines;\n"));
        assert!(car.contains("        this.engines = new ArrayList<>();\n"));
        assert!(car.contains("    public List<Engine> getEngines() {\n"));
        assert!(car.contains("    public void setEngines(List<Engine> engines) {\n"));
        assert!(car.contains("    public void addEngine(Engine engine) {\n"));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let model = ResolvedModel::builder()
            .entity("a", "Car")
            .entity("b", "Wheel")
            .association("a", "b", "", Cardinality::Many)
            .association("a", "b", "", Cardinality::Many)
            .build();

        assert_eq!(emit_java(&model), emit_java(&model));
    }

    #[test]
    fn test_duplicate_display_names_share_file_name() {
        let model = ResolvedModel::builder()
            .entity("a", "Car")
            .entity("b", "car")
            .build();

        let sources = emit_java(&model);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].file_name(), sources[1].file_name());
    }

    #[test]
    fn test_empty_model() {
        assert!(emit_java(&ResolvedModel::default()).is_empty());
    }
}
