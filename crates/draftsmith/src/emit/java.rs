//! Java source backend.

use super::{
    Renderer,
    plan::{ClassPlan, FieldPlan},
    writer::SourceWriter,
};
use crate::config::EmitConfig;

const LIST_IMPORTS: [&str; 2] = ["java.util.ArrayList", "java.util.List"];

/// Renders a [`ClassPlan`] as a plain Java class with a no-argument
/// constructor, getters, setters and `add` methods for list fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaRenderer;

impl JavaRenderer {
    fn declared_type(field: &FieldPlan) -> String {
        if field.is_collection() {
            format!("List<{}>", field.element_type())
        } else {
            field.element_type().to_string()
        }
    }

    fn write_accessors(writer: &mut SourceWriter, field: &FieldPlan) {
        let declared = Self::declared_type(field);
        let suffix = field.accessor_suffix();
        let name = field.name();

        writer.blank();
        writer.open(format!("public {declared} get{suffix}()"));
        writer.line(format!("return this.{name};"));
        writer.close();

        writer.blank();
        writer.open(format!("public void set{suffix}({declared} {name})"));
        writer.line(format!("this.{name} = {name};"));
        writer.close();

        if field.is_collection() {
            let element = field.element_type();
            let parameter = field.element_parameter();

            writer.blank();
            writer.open(format!("public void add{element}({element} {parameter})"));
            writer.line(format!("this.{name}.add({parameter});"));
            writer.close();
        }
    }
}

impl Renderer for JavaRenderer {
    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn render(&self, plan: &ClassPlan, config: &EmitConfig) -> String {
        let mut writer = SourceWriter::new(config.indent());

        if let Some(package) = config.package() {
            writer.line(format!("package {};", package.trim()));
            writer.blank();
        }

        if plan.has_collections() {
            for import in LIST_IMPORTS {
                writer.line(format!("import {import};"));
            }
            writer.blank();
        }

        let header = match plan.supertype() {
            Some(supertype) => format!("public class {} extends {supertype}", plan.type_name()),
            None => format!("public class {}", plan.type_name()),
        };
        writer.open(header);

        if !plan.fields().is_empty() {
            writer.blank();
            for field in plan.fields() {
                writer.line(format!(
                    "private {} {};",
                    Self::declared_type(field),
                    field.name()
                ));
            }
        }

        writer.blank();
        writer.open(format!("public {}()", plan.type_name()));
        for field in plan.fields().iter().filter(|field| field.is_collection()) {
            writer.line(format!("this.{} = new ArrayList<>();", field.name()));
        }
        writer.close();

        for field in plan.fields() {
            Self::write_accessors(&mut writer, field);
        }

        writer.close();
        writer.finish()
    }
}
