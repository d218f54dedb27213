//! Integration tests for the CodeGenerator API

use draftsmith::{
    CodeGenerator, DraftsmithError,
    config::{AppConfig, EmitConfig},
    emit::{ClassPlan, Renderer},
};

const DRAWING: &str = r#"
<mxfile host="app.diagrams.net">
  <diagram id="d" name="Page-1">
    <mxGraphModel>
      <root>
        <mxCell id="0"/>
        <mxCell id="1" parent="0"/>
        <mxCell id="car" value="Car" vertex="1" parent="1"/>
        <mxCell id="wheel" value="Wheel" vertex="1" parent="1"/>
        <mxCell id="vehicle" value="&lt;b&gt;Vehicle&lt;/b&gt;" vertex="1" parent="1"/>
        <mxCell id="e1" value="" edge="1" parent="1" source="car" target="wheel"/>
        <mxCell id="e1-label" value="has (N)" vertex="1" connectable="0" parent="e1"/>
        <mxCell id="e2" edge="1" parent="1" source="car" target="vehicle" style="endArrow=block;endFill=0;"/>
      </root>
    </mxGraphModel>
  </diagram>
</mxfile>
"#;

#[test]
fn test_builder_api_exists() {
    let _generator = CodeGenerator::default();
}

#[test]
fn test_resolve_drawing() {
    let generator = CodeGenerator::default();
    let model = generator.resolve(DRAWING).expect("Failed to resolve drawing");

    assert_eq!(model.entity_count(), 3);
    assert_eq!(model.associations().len(), 1);
    assert_eq!(model.associations()[0].label(), "has");
    assert_eq!(model.inheritances().len(), 1);
}

#[test]
fn test_generate_drawing() {
    let generator = CodeGenerator::default();
    let sources = generator.generate(DRAWING).expect("Failed to generate");

    let files: Vec<_> = sources.iter().map(|source| source.file_name()).collect();
    assert_eq!(files, ["Car.java", "Wheel.java", "Vehicle.java"]);

    let car = sources[0].contents();
    assert!(car.starts_with("import java.util.ArrayList;\nimport java.util.List;\n\n"));
    assert!(car.contains("public class Car extends Vehicle {\n"));
    assert!(car.contains("    public void addWheel(Wheel wheel) {\n"));
}

#[test]
fn test_malformed_markup_returns_error() {
    let generator = CodeGenerator::default();
    let result = generator.resolve("<mxGraphModel><root>");

    match result {
        Err(DraftsmithError::Parse { err, src }) => {
            assert_eq!(src, "<mxGraphModel><root>");
            assert!(!err.diagnostics().is_empty());
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(EmitConfig::new(2, Some("fleet".to_string())));
    let generator = CodeGenerator::new(config);

    let sources = generator.generate(DRAWING).expect("Failed to generate");
    let wheel = sources[1].contents();

    assert_eq!(wheel, "package fleet;\n\npublic class Wheel {\n\n  public Wheel() {\n  }\n}\n");
}

#[test]
fn test_builder_reusability() {
    let generator = CodeGenerator::default();

    let first = generator.generate(DRAWING).expect("Failed to generate first");
    let second = generator.generate(DRAWING).expect("Failed to generate second");

    assert_eq!(first, second);
}

struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, plan: &ClassPlan, _config: &EmitConfig) -> String {
        let fields: Vec<_> = plan.fields().iter().map(|field| field.name()).collect();
        format!("{}: {}\n", plan.type_name(), fields.join(", "))
    }
}

#[test]
fn test_custom_renderer() {
    let generator = CodeGenerator::default();
    let model = generator.resolve(DRAWING).expect("Failed to resolve drawing");
    let sources = generator.emit_with(&model, &OutlineRenderer);

    assert_eq!(sources[0].file_name(), "Car.txt");
    assert_eq!(sources[0].contents(), "Car: wheels\n");
}
