//! Draftsmith - Generate Java classes from draw.io class drawings.
//!
//! Resolution of the drawing into a class model, and emission of one source
//! file per class. Boxes become classes, hollow-headed arrows become
//! `extends` clauses and labeled arrows become typed fields with accessors.

pub mod config;
pub mod emit;

mod error;

pub use draftsmith_core::{identifier, model, naming};

pub use error::DraftsmithError;

use log::{debug, info, trace};

use config::AppConfig;
use emit::{GeneratedSource, Renderer, java::JavaRenderer};
use model::ResolvedModel;

/// Builder for resolving drawings and emitting sources.
///
/// # Examples
///
/// ```rust
/// use draftsmith::{CodeGenerator, config::AppConfig};
///
/// let source = r#"
///     <mxGraphModel><root>
///       <mxCell id="0"/>
///       <mxCell id="1" parent="0"/>
///       <mxCell id="car" value="Car" vertex="1" parent="1"/>
///       <mxCell id="engine" value="Engine" vertex="1" parent="1"/>
///       <mxCell id="e" value="has (N)" edge="1" parent="1" source="car" target="engine"/>
///     </root></mxGraphModel>
/// "#;
///
/// let generator = CodeGenerator::new(AppConfig::default());
///
/// // Resolve markup to a class model
/// let model = generator.resolve(source).expect("Failed to resolve");
///
/// // Emit one Java file per class
/// let sources = generator.emit(&model);
/// assert_eq!(sources[0].file_name(), "Car.java");
/// assert!(sources[0].contents().contains("public void addEngine(Engine engine)"));
/// ```
#[derive(Default)]
pub struct CodeGenerator {
    config: AppConfig,
}

impl CodeGenerator {
    /// Create a new generator with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including emission settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve draw.io markup into a class model.
    ///
    /// # Arguments
    ///
    /// * `source` - Contents of a `.drawio` file
    ///
    /// # Errors
    ///
    /// Returns `DraftsmithError::Parse` when the markup is not well-formed or
    /// is not a draw.io document.
    pub fn resolve(&self, source: &str) -> Result<ResolvedModel, DraftsmithError> {
        info!("Resolving drawing");

        let model = draftsmith_parser::resolve(source)
            .map_err(|err| DraftsmithError::new_parse_error(err, source))?;

        debug!("Drawing resolved successfully");
        trace!(model:?; "Resolved model");

        Ok(model)
    }

    /// Emit Java sources for every class of `model`.
    pub fn emit(&self, model: &ResolvedModel) -> Vec<GeneratedSource> {
        self.emit_with(model, &JavaRenderer)
    }

    /// Emit sources for every class of `model` with a custom renderer.
    pub fn emit_with(&self, model: &ResolvedModel, renderer: &dyn Renderer) -> Vec<GeneratedSource> {
        info!(classes = model.entity_count(); "Emitting sources");
        emit::emit(model, renderer, self.config.emit())
    }

    /// Resolve `source` and emit Java sources in one step.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CodeGenerator::resolve`].
    pub fn generate(&self, source: &str) -> Result<Vec<GeneratedSource>, DraftsmithError> {
        let model = self.resolve(source)?;
        Ok(self.emit(&model))
    }
}
