//! Example: Generating sources from a hand-built model
//!
//! This example builds a class model directly, without a drawing, and prints
//! the Java source of every class.

use draftsmith::{CodeGenerator, model::{Cardinality, ResolvedModel}};

fn main() {
    println!("Building model...\n");

    let model = ResolvedModel::builder()
        .entity("vehicle", "Vehicle")
        .entity("car", "Car")
        .entity("engine", "Engine")
        .entity("seat", "Seat")
        .inheritance("car", "vehicle")
        .association("car", "engine", "is powered by", Cardinality::Single)
        .association("car", "seat", "has", Cardinality::Many)
        .build();

    let generator = CodeGenerator::default();

    for source in generator.emit(&model) {
        println!("// {}", source.file_name());
        println!("{}", source.contents());
    }
}
