//! The `check` command

use anyhow::{Context, Result};
use beanweave_core::{ClassKind, ClassNode, CodeModel, PropertyKind};
use beanweave_synth::{SynthError, all_instance_fields};
use std::path::Path;

pub fn run(model_path: &Path) -> Result<()> {
    println!("Checking class model: {}", model_path.display());

    let model = CodeModel::from_file(model_path)
        .with_context(|| format!("Failed to load class model: {}", model_path.display()))?;

    let problems = find_problems(&model);
    for problem in &problems {
        println!("✗ {}", problem);
    }
    if !problems.is_empty() {
        anyhow::bail!("{} problem(s) found in {}", problems.len(), model_path.display());
    }

    let enums = model
        .classes
        .iter()
        .filter(|c| c.kind == ClassKind::Enum)
        .count();
    println!("✓ Classes: {}", model.classes.len() - enums);
    println!("✓ Enums: {}", enums);
    println!("✓ Object factories: {}", model.object_factories.len());
    println!("✓ External types: {}", model.external.len());
    println!("\nClass model is valid!");

    Ok(())
}

/// Fields without accessor names and properties without backing fields.
fn find_problems(model: &CodeModel) -> Vec<SynthError> {
    let mut problems = Vec::new();
    for class in model.classes.iter().filter(|c| c.kind != ClassKind::Enum) {
        if let Err(e) = all_instance_fields(class) {
            problems.push(e);
        }
        problems.extend(unbacked_properties(class));
    }
    problems
}

fn unbacked_properties(class: &ClassNode) -> impl Iterator<Item = SynthError> + '_ {
    class
        .properties
        .iter()
        .filter(|p| !matches!(p.kind, PropertyKind::Reference) && class.field(&p.name).is_none())
        .map(|p| SynthError::MissingField {
            class: class.name.clone(),
            field: p.name.clone(),
        })
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
