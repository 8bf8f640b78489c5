//! `@NullMarked` on every package holding generated classes.

use crate::error::SynthResult;
use crate::report::{Outcome, PassReport};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::{Annotation, ClassKind};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Annotates the `package-info` of each package containing a generated
/// class. The default package cannot carry annotations and is skipped.
pub struct PackageNullMarked;

impl PackageNullMarked {
    pub const OPTION: &'static str = "Xph-package-null-marked";
}

impl Synthesizer for PackageNullMarked {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "add @org.jspecify.annotations.NullMarked annotations to package-info.java"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);
        let marker = ctx.config.runtime.null_marked.clone();
        let note = ctx.config.package_note(Self::OPTION);

        let packages: BTreeSet<String> = ctx
            .model
            .classes
            .iter()
            .filter(|c| c.kind != ClassKind::Enum)
            .map(|c| c.package().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        for name in packages {
            let package = ctx.model.package_mut(&name);
            if package.has_annotation(&marker) {
                debug!("Package {} is already null-marked", name);
                continue;
            }
            package.annotations.push(Annotation::new(&marker));
            if !package.javadoc.contains(&note) {
                package.javadoc.push(note.clone());
            }
            report.record(Outcome::Synthesized);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::test_support::{class_with, model_of, run_pass};
    use beanweave_core::{ClassNode, java};

    #[test]
    fn PackageNullMarked___packages_of_classes___are_annotated_once() {
        let model = model_of(vec![
            class_with("com.example.PartyType", None, &[]),
            class_with("com.example.OrderType", None, &[]),
            class_with("com.example.cac.LineType", None, &[]),
        ]);

        let (model, report) = run_pass(&PackageNullMarked, model);

        let names: Vec<&str> = model.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["com.example", "com.example.cac"]);
        assert_eq!(report.members_added, 2);
        assert_eq!(
            java::render_package_info(&model.packages[0]),
            "/**\n * <p>This class was annotated by ph-jaxb-plugin -Xph-package-null-marked</p>\n */\n\
             @org.jspecify.annotations.NullMarked\npackage com.example;\n"
        );
    }

    #[test]
    fn PackageNullMarked___enum_only_and_default_packages___are_skipped() {
        let mut color = ClassNode::new("com.example.codes.ColorType");
        color.kind = ClassKind::Enum;
        let model = model_of(vec![color, class_with("Unpackaged", None, &[])]);

        let (model, report) = run_pass(&PackageNullMarked, model);

        assert!(model.packages.is_empty());
        assert_eq!(report.members_added, 0);
    }
}
