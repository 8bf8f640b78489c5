//! Configured interfaces on every class hierarchy.

use crate::error::{SynthError, SynthResult};
use crate::report::{Outcome, PassReport};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::{ClassKind, ClassRef, Parent};
use tracing::{debug, info};

/// Enums are serializable by the language already.
const SERIALIZABLE: &str = "java.io.Serializable";

/// Adds the interfaces listed in `implements` to every class without a
/// generated superclass and to every enum. Subclasses inherit them.
pub struct Implements;

impl Implements {
    pub const OPTION: &'static str = "Xph-implements";
}

impl Synthesizer for Implements {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "implement the interfaces listed in `implements` in all classes/enums"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let interfaces = interface_names(&ctx.config.implements);
        if interfaces.is_empty() {
            return Err(SynthError::MissingArgument {
                option: Self::OPTION.to_string(),
                what: "interface names separated by ',' or ';'".to_string(),
            });
        }
        let mut report = PassReport::new(Self::OPTION);

        let targets: Vec<(usize, bool)> = ctx
            .model
            .classes
            .iter()
            .enumerate()
            .filter_map(|(index, class)| match class.kind {
                ClassKind::Enum => Some((index, true)),
                ClassKind::Class => match ctx.model.parent_of(class) {
                    Parent::Generated(_) => None,
                    Parent::Root | Parent::External(_) => Some((index, false)),
                },
            })
            .collect();

        for (index, is_enum) in targets {
            let class = &mut ctx.model.classes[index];
            let mut touched = false;
            for interface in &interfaces {
                if is_enum && interface == SERIALIZABLE {
                    continue;
                }
                if class.implements(interface) {
                    debug!("{} already implements {}", class.name, interface);
                    continue;
                }
                class.interfaces.push(ClassRef::new(interface.as_str()));
                report.record(Outcome::Synthesized);
                touched = true;
            }
            if touched {
                report.touch_class();
            }
        }

        Ok(report)
    }
}

/// Entries may themselves hold several names separated by `,` or `;`.
fn interface_names(entries: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in entries
        .iter()
        .flat_map(|e| e.split([',', ';']))
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
