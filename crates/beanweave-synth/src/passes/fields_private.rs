//! Private fields.

use crate::error::SynthResult;
use crate::report::{Outcome, PassReport};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::{ClassKind, Visibility};
use tracing::{debug, info};

/// Makes every field of every generated class private.
pub struct FieldsPrivate;

impl FieldsPrivate {
    pub const OPTION: &'static str = "Xph-fields-private";
}

impl Synthesizer for FieldsPrivate {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "mark all fields as private"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);

        for class in ctx
            .model
            .classes
            .iter_mut()
            .filter(|c| c.kind != ClassKind::Enum)
        {
            let mut touched = false;
            for field in class
                .fields
                .iter_mut()
                .filter(|f| f.visibility != Visibility::Private)
            {
                debug!("Making {}.{} private", class.name, field.name);
                field.visibility = Visibility::Private;
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
