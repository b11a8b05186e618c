use crate::app::models::{RenamePlan, RenameReport};
use colored::Colorize;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn generate_plan(plan: &RenamePlan) -> String {
        let count = plan.ops.len();
        let word = if count == 1 { "item" } else { "items" };
        let mut output = format!(
            "Renaming {} {} (prefix '{}'):\n",
            count,
            word,
            plan.prefix.bold()
        );

        for op in &plan.ops {
            let marker = if op.is_dir { "/" } else { "" };
            output.push_str(&format!(
                "  {}{} -> {}{}\n",
                op.from_display,
                marker,
                op.to_display.green(),
                marker
            ));
        }

        if plan.skipped > 0 {
            output.push_str(&format!("  ({} left unchanged)\n", plan.skipped));
        }

        output.trim_end().to_string()
    }

    pub fn generate_summary(report: &RenameReport) -> String {
        let mut out = format!("Renamed {}", report.renamed.len());
        if !report.failed.is_empty() {
            out.push_str(&format!(", {}", format!("{} failed", report.failed.len()).red()));
        }
        out
    }
}
