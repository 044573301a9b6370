//! Format sweep reports for human consumption.

use crate::driver::SweepReport;
use crate::trace::CheckpointOutcome;

/// Render a [`SweepReport`] as readable text.
///
/// Shows the sweep totals and the successful attempt's checkpoint
/// sequence. The layout is for humans; tooling should consume the
/// serialized report instead.
pub fn format_report(report: &SweepReport) -> String {
    let mut output = String::new();

    output.push_str("═══════════════════════════════════════════════════════\n");
    output.push_str("  Fault Sweep Report\n");
    output.push_str("═══════════════════════════════════════════════════════\n\n");

    output.push_str(&format!("Attempts:              {}\n", report.attempts));
    output.push_str(&format!("Succeeded at budget:   {}\n", report.budget));
    output.push_str(&format!(
        "Checkpoints on success path: {}\n",
        report.checkpoints.len()
    ));
    output.push('\n');

    if !report.checkpoints.is_empty() {
        output.push_str("─── Success-path checkpoints ──────────────────────────\n");
        for ev in &report.checkpoints {
            let marker = match ev.outcome {
                CheckpointOutcome::Pass => "ok    ",
                CheckpointOutcome::Failed => "FAIL  ",
                CheckpointOutcome::Injected => "INJECT",
            };
            match &ev.location {
                Some(loc) => {
                    output.push_str(&format!("{:>4}. {marker} {}  [{loc}]\n", ev.ordinal + 1, ev.label))
                }
                None => output.push_str(&format!("{:>4}. {marker} {}\n", ev.ordinal + 1, ev.label)),
            }
        }
        output.push('\n');
    }

    output.push_str("═══════════════════════════════════════════════════════\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::CheckpointEvent;

    #[test]
    fn report_lists_checkpoints_in_order() {
        let report = SweepReport {
            budget: 2,
            attempts: 3,
            checkpoints: vec![
                CheckpointEvent {
                    ordinal: 0,
                    label: "open".to_string(),
                    location: Some("demo.rs:10".to_string()),
                    outcome: CheckpointOutcome::Pass,
                },
                CheckpointEvent {
                    ordinal: 1,
                    label: "bind".to_string(),
                    location: None,
                    outcome: CheckpointOutcome::Pass,
                },
            ],
        };

        let text = format_report(&report);
        assert!(text.contains("Attempts:              3"));
        assert!(text.contains("Succeeded at budget:   2"));
        let open_at = text.find("1. ok     open").unwrap();
        let bind_at = text.find("2. ok     bind").unwrap();
        assert!(open_at < bind_at);
        assert!(text.contains("[demo.rs:10]"));
    }

    #[test]
    fn empty_trace_omits_checkpoint_section() {
        let report = SweepReport {
            budget: 0,
            attempts: 1,
            checkpoints: Vec::new(),
        };
        let text = format_report(&report);
        assert!(!text.contains("Success-path checkpoints"));
    }
}
