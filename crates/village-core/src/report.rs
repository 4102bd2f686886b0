//! End-of-day aggregate reports.

use village_agents::AgentRoster;
use village_types::{DayReport, Tenths};
use village_world::Environment;

use crate::config::ReportFormat;
use crate::tick::DayTotals;

/// Build the report for `day` from the end-of-day state.
///
/// Must be called after the day's last tick and before the field
/// regenerates. Averages use [`Tenths::mean_half_even`]; an empty roster
/// reports `0.0`.
pub fn day_report(
    day: u32,
    roster: &AgentRoster,
    environment: &Environment,
    totals: DayTotals,
    starvation_threshold: u32,
) -> DayReport {
    let count = u64::try_from(roster.len()).unwrap_or(u64::MAX);
    DayReport {
        day,
        basket: environment.basket(),
        avg_hunger: Tenths::mean_half_even(roster.total_hunger(), count).unwrap_or_default(),
        avg_energy: Tenths::mean_half_even(roster.total_energy(), count).unwrap_or_default(),
        gathered: totals.gathered,
        eaten: totals.eaten,
        starvation_warnings: roster.starving_count(starvation_threshold),
    }
}

/// Encode a report as a single line in the configured format.
pub fn render(report: &DayReport, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => serde_json::to_string(report),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use village_agents::Agent;
    use village_types::AgentId;

    use super::*;

    fn roster() -> AgentRoster {
        AgentRoster::from_agents(vec![
            Agent::with_vitals(AgentId::new(0), 96, 10),
            Agent::with_vitals(AgentId::new(1), 40, 75),
            Agent::with_vitals(AgentId::new(2), 95, 0),
            Agent::with_vitals(AgentId::new(3), 10, 100),
        ])
    }

    #[test]
    fn report_aggregates_end_of_day_state() {
        let totals = DayTotals {
            gathered: 7,
            eaten: 5,
        };
        let report = day_report(2, &roster(), &Environment::new(4, 33), totals, 95);
        assert_eq!(
            report,
            DayReport {
                day: 2,
                basket: 4,
                // 241 / 4 = 60.25 -> 60.2 (half-to-even)
                avg_hunger: Tenths(602),
                // 185 / 4 = 46.25 -> 46.2 (half-to-even)
                avg_energy: Tenths(462),
                gathered: 7,
                eaten: 5,
                starvation_warnings: 2,
            }
        );
    }

    #[test]
    fn empty_roster_reports_zero_averages() {
        let report = day_report(
            1,
            &AgentRoster::default(),
            &Environment::new(0, 0),
            DayTotals::default(),
            95,
        );
        assert_eq!(report.avg_hunger, Tenths(0));
        assert_eq!(report.starvation_warnings, 0);
    }

    #[test]
    fn render_text_and_json() {
        let report = day_report(1, &roster(), &Environment::new(0, 0), DayTotals::default(), 95);
        let text = render(&report, ReportFormat::Text).unwrap();
        assert!(text.starts_with("Day 1: basket=0, avg_hunger=60.2, avg_energy=46.2,"));

        let json = render(&report, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["day"], 1);
        assert_eq!(value["starvation_warnings"], 2);
        assert!(!json.contains('\n'));
    }
}
