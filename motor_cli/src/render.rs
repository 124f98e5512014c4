//! Text rendering of sizing results for the terminal.

use std::fmt::{self, Display, Formatter};

use motor_core::hoist::{HoistInput, HoistResult};
use motor_core::recommendations::EnvironmentComparison;
use motor_core::SizingReport;

/// Electricity tariff used for the running-cost estimate (USD/kWh)
const TARIFF_USD_PER_KWH: f64 = 0.10;

const RULE: &str = "================================================================================";

/// Format a number with thousands separators and `decimals` fraction digits
fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    if value.is_sign_negative() && value != 0.0 {
        out.insert(0, '-');
    }
    out
}

fn status(ok: bool) -> &'static str {
    if ok { "[OK]" } else { "[CHECK]" }
}

struct SizingReportView<'a>(&'a SizingReport);

impl Display for SizingReportView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let spec = &report.specification;
        let result = &report.result;
        let rec = &report.recommendations;

        writeln!(f, "{RULE}")?;
        writeln!(f, "  MARINE MOTOR SIZING REPORT - {}", report.meta.label)?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "Input:")?;
        writeln!(f, "  Load capacity:     {} t", grouped(spec.load_capacity_ton, 1))?;
        writeln!(f, "  Operating speed:   {} rpm", grouped(spec.operating_speed_rpm, 0))?;
        writeln!(f, "  Drum radius:       {:.2} m", spec.drum_radius_m)?;
        writeln!(f, "  System efficiency: {:.1}%", spec.system_efficiency * 100.0)?;
        writeln!(f, "  Safety factor:     {:.2}", spec.safety_factor)?;
        writeln!(f, "  Environment:       {}", spec.environment)?;
        writeln!(f, "  Classification:    {} (x{:.1})", spec.classification, result.classification_safety_factor)?;
        writeln!(f)?;
        writeln!(f, "Results:")?;
        writeln!(f, "  Basic torque:      {} N·m", grouped(result.basic_torque_nm, 0))?;
        writeln!(f, "  Corrected torque:  {} N·m", grouped(result.corrected_torque_nm, 0))?;
        writeln!(f, "  Required torque:   {} N·m", grouped(result.required_torque_nm, 0))?;
        writeln!(f, "  Motor power:       {} kW", grouped(result.motor_power_kw, 1))?;
        writeln!(f, "  Optimal gear:      {:.1}:1", result.optimal_gear_ratio)?;
        writeln!(f, "  Minimum gear:      {:.1}:1", result.minimum_gear_ratio)?;
        if let Some(rms) = result.rms_torque_nm {
            writeln!(f, "  RMS torque:        {} N·m", grouped(rms, 1))?;
        }
        writeln!(f)?;
        writeln!(f, "Environmental corrections:")?;
        for (name, value) in result.environmental_corrections.entries() {
            writeln!(f, "  {name:<12} {value:.3}")?;
        }
        writeln!(f)?;
        writeln!(f, "Recommendations:")?;
        writeln!(f, "  Motor rating:      >= {} kW (10% margin)", grouped(rec.min_motor_power_kw, 0))?;
        match rec.recommended_standard_power_kw {
            Some(rating) => writeln!(f, "  Standard motor:    {rating} kW")?,
            None => writeln!(f, "  Standard motor:    none (exceeds 500 kW catalogue)")?,
        }
        writeln!(f, "  Gearbox capacity:  >= {} N·m (20% margin)", grouped(rec.min_gearbox_torque_nm, 0))?;
        writeln!(
            f,
            "  Inertia ratio:     {:.1}:1 (recommended <= {:.0}:1) {}",
            rec.inertia_ratio,
            rec.recommended_max_inertia_ratio,
            status(rec.inertia_ratio_ok)
        )?;
        writeln!(f)?;
        writeln!(f, "Running cost (continuous operation at {TARIFF_USD_PER_KWH:.2} USD/kWh):")?;
        let daily_kwh = result.motor_power_kw * 24.0;
        writeln!(f, "  Energy:            {} kWh/day", grouped(daily_kwh, 0))?;
        writeln!(f, "  Annual cost:       {} USD", grouped(daily_kwh * 365.0 * TARIFF_USD_PER_KWH, 0))?;
        writeln!(f, "{RULE}")
    }
}

struct ComparisonView<'a>(&'a [EnvironmentComparison]);

impl Display for ComparisonView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Environment comparison:")?;
        writeln!(f, "  {:<10} {:>8} {:>16} {:>14}", "Env", "Factor", "Torque (N·m)", "Power (kW)")?;
        for c in self.0 {
            writeln!(
                f,
                "  {:<10} {:>8.4} {:>16} {:>14}",
                c.environment.display_name(),
                c.result.environmental_corrections.total,
                grouped(c.result.required_torque_nm, 0),
                grouped(c.result.motor_power_kw, 1)
            )?;
        }
        Ok(())
    }
}

struct HoistView<'a> {
    input: &'a HoistInput,
    result: &'a HoistResult,
}

impl Display for HoistView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (input, result) = (self.input, self.result);

        writeln!(f, "{RULE}")?;
        writeln!(f, "  HOIST MOTOR SIZING")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "  Load:              {} t", grouped(input.load_ton, 1))?;
        writeln!(f, "  Hook speed:        {:.1} m/min ({:.3} m/s)", input.hoist_speed_m_per_min, input.hook_speed_m_per_s())?;
        writeln!(f, "  Drum diameter:     {:.2} m, {} rope parts", input.drum_diameter_m, input.reeving)?;
        writeln!(f)?;
        writeln!(f, "  Hook force:        {} N", grouped(result.hook_force_n, 0))?;
        writeln!(f, "  Line tension:      {} N", grouped(result.line_tension_n, 0))?;
        writeln!(f, "  Drum torque:       {} N·m", grouped(result.drum_torque_nm, 0))?;
        writeln!(f, "  Drum speed:        {:.3} rad/s", result.drum_speed_rad_per_s)?;
        writeln!(f, "  Gear ratio:        {:.1}:1", result.gear_ratio)?;
        writeln!(f, "  Motor torque:      {} N·m", grouped(result.motor_torque_nm, 1))?;
        writeln!(f, "  Motor power:       {:.2} kW", result.motor_power_kw)?;
        writeln!(
            f,
            "  Selected motor:    {} kW @ {:.0} rpm{}",
            result.selected_power_kw,
            input.motor_rpm,
            if result.exceeds_catalogue { " (requirement exceeds catalogue)" } else { "" }
        )?;
        writeln!(f, "{RULE}")
    }
}

/// Full text report for one sizing calculation.
pub fn sizing_report(report: &SizingReport) -> String {
    SizingReportView(report).to_string()
}

/// Table of required torque and power per environment.
pub fn environment_comparison(comparisons: &[EnvironmentComparison]) -> String {
    ComparisonView(comparisons).to_string()
}

/// Text report for a hoist sizing.
pub fn hoist_report(input: &HoistInput, result: &HoistResult) -> String {
    HoistView { input, result }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use motor_core::hoist::size_hoist_motor;
    use motor_core::recommendations::compare_environments;
    use motor_core::{MarineEnvironment, MotorSpecification};

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(2_369_246.57, 0), "2,369,247");
        assert_eq!(grouped(587.367, 1), "587.4");
        assert_eq!(grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(grouped(0.0, 0), "0");
    }

    #[test]
    fn test_sizing_report_contents() {
        let report = SizingReport::generate("W-1", MotorSpecification::container_ship_winch(), None).unwrap();
        let text = sizing_report(&report);
        assert!(text.contains("W-1"));
        assert!(text.contains("Offshore"));
        assert!(text.contains("5.8:1"));
        assert!(text.contains("salinity"));
        assert!(!text.contains("RMS torque"));
    }

    #[test]
    fn test_hoist_report_contents() {
        let input = HoistInput::new(50.0, 10.0);
        let result = size_hoist_motor(&input).unwrap();
        let text = hoist_report(&input, &result);
        assert!(text.contains("132 kW"));
    }

    #[test]
    fn test_environment_comparison_rows() {
        let spec = MotorSpecification::container_ship_winch();
        let comparisons = compare_environments(&spec, &MarineEnvironment::ALL).unwrap();
        let text = environment_comparison(&comparisons);
        assert_eq!(text.lines().count(), 3 + MarineEnvironment::ALL.len());
        assert!(text.contains("Tropical"));
    }
}
