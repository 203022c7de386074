//! Presentation helpers. Rounding and grouping happen here, never in the core.

use roof_core::{CostBreakdown, EstimateRequest};

/// Whole dollars with thousands separators: `12345.6` -> `$12,346`
pub fn usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped)
}

/// Square feet with separators: `1647` -> `1,647 sq ft`
pub fn sqft(area: f64) -> String {
    format!("{} sq ft", usd(area).trim_start_matches('$'))
}

pub fn status_icon(applies: bool) -> &'static str {
    if applies {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Multi-line report for a priced request.
pub fn breakdown_report(request: &EstimateRequest, material_label: &str, b: &CostBreakdown) -> String {
    let rule = "═══════════════════════════════════════";
    let mut out = String::new();
    out.push_str(&format!("{}\n  ROOFING ESTIMATE\n{}\n\n", rule, rule));
    out.push_str("Project:\n");
    out.push_str(&format!("  Category:   {}\n", request.category));
    out.push_str(&format!("  Area:       {}\n", sqft(request.area_sqft)));
    out.push_str(&format!("  Material:   {}\n", material_label));
    out.push_str(&format!("  Job type:   {}\n", request.job_type));
    out.push_str(&format!("  Complexity: {}\n", request.complexity));
    out.push_str(&format!(
        "  Add-ons:    {} tear-off  {} permits\n\n",
        status_icon(request.tearoff),
        status_icon(request.permits)
    ));
    out.push_str("Breakdown (mid):\n");
    out.push_str(&format!("  Materials:  {:>12}\n", usd(b.materials)));
    out.push_str(&format!("  Labor:      {:>12}\n", usd(b.labor)));
    out.push_str(&format!("  Add-ons:    {:>12}\n\n", usd(b.addons)));
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!(
        "  ESTIMATE: {} (range {} – {})\n",
        usd(b.total_mid),
        usd(b.total_low),
        usd(b.total_high)
    ));
    out.push_str(rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_grouping() {
        assert_eq!(usd(0.0), "$0");
        assert_eq!(usd(999.4), "$999");
        assert_eq!(usd(1000.0), "$1,000");
        assert_eq!(usd(8156.0), "$8,156");
        assert_eq!(usd(1234567.5), "$1,234,568");
        assert_eq!(usd(-2500.0), "-$2,500");
    }

    #[test]
    fn test_sqft() {
        assert_eq!(sqft(1647.0), "1,647 sq ft");
        assert_eq!(sqft(50_000.0), "50,000 sq ft");
    }
}
