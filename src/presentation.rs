//! Presentation of engine results for the calculator front end
//!
//! Nothing in [`crate::rating`] depends on this module. Deviations shown to a
//! user are on the display scale (`engine deviation * deviation_scale`).

use crate::config::DisplaySettings;
use crate::rating::{DeltaCategory, MatchupReport, MatchupSide};

/// Style class for a rating change category
pub fn css_class(category: DeltaCategory) -> &'static str {
    match category {
        DeltaCategory::StrongUp => "rating-up",
        DeltaCategory::WeakUp => "rating-barely-up",
        DeltaCategory::WeakDown => "rating-barely-down",
        DeltaCategory::StrongDown => "rating-down",
    }
}

/// Always-signed delta with one fractional digit, e.g. `+12.3`
pub fn format_delta(delta: f64) -> String {
    format!("{:+.1}", delta)
}

/// Whole-number percentage, e.g. `63%`
pub fn format_probability(p: f64) -> String {
    format!("{:.0}%", p * 100.0)
}

/// Engine deviation converted to the rounded display scale
pub fn display_deviation(deviation: f64, scale: f64) -> f64 {
    (deviation * scale).round()
}

/// Deviation typed by a user converted to the engine scale
pub fn engine_deviation(input: f64, scale: f64) -> f64 {
    input / scale
}

fn render_side(label: &str, side: &MatchupSide, display: &DisplaySettings) -> String {
    format!(
        "{:<9} {:>7.1} {:>6} {:>8} ({}) {:>8} ({}) {:>6}\n",
        label,
        side.rating.value(),
        display_deviation(side.rating.deviation(), display.deviation_scale),
        format_delta(side.win_delta),
        css_class(side.win_category),
        format_delta(side.loss_delta),
        css_class(side.loss_category),
        display_deviation(side.new_deviation, display.deviation_scale),
    )
}

/// Text table describing a matchup
pub fn render_report(report: &MatchupReport, display: &DisplaySettings) -> String {
    let win_chance = if display.perceptual_probability {
        report.perceptual_win_probability
    } else {
        report.win_probability
    };

    let mut out = format!("Expected outcome: {}\n", format_probability(win_chance));
    out.push_str(&format!(
        "{:<9} {:>7} {:>6} {:>8} {:>8} {:>6}\n",
        "", "rating", "dev", "win", "loss", "new dev"
    ));
    out.push_str(&render_side("own", &report.own, display));
    out.push_str(&render_side("opponent", &report.opponent, display));
    out
}
