use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, StatCardData, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let rounded = (val * 100.0).round() / 100.0;
            let int_part = rounded.trunc() as i64;
            let cents = ((rounded.abs() - (int_part.abs() as f64)) * 100.0).round() as i64;
            let sign = if rounded < 0.0 && int_part == 0 { "-" } else { "" };
            format!("{}{}{}.{:02}", currency, sign, format_thousands(int_part), cents)
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Arrow and modifier class of a change badge; ±0.5% counts as flat
fn change_badge(pct: f64) -> (&'static str, &'static str) {
    if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    }
}

#[component]
pub fn StatCard(card: StatCardData) -> impl IntoView {
    let StatCardData { meta, value } = card;

    let status_class = match value.status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = match value.value {
        Some(v) => format_value(v, &meta.format),
        None => "-".to_string(),
    };

    let change_view = value.change_percent.map(|pct| {
        let (arrow, cls) = change_badge(pct);
        view! { <span class=cls>{format!("{}{:.1}%", arrow, pct.abs())}</span> }
    });

    let subtitle_view = value
        .subtitle
        .map(|s| view! { <div class="stat-card__subtitle">{s}</div> });

    view! {
        <div class=status_class data-indicator=meta.id.0.clone()>
            <div class="stat-card__icon">
                {icon(&meta.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{meta.label.clone()}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_thousands() {
        assert_eq!(format_value(1248.0, &ValueFormat::Integer), "1,248");
        assert_eq!(format_value(18.0, &ValueFormat::Integer), "18");
        assert_eq!(format_value(-1234567.0, &ValueFormat::Integer), "-1,234,567");
    }

    #[test]
    fn test_percent_decimals() {
        assert_eq!(format_value(93.11, &ValueFormat::Percent { decimals: 1 }), "93.1%");
        assert_eq!(format_value(89.7, &ValueFormat::Percent { decimals: 0 }), "90%");
    }

    #[test]
    fn test_money() {
        let fmt = ValueFormat::Money {
            currency: "$".to_string(),
        };
        assert_eq!(format_value(12500.5, &fmt), "$12,500.50");
        assert_eq!(format_value(3.0, &fmt), "$3.00");
    }

    #[test]
    fn test_change_badge_flat_band() {
        assert_eq!(change_badge(0.4).0, "");
        assert_eq!(change_badge(4.3).0, "\u{2191}");
        assert_eq!(change_badge(-2.0).0, "\u{2193}");
    }
}
