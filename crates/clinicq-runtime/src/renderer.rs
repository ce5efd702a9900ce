//! Placeholder rendering
//!
//! Supported tokens (case-sensitive, single pass, never recursive):
//!
//! | token | value |
//! |---|---|
//! | `{PN}` | patient name |
//! | `{PQP}` | patient queue position |
//! | `{CQP}` | current queue position |
//! | `{ETR}` | estimated time remaining |
//! | `{DN}` / `{CN}` | queue display name |
//!
//! Unknown `{...}` sequences are left untouched.

use crate::options::DEFAULT_ESTIMATED_MINUTES_PER_SESSION;

const MINUTE_UNIT: &str = "دقيقة";
const HOUR_UNIT: &str = "ساعة";
const UNIT_JOINER: &str = " و ";

/// Values available to a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderContext<'a> {
    pub patient_name: &'a str,
    pub queue_name: &'a str,
    pub patient_position: i64,
    pub current_queue_position: i64,
    pub offset: i64,
    pub estimated_minutes_per_session: i64,
}

impl<'a> PlaceholderContext<'a> {
    /// Create a context with the default ETS
    pub fn new(
        patient_name: &'a str,
        queue_name: &'a str,
        patient_position: i64,
        current_queue_position: i64,
    ) -> Self {
        Self {
            patient_name,
            queue_name,
            patient_position,
            current_queue_position,
            offset: patient_position.saturating_sub(current_queue_position),
            estimated_minutes_per_session: DEFAULT_ESTIMATED_MINUTES_PER_SESSION,
        }
    }

    /// Override the estimated minutes per session
    pub fn with_estimated_minutes(mut self, minutes: i64) -> Self {
        self.estimated_minutes_per_session = minutes;
        self
    }

    fn lookup(&self, token: &str) -> Option<String> {
        match token {
            "PN" => Some(self.patient_name.to_string()),
            "PQP" => Some(self.patient_position.to_string()),
            "CQP" => Some(self.current_queue_position.to_string()),
            "ETR" => Some(PlaceholderRenderer::format_etr(
                PlaceholderRenderer::compute_etr_minutes(
                    self.offset,
                    self.estimated_minutes_per_session,
                ),
            )),
            "DN" | "CN" => Some(self.queue_name.to_string()),
            _ => None,
        }
    }
}

/// Substitutes message variables with computed values
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// Render `template` against `ctx`
    pub fn render(template: &str, ctx: &PlaceholderContext<'_>) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let substitution = after
                .find('}')
                .and_then(|end| ctx.lookup(&after[..end]).map(|value| (end, value)));

            match substitution {
                Some((end, value)) => {
                    out.push_str(&value);
                    rest = &after[end + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// `offset * ets` for waiting or serving patients, `0` otherwise
    pub fn compute_etr_minutes(offset: i64, estimated_minutes_per_session: i64) -> i64 {
        if offset >= 0 {
            offset.saturating_mul(estimated_minutes_per_session)
        } else {
            0
        }
    }

    /// Format minutes as Arabic hours and minutes, dropping zero components
    pub fn format_etr(minutes: i64) -> String {
        if minutes <= 0 {
            return format!("0 {}", MINUTE_UNIT);
        }

        let hours = minutes / 60;
        let remainder = minutes % 60;

        match (hours, remainder) {
            (0, m) => format!("{} {}", m, MINUTE_UNIT),
            (h, 0) => format!("{} {}", h, HOUR_UNIT),
            (h, m) => format!("{} {}{}{} {}", h, HOUR_UNIT, UNIT_JOINER, m, MINUTE_UNIT),
        }
    }
}
