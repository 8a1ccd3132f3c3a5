use serde::{Deserialize, Serialize};

/// The generating parameters of a palette. Persistence stores these and
/// only these: re-running the deterministic pipeline on the same
/// parameters reproduces the palette exactly, so derived colors are never
/// saved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteParams {
    pub energy: f64,
    pub tension: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_base: Option<f64>,
    #[serde(default)]
    pub hue_auto: bool,
    #[serde(default)]
    pub spectrum_mode: bool,
    #[serde(default = "default_auto_fix")]
    pub auto_fix: bool,
}

fn default_auto_fix() -> bool {
    true
}

impl Default for PaletteParams {
    fn default() -> Self {
        Self {
            energy: 45.0,
            tension: 35.0,
            hue_base: Some(220.0),
            hue_auto: false,
            spectrum_mode: false,
            auto_fix: true,
        }
    }
}

impl PaletteParams {
    /// Shareable query string, mirroring the studio URL scheme
    /// (`e`, `t`, `h`, `ha`, `sm`, `af`).
    pub fn share_query(&self) -> String {
        let mut query = format!(
            "e={}&t={}",
            self.energy.round() as i64,
            self.tension.round() as i64
        );
        if let Some(hue) = self.hue_base {
            query.push_str(&format!("&h={}", hue.round() as i64));
        }
        query.push_str(&format!(
            "&ha={}&sm={}&af={}",
            flag(self.hue_auto),
            flag(self.spectrum_mode),
            flag(self.auto_fix)
        ));
        query
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_query_round_numbers() {
        let params = PaletteParams {
            energy: 45.0,
            tension: 35.0,
            hue_base: Some(220.0),
            hue_auto: false,
            spectrum_mode: false,
            auto_fix: true,
        };
        assert_eq!(params.share_query(), "e=45&t=35&h=220&ha=0&sm=0&af=1");
    }

    #[test]
    fn share_query_omits_absent_hue() {
        let params = PaletteParams {
            hue_base: None,
            hue_auto: true,
            ..PaletteParams::default()
        };
        assert_eq!(params.share_query(), "e=45&t=35&ha=1&sm=0&af=1");
    }
}
