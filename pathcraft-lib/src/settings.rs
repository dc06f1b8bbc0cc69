//! User-adjustable editor settings.

use crate::consts;

/// Tunables for [`EditSession`] and SVG export.
///
/// Every field has a default, so a settings file only needs to name the
/// values it changes.
///
/// [`EditSession`]: crate::EditSession
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Max distance from a segment's curve for that segment to be hovered.
    pub segment_select_distance: f64,
    /// Max distance from an anchor for it to be picked for deletion.
    pub anchor_select_distance: f64,
    pub nearest_accuracy: f64,
    pub svg_stroke_width: f64,
    pub svg_padding: f64,
    pub svg_point_radius: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        EditorSettings {
            segment_select_distance: consts::SEGMENT_SELECT_DISTANCE,
            anchor_select_distance: consts::ANCHOR_SELECT_DISTANCE,
            nearest_accuracy: consts::NEAREST_ACCURACY,
            svg_stroke_width: consts::SVG_STROKE_WIDTH,
            svg_padding: consts::SVG_PADDING,
            svg_point_radius: consts::SVG_POINT_RADIUS,
        }
    }
}

impl EditorSettings {
    /// Replace any nonsensical value with its default, logging each one.
    ///
    /// Nothing may be negative or non-finite, and the selection distances
    /// and `nearest_accuracy` must also be non-zero.
    pub fn sanitized(mut self) -> Self {
        let defaults = EditorSettings::default();
        // hit-testing needs strictly positive distances and accuracy
        let fields = [
            (
                "segment_select_distance",
                &mut self.segment_select_distance,
                defaults.segment_select_distance,
                true,
            ),
            (
                "anchor_select_distance",
                &mut self.anchor_select_distance,
                defaults.anchor_select_distance,
                true,
            ),
            (
                "nearest_accuracy",
                &mut self.nearest_accuracy,
                defaults.nearest_accuracy,
                true,
            ),
            (
                "svg_stroke_width",
                &mut self.svg_stroke_width,
                defaults.svg_stroke_width,
                false,
            ),
            (
                "svg_padding",
                &mut self.svg_padding,
                defaults.svg_padding,
                false,
            ),
            (
                "svg_point_radius",
                &mut self.svg_point_radius,
                defaults.svg_point_radius,
                false,
            ),
        ];
        for (name, value, default, positive) in fields {
            let out_of_range = if positive {
                *value <= 0.0
            } else {
                *value < 0.0
            };
            if !value.is_finite() || out_of_range {
                log::warn!("invalid setting {} = {}, using {}", name, value, default);
                *value = default;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_use_defaults() {
        let json = r#"{ "anchor_select_distance": 0.25 }"#;
        let settings: EditorSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.anchor_select_distance, 0.25);
        assert_eq!(
            settings.segment_select_distance,
            consts::SEGMENT_SELECT_DISTANCE
        );
    }

    #[test]
    fn sanitize() {
        let settings = EditorSettings {
            segment_select_distance: -1.0,
            svg_padding: f64::NAN,
            anchor_select_distance: 0.3,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(
            settings.segment_select_distance,
            consts::SEGMENT_SELECT_DISTANCE
        );
        assert_eq!(settings.svg_padding, consts::SVG_PADDING);
        assert_eq!(settings.anchor_select_distance, 0.3);
    }

    #[test]
    fn sanitize_zero_hit_test_values() {
        let settings = EditorSettings {
            nearest_accuracy: 0.0,
            anchor_select_distance: 0.0,
            svg_padding: 0.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.nearest_accuracy, consts::NEAREST_ACCURACY);
        assert_eq!(
            settings.anchor_select_distance,
            consts::ANCHOR_SELECT_DISTANCE
        );
        assert_eq!(settings.svg_padding, 0.0);
    }
}
