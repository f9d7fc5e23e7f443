//! Zone area reconciliation.
//!
//! A ceramic zone can carry three disagreeing areas: its geometry
//! (`perimeter × height`), a manual `effective_area` override, and a legacy
//! stored `area`. [`ReconcileBands::resolve`] picks one, always non-negative.

use bilind_config::ReconcileConfig;
use bilind_core::entities::CeramicZone;
use bilind_core::enums::SurfaceType;
use bilind_core::responses::{ResolveAreaResponse, ResolvedZone};

/// Thresholds deciding when an override is trusted over geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconcileBands {
    /// Overrides above `upper_ratio × gross` are stale.
    pub upper_ratio: f64,
    /// Overrides below `lower_ratio × gross` are stale.
    pub lower_ratio: f64,
    /// Floor/ceiling geometry at or below this is placeholder geometry.
    pub placeholder_gross: f64,
    /// Exact gross of the 1×1 placeholder used for floors entered by area.
    pub placeholder_floor_area: f64,
}

impl Default for ReconcileBands {
    fn default() -> Self {
        Self::from(&ReconcileConfig::default())
    }
}

impl From<&ReconcileConfig> for ReconcileBands {
    fn from(config: &ReconcileConfig) -> Self {
        Self {
            upper_ratio: config.upper_ratio,
            lower_ratio: config.lower_ratio,
            placeholder_gross: config.placeholder_gross,
            placeholder_floor_area: config.placeholder_floor_area,
        }
    }
}

/// `perimeter × height` when both are positive, else zero.
#[must_use]
pub fn geometry_area(zone: &CeramicZone) -> f64 {
    if zone.perimeter > 0.0 && zone.height > 0.0 {
        zone.perimeter * zone.height
    } else {
        0.0
    }
}

/// Authoritative area of `zone` under the default bands.
#[must_use]
pub fn resolve_area(zone: &CeramicZone) -> f64 {
    ReconcileBands::default().resolve(zone)
}

impl ReconcileBands {
    #[must_use]
    pub fn resolve(&self, zone: &CeramicZone) -> f64 {
        let gross = geometry_area(zone);
        let stored = zone.area.max(0.0);

        if zone.surface_type == SurfaceType::Floor
            && (gross - self.placeholder_floor_area).abs() < f64::EPSILON
            && stored > self.placeholder_floor_area
        {
            return stored;
        }

        if let Some(effective) = zone.effective_area.filter(|area| *area > 0.0) {
            if gross <= 0.0 {
                return effective;
            }
            if zone.surface_type.is_horizontal()
                && gross <= self.placeholder_gross
                && effective > gross
            {
                return effective;
            }
            if effective > gross * self.upper_ratio || effective < gross * self.lower_ratio {
                return gross;
            }
            return effective;
        }

        if gross > 0.0 { gross } else { stored }
    }

    #[must_use]
    pub fn resolve_zone(&self, zone: &CeramicZone) -> ResolvedZone {
        ResolvedZone {
            name: zone.name.clone(),
            room_name: zone.room_name.clone(),
            surface_type: zone.surface_type,
            gross: geometry_area(zone),
            effective_area: zone.effective_area,
            area: self.resolve(zone),
        }
    }

    /// Resolve every zone and total the results.
    #[must_use]
    pub fn resolve_all(&self, zones: &[CeramicZone]) -> ResolveAreaResponse {
        let zones: Vec<ResolvedZone> = zones.iter().map(|zone| self.resolve_zone(zone)).collect();
        let total_area = zones.iter().map(|zone| zone.area).sum();
        ResolveAreaResponse { zones, total_area }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn wall_zone(perimeter: f64, height: f64, effective: Option<f64>) -> CeramicZone {
        CeramicZone {
            perimeter,
            height,
            effective_area: effective,
            ..CeramicZone::default()
        }
    }

    #[rstest]
    #[case::stale_high(Some(20.5), 10.0)]
    #[case::plausible_deduction(Some(9.5), 9.5)]
    #[case::inside_upper(Some(11.4), 11.4)]
    #[case::just_above_band(Some(11.6), 10.0)]
    #[case::inside_lower(Some(8.6), 8.6)]
    #[case::stale_low(Some(1.0), 10.0)]
    #[case::zero_override_ignored(Some(0.0), 10.0)]
    #[case::negative_override_ignored(Some(-4.0), 10.0)]
    #[case::absent(None, 10.0)]
    fn wall_override_band(#[case] effective: Option<f64>, #[case] expected: f64) {
        let zone = wall_zone(5.0, 2.0, effective);
        assert!((resolve_area(&zone) - expected).abs() < 1e-9);
    }

    #[test]
    fn floor_placeholder_recovers_stored_area() {
        let zone = CeramicZone {
            surface_type: SurfaceType::Floor,
            perimeter: 1.0,
            height: 1.0,
            area: 10.79,
            ..CeramicZone::default()
        };
        assert!((resolve_area(&zone) - 10.79).abs() < 1e-12);
    }

    #[test]
    fn horizontal_placeholder_trusts_larger_override() {
        let ceiling = CeramicZone {
            surface_type: SurfaceType::Ceiling,
            perimeter: 1.0,
            height: 1.0,
            effective_area: Some(14.2),
            ..CeramicZone::default()
        };
        assert!((resolve_area(&ceiling) - 14.2).abs() < 1e-12);

        // A wall zone gets no such exception.
        let wall = wall_zone(1.0, 1.0, Some(14.2));
        assert!((resolve_area(&wall) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn override_without_geometry_is_trusted() {
        let zone = wall_zone(0.0, 2.0, Some(7.3));
        assert!((resolve_area(&zone) - 7.3).abs() < 1e-12);
    }

    #[test]
    fn stored_area_is_the_last_resort() {
        let zone = CeramicZone {
            area: 6.4,
            ..CeramicZone::default()
        };
        assert!((resolve_area(&zone) - 6.4).abs() < 1e-12);

        let negative = CeramicZone {
            area: -2.0,
            ..CeramicZone::default()
        };
        assert_eq!(resolve_area(&negative), 0.0);
    }

    #[test]
    fn legacy_strings_flow_through_deserialization() {
        let zone: CeramicZone = serde_json::from_str(
            r#"{"perimeter": "5,0", "height": "2", "effective_area": "9,5", "area": "bogus"}"#,
        )
        .unwrap();
        assert!((resolve_area(&zone) - 9.5).abs() < 1e-12);
    }

    #[test]
    fn custom_bands_tighten_trust() {
        let bands = ReconcileBands {
            lower_ratio: 0.98,
            ..ReconcileBands::default()
        };
        let zone = wall_zone(5.0, 2.0, Some(9.5));
        assert!((bands.resolve(&zone) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn resolve_all_totals_zones() {
        let zones = vec![
            wall_zone(5.0, 2.0, Some(20.5)),
            CeramicZone::for_floor("Bath", 10.79),
        ];
        let response = ReconcileBands::default().resolve_all(&zones);
        assert_eq!(response.zones.len(), 2);
        assert!((response.zones[0].gross - 10.0).abs() < 1e-12);
        assert!((response.total_area - 20.79).abs() < 1e-9);
    }
}
