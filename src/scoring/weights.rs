use log::debug;
use serde::{Deserialize, Serialize};

/// Non-negative weight per scoring criterion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub seat_count: f64,
    pub passage_width: f64,
    pub natural_light: f64,
    pub traffic_flow: f64,
    pub face_to_face_bonus: f64,
    pub space_efficiency: f64,
}

impl Default for WeightProfile {
    fn default() -> Self {
        WeightProfile {
            seat_count: 1.0,
            passage_width: 0.8,
            natural_light: 0.5,
            traffic_flow: 0.6,
            face_to_face_bonus: 0.3,
            space_efficiency: 0.4,
        }
    }
}

impl WeightProfile {
    /// A named, pre-tuned profile, or `None` for unknown names.
    pub fn preset(name: &str) -> Option<WeightProfile> {
        let profile = match name {
            "max_seats" => WeightProfile {
                seat_count: 2.0,
                passage_width: 0.4,
                natural_light: 0.2,
                traffic_flow: 0.3,
                face_to_face_bonus: 0.1,
                space_efficiency: 0.8,
            },
            "comfort" => WeightProfile {
                seat_count: 0.5,
                passage_width: 1.2,
                natural_light: 1.0,
                traffic_flow: 0.8,
                face_to_face_bonus: 0.3,
                space_efficiency: 0.3,
            },
            "collaboration" => WeightProfile {
                seat_count: 0.8,
                passage_width: 0.6,
                natural_light: 0.4,
                traffic_flow: 0.5,
                face_to_face_bonus: 1.5,
                space_efficiency: 0.4,
            },
            "ergonomic" => WeightProfile {
                seat_count: 0.6,
                passage_width: 1.5,
                natural_light: 0.8,
                traffic_flow: 1.0,
                face_to_face_bonus: 0.2,
                space_efficiency: 0.3,
            },
            "balanced" => WeightProfile::default(),
            _ => return None,
        };
        Some(profile)
    }

    /// Resolution order: explicit override > named preset > default profile.
    /// An unknown preset name falls back to the default profile, never an
    /// error.
    pub fn resolve(explicit: Option<&WeightProfile>, preset: Option<&str>) -> WeightProfile {
        if let Some(w) = explicit {
            return *w;
        }
        match preset {
            Some(name) => WeightProfile::preset(name).unwrap_or_else(|| {
                debug!("unknown weight preset {name:?}, using default profile");
                WeightProfile::default()
            }),
            None => WeightProfile::default(),
        }
    }
}
