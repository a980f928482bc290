use serde::{Deserialize, Serialize};

/// A named standard screw size, resolved to a `(diameter, length)` pair via
/// [`ScrewPreset::spec`]. A convenience constructor for
/// [`crate::connection::ConnectionKind::Screw`]; it changes no validation
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ScrewPreset {
    Slim(SlimScrew),
    CoarseThread(CoarseThreadScrew),
}

impl ScrewPreset {
    /// The `(diameter_mm, length_mm)` this preset resolves to.
    pub fn spec(self) -> (f64, f64) {
        match self {
            ScrewPreset::Slim(s) => s.spec(),
            ScrewPreset::CoarseThread(s) => s.spec(),
        }
    }

    /// Looks up a preset by its diameter/length label, as the DSL parser
    /// would when resolving a `Slim(3.3, 50)` / `Coarse(3.8, 57)` literal.
    pub fn find(kind: &str, diameter: f64, length: f64) -> Option<ScrewPreset> {
        match kind {
            "Slim" => SlimScrew::find(diameter, length).map(ScrewPreset::Slim),
            "Coarse" => CoarseThreadScrew::find(diameter, length).map(ScrewPreset::CoarseThread),
            _ => None,
        }
    }
}

/// Standard slim-screw (thin shank, splits wood less, no pilot hole
/// required) sizes in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlimScrew {
    D3_3L25,
    D3_3L30,
    D3_3L35,
    D3_3L40,
    D3_3L45,
    D3_3L50,
    D3_8L55,
    D3_8L60,
    D3_8L65,
    D3_8L70,
    D3_8L75,
    D4_2L90,
}

impl SlimScrew {
    pub fn spec(self) -> (f64, f64) {
        match self {
            SlimScrew::D3_3L25 => (3.3, 25.0),
            SlimScrew::D3_3L30 => (3.3, 30.0),
            SlimScrew::D3_3L35 => (3.3, 35.0),
            SlimScrew::D3_3L40 => (3.3, 40.0),
            SlimScrew::D3_3L45 => (3.3, 45.0),
            SlimScrew::D3_3L50 => (3.3, 50.0),
            SlimScrew::D3_8L55 => (3.8, 55.0),
            SlimScrew::D3_8L60 => (3.8, 60.0),
            SlimScrew::D3_8L65 => (3.8, 65.0),
            SlimScrew::D3_8L70 => (3.8, 70.0),
            SlimScrew::D3_8L75 => (3.8, 75.0),
            SlimScrew::D4_2L90 => (4.2, 90.0),
        }
    }

    pub fn find(diameter: f64, length: f64) -> Option<SlimScrew> {
        [
            SlimScrew::D3_3L25,
            SlimScrew::D3_3L30,
            SlimScrew::D3_3L35,
            SlimScrew::D3_3L40,
            SlimScrew::D3_3L45,
            SlimScrew::D3_3L50,
            SlimScrew::D3_8L55,
            SlimScrew::D3_8L60,
            SlimScrew::D3_8L65,
            SlimScrew::D3_8L70,
            SlimScrew::D3_8L75,
            SlimScrew::D4_2L90,
        ]
        .into_iter()
        .find(|s| s.spec() == (diameter, length))
    }
}

/// Standard coarse-thread-screw (deeper pitch, stronger holding power)
/// sizes in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoarseThreadScrew {
    D3_8L25,
    D3_8L30,
    D3_8L35,
    D3_8L40,
    D3_8L45,
    D3_8L50,
    D3_8L57,
    D4_2L65,
    D4_2L75,
    D4_5L90,
    D4_5L100,
    D5_2L120,
}

impl CoarseThreadScrew {
    pub fn spec(self) -> (f64, f64) {
        match self {
            CoarseThreadScrew::D3_8L25 => (3.8, 25.0),
            CoarseThreadScrew::D3_8L30 => (3.8, 30.0),
            CoarseThreadScrew::D3_8L35 => (3.8, 35.0),
            CoarseThreadScrew::D3_8L40 => (3.8, 40.0),
            CoarseThreadScrew::D3_8L45 => (3.8, 45.0),
            CoarseThreadScrew::D3_8L50 => (3.8, 50.0),
            CoarseThreadScrew::D3_8L57 => (3.8, 57.0),
            CoarseThreadScrew::D4_2L65 => (4.2, 65.0),
            CoarseThreadScrew::D4_2L75 => (4.2, 75.0),
            CoarseThreadScrew::D4_5L90 => (4.5, 90.0),
            CoarseThreadScrew::D4_5L100 => (4.5, 100.0),
            CoarseThreadScrew::D5_2L120 => (5.2, 120.0),
        }
    }

    pub fn find(diameter: f64, length: f64) -> Option<CoarseThreadScrew> {
        [
            CoarseThreadScrew::D3_8L25,
            CoarseThreadScrew::D3_8L30,
            CoarseThreadScrew::D3_8L35,
            CoarseThreadScrew::D3_8L40,
            CoarseThreadScrew::D3_8L45,
            CoarseThreadScrew::D3_8L50,
            CoarseThreadScrew::D3_8L57,
            CoarseThreadScrew::D4_2L65,
            CoarseThreadScrew::D4_2L75,
            CoarseThreadScrew::D4_5L90,
            CoarseThreadScrew::D4_5L100,
            CoarseThreadScrew::D5_2L120,
        ]
        .into_iter()
        .find(|s| s.spec() == (diameter, length))
    }
}
