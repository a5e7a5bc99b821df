use serde::{Deserialize, Serialize};
use std::fmt;

/// The five sustainability pillars an organization is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionId {
    Gestion,
    Personas,
    Planeta,
    Prosperidad,
    Alianzas,
}

impl DimensionId {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Gestion,
            Self::Personas,
            Self::Planeta,
            Self::Prosperidad,
            Self::Alianzas,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Gestion => "gestion",
            Self::Personas => "personas",
            Self::Planeta => "planeta",
            Self::Prosperidad => "prosperidad",
            Self::Alianzas => "alianzas",
        }
    }

    pub const fn icon(self) -> DimensionIcon {
        match self {
            Self::Gestion => DimensionIcon::Briefcase,
            Self::Personas => DimensionIcon::Users,
            Self::Planeta => DimensionIcon::Globe,
            Self::Prosperidad => DimensionIcon::TrendingUp,
            Self::Alianzas => DimensionIcon::Handshake,
        }
    }

    pub const fn hex_color(self) -> &'static str {
        match self {
            Self::Gestion => "#EAB308",
            Self::Personas => "#F97316",
            Self::Planeta => "#0D9488",
            Self::Prosperidad => "#2563EB",
            Self::Alianzas => "#4F46E5",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|id| id.key() == normalized)
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fixed icon set; each dimension maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionIcon {
    Briefcase,
    Users,
    Globe,
    TrendingUp,
    Handshake,
}

impl DimensionIcon {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Briefcase => "Briefcase",
            Self::Users => "Users",
            Self::Globe => "Globe",
            Self::TrendingUp => "TrendingUp",
            Self::Handshake => "Handshake",
        }
    }
}

/// Ordered maturity bands, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityTier {
    Inicial,
    Proceso,
    Avanzado,
    Lider,
}

impl MaturityTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Inicial, Self::Proceso, Self::Avanzado, Self::Lider]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Inicial => "inicial",
            Self::Proceso => "proceso",
            Self::Avanzado => "avanzado",
            Self::Lider => "lider",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inicial => "Inicial",
            Self::Proceso => "En Proceso",
            Self::Avanzado => "Avanzado",
            Self::Lider => "Líder",
        }
    }
}

impl fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A classified answer value.
///
/// Raw answers are plain numbers (that is how they are persisted), so every
/// lookup goes through [`AnswerValue::from_raw`]. Anything that is not one of
/// the recognized values is reported as unrecognized and never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    Scale(u8),
    DontKnow,
    NotApplicable,
}

impl AnswerValue {
    pub const SCALE_MAX: u8 = 3;
    pub const NOT_APPLICABLE: f64 = -1.0;
    pub const DONT_KNOW: f64 = 0.1;

    pub fn from_raw(raw: f64) -> Option<Self> {
        if !raw.is_finite() {
            return None;
        }
        if raw == Self::NOT_APPLICABLE {
            return Some(Self::NotApplicable);
        }
        if (raw - Self::DONT_KNOW).abs() < 1e-9 {
            return Some(Self::DontKnow);
        }
        if raw.fract() == 0.0 && (0.0..=f64::from(Self::SCALE_MAX)).contains(&raw) {
            return Some(Self::Scale(raw as u8));
        }
        None
    }

    pub fn raw(self) -> f64 {
        match self {
            Self::Scale(value) => f64::from(value),
            Self::DontKnow => Self::DONT_KNOW,
            Self::NotApplicable => Self::NOT_APPLICABLE,
        }
    }

    pub const fn is_sentinel(self) -> bool {
        !matches!(self, Self::Scale(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub title: String,
    pub description: String,
    pub color: String,
}

impl Dimension {
    pub const fn icon(&self) -> DimensionIcon {
        self.id.icon()
    }

    pub const fn hex_color(&self) -> &'static str {
        self.id.hex_color()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub dimension: DimensionId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: f64,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl AnswerOption {
    pub fn kind(&self) -> Option<AnswerValue> {
        AnswerValue::from_raw(self.value)
    }
}

/// Inclusive integer band over the 0-100 percentage range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub tier: MaturityTier,
    pub label: String,
    pub min: u8,
    pub max: u8,
}

impl TierBand {
    pub const fn contains(&self, score: u8) -> bool {
        score >= self.min && score <= self.max
    }
}
