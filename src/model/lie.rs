use std::fmt;

/// Where the ball sits at the start or end of a stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Sand,
    Trap,
    Green,
    Hole,
    /// Somewhere between the second shot and the green.
    Approach,
    /// Placeholder when a second shot's starting lie was never recorded.
    Unknown,
    Other(String),
}

impl Lie {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "tee" => Lie::Tee,
            "fairway" => Lie::Fairway,
            "rough" => Lie::Rough,
            "sand" => Lie::Sand,
            "trap" => Lie::Trap,
            "green" => Lie::Green,
            "hole" => Lie::Hole,
            "approach" => Lie::Approach,
            "unknown" => Lie::Unknown,
            _ => Lie::Other(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Lie::Tee => "tee",
            Lie::Fairway => "fairway",
            Lie::Rough => "rough",
            Lie::Sand => "sand",
            Lie::Trap => "trap",
            Lie::Green => "green",
            Lie::Hole => "hole",
            Lie::Approach => "approach",
            Lie::Unknown => "unknown",
            Lie::Other(s) => s,
        }
    }

    /// Lies from which the recorded approach distance is taken as the tee
    /// ball's landing distance.
    #[must_use]
    pub fn measures_approach(&self) -> bool {
        matches!(self, Lie::Fairway | Lie::Rough | Lie::Trap)
    }

    /// Single-character code used by the strokes-gained calculator form.
    /// Anything the form has no option for is sent as fairway.
    #[must_use]
    pub fn calculator_code(&self) -> char {
        match self {
            Lie::Tee => 't',
            Lie::Rough => 'r',
            Lie::Sand | Lie::Trap => 's',
            Lie::Green | Lie::Hole => 'g',
            _ => 'f',
        }
    }
}

impl fmt::Display for Lie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Lie {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
