use serde_with::DeserializeFromStr;
use serde_with::SerializeDisplay;
use strum_macros::Display;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// Slowness type a ray segment propagates with.
///
/// Parses both the short form (`P`) and the model attribute name
/// (`PSLOWNESS`), ignoring case. Displays the short form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(ascii_case_insensitive)]
pub enum WaveType {
    #[strum(to_string = "P", serialize = "PSLOWNESS")]
    P,
    #[strum(to_string = "S", serialize = "SSLOWNESS")]
    S,
}

impl WaveType {
    /// Name of the velocity-model attribute carrying this slowness.
    pub fn slowness_attribute(self) -> &'static str {
        match self {
            Self::P => "PSLOWNESS",
            Self::S => "SSLOWNESS",
        }
    }

    /// `P`/`p` and `S`/`s`; anything else has no wave type.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(Self::P),
            'S' => Some(Self::S),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::P => Self::S,
            Self::S => Self::P,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_short_and_attribute_forms() {
        assert_eq!("p".parse::<WaveType>(), Ok(WaveType::P));
        assert_eq!("SSLOWNESS".parse::<WaveType>(), Ok(WaveType::S));
        assert_eq!("pslowness".parse::<WaveType>(), Ok(WaveType::P));
        assert!("K".parse::<WaveType>().is_err());
    }

    #[test]
    fn displays_short_form() {
        assert_eq!(WaveType::S.to_string(), "S");
        assert_eq!(WaveType::P.slowness_attribute(), "PSLOWNESS");
        assert_eq!(WaveType::P.other(), WaveType::S);
    }
}
