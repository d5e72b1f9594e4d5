//! Station readout (the little screen on the machine)

use alloc::string::String;
use core::fmt;

/// What the station's readout currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Readout {
    /// Nothing
    #[default]
    Blank,
    /// Job progress in percent, `[0, 100]`
    Progress(f32),
    /// Free text (end text, next text, or set by the host)
    Text(String),
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readout::Blank => Ok(()),
            Readout::Progress(pct) => write!(f, "{:.2}%", pct),
            Readout::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_progress_formatting() {
        assert_eq!(Readout::Progress(33.333).to_string(), "33.33%");
        assert_eq!(Readout::Progress(100.0).to_string(), "100.00%");
    }

    #[test]
    fn test_text_and_blank() {
        assert_eq!(Readout::Text("Done!".into()).to_string(), "Done!");
        assert_eq!(Readout::Blank.to_string(), "");
    }
}
