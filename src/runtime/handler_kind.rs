use anyhow::bail;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Handler the process serves invocations with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HandlerKind {
    /// Executes secret rotation steps.
    RotateSecret,
    /// Exports conversation voicemails to the object store.
    ExportVoicemail,
}

impl HandlerKind {
    /// Names of all handlers as accepted on the command line.
    pub const NAMES: [&'static str; 2] = ["rotate-secret", "export-voicemail"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RotateSecret => Self::NAMES[0],
            Self::ExportVoicemail => Self::NAMES[1],
        }
    }
}

impl FromStr for HandlerKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "rotate-secret" => Ok(Self::RotateSecret),
            "export-voicemail" => Ok(Self::ExportVoicemail),
            _ => bail!("Unknown handler ({value})."),
        }
    }
}

impl Display for HandlerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::HandlerKind;
    use std::str::FromStr;

    #[test]
    fn parses_handler_names() -> anyhow::Result<()> {
        for name in HandlerKind::NAMES {
            assert_eq!(HandlerKind::from_str(name)?.to_string(), name);
        }

        assert_eq!(
            HandlerKind::from_str("rotate")
                .unwrap_err()
                .to_string(),
            "Unknown handler (rotate)."
        );

        Ok(())
    }
}
