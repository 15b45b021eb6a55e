use std::fmt;

/// Report produced when the binary is invoked with the wrong number of
/// arguments: a usage line followed by one echo line per received argument,
/// including the program name at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInvocation {
    argv: Vec<String>,
}

impl InvalidInvocation {
    pub(crate) fn new(argv: &[String]) -> Self {
        Self {
            argv: argv.to_vec(),
        }
    }

    fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("kilorun")
    }
}

impl fmt::Display for InvalidInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Usage: {} data_dir probe_path", self.program())?;
        for (i, arg) in self.argv.iter().enumerate() {
            writeln!(f, "Argument {i}: {arg}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidInvocation {}
