use std::process::Command;

use trafficlog_core::sample::RawRound;

use super::SampleSource;
use crate::{config::ConfigurationError, legacy::ReportParser};

/// samples a route by running an external command that prints a route report,
/// such as a single-shot route script. the report is read with [`ReportParser`].
pub struct CommandSampleSource {
    program: String,
    args: Vec<String>,
    parser: ReportParser,
}

impl CommandSampleSource {
    /// # Arguments
    /// * `command` - program followed by its arguments
    pub fn new(command: &[String]) -> Result<CommandSampleSource, ConfigurationError> {
        let (program, args) = command
            .split_first()
            .filter(|(program, _)| !program.trim().is_empty())
            .ok_or(ConfigurationError::EmptyLegacyCommand)?;
        let parser = ReportParser::new()
            .map_err(|e| ConfigurationError::ReportParserError(e.to_string()))?;
        Ok(CommandSampleSource {
            program: program.clone(),
            args: args.to_vec(),
            parser,
        })
    }

    fn run(&self) -> Result<String, String> {
        log::debug!("running {} {:?}", self.program, self.args);
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| format!("failure running '{}': {e}", self.program))?;
        if !output.status.success() {
            return Err(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl SampleSource for CommandSampleSource {
    fn collect_round(&mut self) -> RawRound {
        match self.run() {
            Ok(stdout) => self.parser.parse(&stdout),
            Err(e) => RawRound::failed(vec![e]),
        }
    }
}
