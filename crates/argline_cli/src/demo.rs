//! The sample grammar: commands, each followed by option/value pairs.
//!
//! ```text
//! Command -option1 SpamAndEggs -numbers 4 5 AnotherCommand -option2 "-notanoption.jpg"
//! ```
//!
//! Every plain token starts a new command. `-option1 <value>` and
//! `-option2 <value>` attach a named value to the command, `-numbers <a> <b>`
//! attaches a pair of integers. Any other option is rejected.

use argline::{CommandLine, ReadError};

/// The command line the `demo` command parses when none is given.
pub const SAMPLE_LINE: &str =
    r#"Command -option1 SpamAndEggs -numbers 4 5 AnotherCommand -option2 "-notanoption.jpg""#;

/// One parsed command of the sample grammar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleCommand {
    pub name: String,
    /// `(option, value)` pairs in input order.
    pub values: Vec<(String, String)>,
    pub numbers: Vec<(i64, i64)>,
}

impl SampleCommand {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }
}

/// Parse the remaining tokens of `line` with the sample grammar.
pub fn parse_sample(line: &mut CommandLine) -> Result<Vec<SampleCommand>, ReadError> {
    let mut commands: Vec<SampleCommand> = Vec::new();

    while let Some(arg) = line.read_next_argument().map(str::to_owned) {
        if !line.is_option() {
            commands.push(SampleCommand::new(&arg));
            continue;
        }
        // An option before any command has nothing to attach to.
        let Some(command) = commands.last_mut() else {
            return Err(line.unexpected_argument());
        };
        match arg.as_str() {
            "-option1" | "-option2" => {
                let value = line.read_next_value()?.to_owned();
                command.values.push((arg, value));
            }
            "-numbers" => {
                let first = line.read_next_value_as_integer()?;
                let second = line.read_next_value_as_integer()?;
                command.numbers.push((first, second));
            }
            _ => return Err(line.unexpected_argument()),
        }
    }

    Ok(commands)
}
