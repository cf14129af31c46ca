use crate::{PROMPT, PROMPT_COLOR};
use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
/// A minimal interactive command interpreter.
pub struct Config {
    /// text printed before each command line
    #[argh(option, default = "String::from(PROMPT)")]
    pub prompt: String,

    /// print the prompt without the yellow styling
    #[argh(switch)]
    pub no_color: bool,
}

impl Config {
    /// The prompt exactly as it is written to stdout.
    pub fn styled_prompt(&self) -> String {
        if self.no_color {
            self.prompt.clone()
        } else {
            format!("{}{}", PROMPT_COLOR, self.prompt)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: String::from(PROMPT),
            no_color: false,
        }
    }
}
