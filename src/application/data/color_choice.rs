use clap::ValueEnum;
use supports_color::Stream;

/// Whether shell error messages are highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Applies the choice to `colored`, which otherwise makes its own guess
    /// from the environment.
    pub fn apply(self) -> bool {
        let enabled = self.enabled();
        colored::control::set_override(enabled);
        enabled
    }
}
