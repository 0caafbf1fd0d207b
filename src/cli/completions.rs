use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    plum completions bash > ~/.bash_completion.d/plum\n\n\
                  Generate zsh completions:\n    plum completions zsh > ~/.zfunc/_plum\n\n\
                  Generate fish completions:\n    plum completions fish > ~/.config/fish/completions/plum.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
