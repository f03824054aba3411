#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failed to switch terminal mode: {0}")]
    TerminalMode(#[source] std::io::Error),

    #[error("Prompt I/O error: {0}")]
    PromptIo(#[source] std::io::Error),
}
