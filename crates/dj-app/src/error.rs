use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("event loop closed before {0} could be delivered")]
    EventLoopClosed(&'static str),
}
