use uuid::Uuid;
use dj_core::GenerationError;
use crate::ui::UiEvent;

#[derive(Debug, Clone)]
pub enum DjEvent {
    Ui(UiEvent),
    Gen(GenEvent),
}

#[derive(Debug, Clone)]
pub enum GenEvent {
    /// A dispatched generation call finished, successfully or not.
    Settled {
        id: Uuid,
        result: Result<String, GenerationError>,
    },
}
