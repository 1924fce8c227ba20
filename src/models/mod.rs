// Module exports for models
// Plain data shared by the widgets and the settings service

pub mod appearance;
pub mod event;
pub mod settings;
