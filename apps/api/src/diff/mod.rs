// Word diff used to highlight what the model changed in the résumé.

pub mod handlers;
pub mod renderer;
pub mod session;
