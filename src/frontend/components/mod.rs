//! UI components.

pub mod assistant_form;
pub mod recent;

pub use assistant_form::AssistantFormView;
pub use recent::RecentAssistants;
