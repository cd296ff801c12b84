pub mod api_utils;
pub mod confirm;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod llm;
pub mod theme;
pub mod toast;
