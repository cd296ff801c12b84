pub mod aggregate;

pub use aggregate::{
    Category, CategoryDraft, CategoryStatus, CreateCategoryDto, StatusDisplay, UpdateCategoryDto,
};
