pub mod feedback;
pub mod screening;
