pub mod narration;
pub mod pipeline;
pub mod product;
pub mod session;
pub mod summary;
