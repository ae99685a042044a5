pub mod chapter_select;
pub mod learning;
pub mod loading;
