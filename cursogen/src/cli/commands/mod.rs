pub mod feedback;
pub mod process;
pub mod show;
pub mod status;
