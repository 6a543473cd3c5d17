pub mod analysis;
pub mod comparison;
pub mod dashboard;
pub mod details;
pub mod loading;
pub mod overview;
pub mod predict;
pub mod training;
