pub mod bil;
pub mod logger;
