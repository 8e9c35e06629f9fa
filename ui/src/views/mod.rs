mod home;
pub use home::Home;

mod report;
pub use report::Report;
