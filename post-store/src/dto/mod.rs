pub mod responses;

pub use responses::PostSummary;
