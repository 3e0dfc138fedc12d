//! GitHub Actions integration: step outputs and the job summary.

pub mod outputs;
pub mod summary;

pub use outputs::set_output;
pub use summary::prepend_issue_link;
