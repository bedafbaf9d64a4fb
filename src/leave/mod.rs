// Leave data module entry
// Defines the leave record model and the pluggable data source behind /api/leaves

mod model;
mod provider;

pub use model::{LeaveRecord, LeaveType};
pub use provider::{LeaveProvider, ProviderError, SampleLeaveProvider};
