pub mod check_in;
pub mod member;

pub use check_in::CheckInRecord;
pub use member::Member;
