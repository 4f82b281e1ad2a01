pub mod calendar;
pub mod elapsed;
pub mod input;
pub mod relative;

pub use calendar::{MONTH_NAMES, format_date, is_same_year};
pub use elapsed::{ElapsedDuration, diff};
pub use input::{DateInput, InvalidInputError, is_valid_input, normalize};
pub use relative::{
    Clock, FixedClock, FormatError, FormatOptions, SystemClock, format_relative_time,
    format_relative_time_with_clock,
};
