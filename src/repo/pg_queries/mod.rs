//! One async query function per entity operation, all speaking directly to
//! the durable store through [`Repository::connect`](super::Repository::connect).

mod bookings;
pub use bookings::*;

mod cities;
pub use cities::*;

mod complaints;
pub use complaints::*;

mod properties;
pub use properties::*;

mod reviews;
pub use reviews::*;

mod users;
pub use users::*;
