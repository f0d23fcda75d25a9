//! Built-in dialect profiles.

mod ios;
mod junos;
mod mikrotik;
mod sros;

pub use ios::{EOS, IOS, IOSXR};
pub use junos::JUNOS;
pub use mikrotik::MIKROTIK;
pub use sros::SROS;

use crate::rules::DialectProfile;

/// Profiles loaded into [`crate::Registry::builtin`], in lookup order.
pub static BUILTIN: [&DialectProfile; 6] = [&IOS, &IOSXR, &EOS, &JUNOS, &SROS, &MIKROTIK];
