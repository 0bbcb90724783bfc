//! Ticket protocol identifiers
//!
//! Format: `CH` + 14-digit UTC timestamp (`yyyyMMddHHmmss`) + 4-digit random
//! suffix in [1000, 9999]. Not cryptographically unique; two drafts finalized
//! within the same second can collide on an unlucky draw.

use chrono::Utc;
use rand::Rng;

/// Generate a new ticket protocol, e.g. `CH202608281530221234`.
pub fn generate() -> String {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let suffix: u16 = rand::thread_rng().gen_range(1000..=9999);
    format!("CH{timestamp}{suffix}")
}
