use rand::Rng;

use crate::error::OrderError;

pub const PUBLIC_ID_PREFIX: &str = "SF-";

/// The namespace only holds 100 000 numbers, so a saturated store could
/// spin forever; 50 draws keeps the collision loop bounded.
pub const MAX_GENERATION_ATTEMPTS: u32 = 50;

/// Draws `SF-NNNNN` candidates until `is_taken` reports a free one.
pub fn generate_public_id<R: Rng>(
    rng: &mut R,
    is_taken: impl Fn(&str) -> bool,
) -> Result<String, OrderError> {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let number = rng.random_range(0..100_000u32);
        let candidate = format!("{PUBLIC_ID_PREFIX}{number:05}");
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }
    Err(OrderError::IdSpaceExhausted {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}
