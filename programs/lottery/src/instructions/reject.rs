use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Handles every instruction whose discriminator matches none of the
/// program's instructions. They all fail without touching any account.
/// Plain lamport transfers never reach the program; they land in the
/// lottery account and go to the next round's winner.
pub fn process_reject(data: &[u8]) -> Result<()> {
    msg!("Rejected instruction with {} bytes of data", data.len());
    err!(LotteryError::Rejected)
}
